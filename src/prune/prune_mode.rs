use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Selects which members of a numbered file range get deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PruneMode {
    /// Delete the members of the stride series.
    #[default]
    Series,
    /// Delete everything in the range except the stride series.
    AllBut,
}
