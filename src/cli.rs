use clap::{Args as ClapArgs, Parser, Subcommand};
use simpost::PruneMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete members of numbered file series ({dir}/{header}.{n})
    Prune(PruneArgs),
    /// List the existing members of a numbered file series
    Scan(ScanArgs),
    /// Convert a table between CSV and column data files
    Convert {
        /// Input file (.csv, or a column data file)
        input: PathBuf,
        /// Output file (.csv, or a column data file)
        output: PathBuf,
    },
}

#[derive(ClapArgs, Debug)]
pub struct PruneArgs {
    /// Cleanup config (.yaml, .json, .toml or .ron) with a list of jobs
    #[arg(long, conflicts_with_all = ["dir", "headers", "start", "end"])]
    pub config: Option<PathBuf>,

    /// Directory holding the numbered files
    #[arg(long, required_unless_present = "config")]
    pub dir: Option<PathBuf>,

    /// File header, repeat for several families
    #[arg(long = "header", required_unless_present = "config")]
    pub headers: Vec<String>,

    /// First number of the range
    #[arg(long, required_unless_present = "config", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last number of the range, always part of the series
    #[arg(long, required_unless_present = "config", allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Distance between series members
    #[arg(long, default_value_t = 1)]
    pub stride: i64,

    /// Delete everything in the range except the series
    #[arg(long, default_value_t = false)]
    pub all_but: bool,
}

impl PruneArgs {
    pub fn mode(&self) -> PruneMode {
        if self.all_but {
            PruneMode::AllBut
        } else {
            PruneMode::Series
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    #[arg(long)]
    pub dir: PathBuf,

    #[arg(long)]
    pub header: String,

    #[arg(long, default_value_t = i64::MIN, allow_negative_numbers = true)]
    pub start: i64,

    #[arg(long, default_value_t = i64::MAX, allow_negative_numbers = true)]
    pub end: i64,
}
