pub(crate) mod prune_config_validation;
pub(crate) mod validation_utils;
