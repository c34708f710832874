use std::{env, path::PathBuf};

use dotenv::dotenv;

pub const LOG_CONFIG_VAR: &str = "FITDASH_LOG_CONFIG";
pub const EXPORT_DIR_VAR: &str = "FITDASH_EXPORT_DIR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_EXPORT_DIR: &str = ".";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_config: PathBuf,
    pub export_dir: PathBuf,
}

impl Config {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            log_config: PathBuf::from(setting(LOG_CONFIG_VAR, DEFAULT_LOG_CONFIG)),
            export_dir: PathBuf::from(setting(EXPORT_DIR_VAR, DEFAULT_EXPORT_DIR)),
        }
    }
}
