//! Runtime configuration from environment variables.
//!
//! - `DODGE_SEED`: u64 seed for the game RNG (default: seeded from the OS)
//! - `DODGE_LOG_PATH`: file that tracing output is appended to (default: logging off)
//! - `DODGE_LOG`: `EnvFilter` directives for that file (default: `info`)

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const SEED_VAR: &str = "DODGE_SEED";
pub const LOG_PATH_VAR: &str = "DODGE_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "DODGE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DODGE_SEED={value:?} is not a valid u64 seed")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let seed = get(SEED_VAR)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { value, source })
            })
            .transpose()?;

        Ok(Self {
            seed,
            log_path: get(LOG_PATH_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
