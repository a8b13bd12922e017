//! Runtime settings: built-in defaults overlaid with `GESTION_*` environment
//! variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `GESTION_CHANNEL_CAPACITY` | `32` |
//! | `GESTION_LOG_LEVEL` | `info` |
//! | `GESTION_LOG_JSON` | `false` |

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "GESTION";
const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Capacity of the store's request channel. Must be at least 1.
    pub channel_capacity: usize,
    /// Level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Emit JSON log lines instead of the compact format.
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(None)
    }

    /// Loads settings from `vars` in place of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_environment(Some(vars))
    }

    fn from_environment(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("channel_capacity", DEFAULT_CHANNEL_CAPACITY as u64)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("log_json", false)?
            .add_source(
                // flat keys: GESTION_CHANNEL_CAPACITY -> channel_capacity
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        if settings.channel_capacity == 0 {
            return Err(ConfigError::Message(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }
}
