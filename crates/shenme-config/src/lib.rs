use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::output::OutputConfig;
use self::wiktionary::WiktionaryConfig;

pub mod logging;
pub mod output;
pub mod wiktionary;

pub use output::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub wiktionary: WiktionaryConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Apply `SHENME_HOST`, `SHENME_USER_AGENT` and `SHENME_VERBOSE` from the environment
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("SHENME_HOST").filter(|v| !v.is_empty()) {
            self.wiktionary.host = host;
        }

        if let Some(user_agent) = var("SHENME_USER_AGENT").filter(|v| !v.is_empty()) {
            self.wiktionary.user_agent = user_agent;
        }

        if let Some(verbose) = var("SHENME_VERBOSE") {
            self.logging.verbose = matches!(verbose.as_str(), "1" | "true" | "yes");
        }
    }
}
