//! Server configuration loaded from a JSON file.
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Locale;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "UNILINK_CONFIG";

/// Database path that selects the in-memory store instead of SQLite.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON
    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Unknown log level: {0}")]
    LogLevel(String),
}

/// Top-level configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub address: SocketAddr,
    /// SQLite file, or `:memory:` for a non-persistent store
    pub database_path: String,
    /// Locale used when a request names none
    pub default_locale: Locale,
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub log_level: String,
    /// Write initial data the first time a user's profile is requested
    pub seed_on_first_visit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_path: "unilink.db".to_string(),
            default_locale: Locale::default(),
            log_level: "info".to_string(),
            seed_on_first_visit: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Loads the file named by `UNILINK_CONFIG`, or the defaults if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load_from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn uses_in_memory_store(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }
}
