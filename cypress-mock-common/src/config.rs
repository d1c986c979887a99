use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const LISTEN_VAR: &str = "MOCK_LISTEN";
pub const DOCUMENT_VAR: &str = "MOCK_DOCUMENT";

// Settings for the mock server process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen: SocketAddr,
    pub document_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8888)),
            document_path: PathBuf::from("sample.json"),
        }
    }
}

impl Config {
    /// Reads `MOCK_LISTEN` and `MOCK_DOCUMENT` from the process environment,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LISTEN_VAR) {
            config.listen = value
                .parse()
                .map_err(|source| ConfigError::InvalidListen { value, source })?;
        }
        if let Some(value) = lookup(DOCUMENT_VAR) {
            config.document_path = PathBuf::from(value);
        }

        Ok(config)
    }
}
