use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised while loading the base document; the server never starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse document {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The base document does not have the shape a response is cut from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("missing {0} in document")]
    MissingPath(String),

    #[error("{0} is not an object")]
    NotAnObject(String),

    #[error("{0} is not an array")]
    NotAnArray(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidListen {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
