pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, StartupError, StructureError};

/// JSON pointer to the object holding the run history.
pub const RUNS_POINTER: &str = "/data/project/runs";

/// Offset added to the request counter to produce `runs.totalCount`.
pub const TOTAL_COUNT_BASE: u64 = 5000;
