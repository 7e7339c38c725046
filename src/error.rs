//! Top-level error type of the country picker binary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::script::ScriptError;

/// Errors that end a country picker session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Script error on line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: ScriptError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
