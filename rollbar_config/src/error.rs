//! Error types for level parsing and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A severity name outside `debug`, `info`, `warning`, `error`, `critical`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report level {0:?}, expected one of debug, info, warning, error, critical")]
pub struct ParseLevelError(pub String);

/// Failure to build a `RollbarConfig` from an external source.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file passed to `RollbarConfig::load` does not exist.
    #[error("Rollbar configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Figment could not merge or extract the providers (bad types,
    /// unknown level, unreadable file).
    #[error("Rollbar configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),

    /// A JSON document could not be parsed or rendered.
    #[error("Rollbar configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
