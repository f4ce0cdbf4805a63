//! Crate-level error type.

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use thiserror::Error;
use tracing_appender::rolling::InitError;

/// Errors surfaced by the application shell.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The dish dataset could not be loaded.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// The log file could not be opened.
    #[error("failed to start logging: {0}")]
    Telemetry(#[from] InitError),
    /// Terminal setup or output failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
