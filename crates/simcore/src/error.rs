//! Error types for loading and validating simulation configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or checking a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for this schema.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is outside its permitted range.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
