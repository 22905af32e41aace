//! Collector error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading samples or configuration
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("failed to read sample file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode JSON samples from {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to decode bincode samples from {}: {source}", .path.display())]
    Bincode {
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported {kind} format: {value:?}")]
    UnsupportedFormat { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CollectorError>;
