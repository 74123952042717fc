//! Crate-level error type and `Result` alias for fatal conditions.
//! Anything returned as `Err` stops the run before (or instead of) further
//! side effects; per-file problems are reported as [`crate::types::Issue`] values.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory not found or not listable: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Invalid configuration: {arg}={value:?} ({reason})")]
    InvalidConfiguration {
        arg: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid(arg: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidConfiguration {
            arg,
            value: value.into(),
            reason,
        }
    }
}
