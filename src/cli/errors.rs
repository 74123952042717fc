use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Organise(#[from] pairbatch::Error),

    #[error("Failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        source: pairbatch::Error,
    },
}
