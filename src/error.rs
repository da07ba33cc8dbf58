use std::path::PathBuf;
use thiserror::Error;

/// The main error type for datasplit operations.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Invalid split ratios: {message}")]
    InvalidRatios { message: String },

    #[error("Dataset directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read dataset directory {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {source}")]
    ReportWrite {
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}
