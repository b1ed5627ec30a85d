//! Error type shared by the pipeline, the configuration layer and the
//! image collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while configuring or running edge detection.
#[derive(Debug, Error)]
pub enum CannyError {
    /// Parameters rejected at construction time. Never silently corrected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input array is not a non-empty 2D image.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("failed to save {}: {message}", path.display())]
    Save { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CannyError>;
