//! Registry error types.

use std::path::PathBuf;

/// Fatal error assembling or writing the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Descriptor directory is missing.
    #[error("Registry source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid descriptor search pattern.
    #[error("Invalid descriptor pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Error loading a single descriptor. Recovered by skipping the file.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// File is empty or whitespace only.
    #[error("descriptor is empty")]
    Empty,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse error or missing required fields.
    #[error("invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),
}
