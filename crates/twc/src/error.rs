//! CLI error types.

use twc_config::ConfigError;
use twc_docs::{SyncError, TreeError};
use twc_registry::RegistryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Sync(#[from] SyncError),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("{0}")]
    Validation(String),
}
