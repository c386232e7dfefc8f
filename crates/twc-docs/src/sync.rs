//! Copy a document body into a root-level text file.
//!
//! Used to keep `README.md` and `CHANGELOG.md` in sync with their docs pages:
//! the frontmatter block is dropped and the body is written verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::split_frontmatter;

/// Error syncing a document.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Source document is missing.
    #[error("Source document not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body of a document without its frontmatter and surrounding blank lines.
#[must_use]
pub fn document_body(content: &str) -> &str {
    let (_, body) = split_frontmatter(content);
    body.trim_start_matches(['\n', '\r']).trim_end()
}

/// Write the body of `source` to `target`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`SyncError::SourceNotFound`] if `source` does not exist, or an
/// I/O error if reading or writing fails.
pub fn sync_document(source: &Path, target: &Path) -> Result<usize, SyncError> {
    if !source.is_file() {
        return Err(SyncError::SourceNotFound(source.to_path_buf()));
    }

    let content = fs::read_to_string(source)?;
    let mut body = document_body(&content).to_owned();
    body.push('\n');

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, &body)?;

    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        bytes = body.len(),
        "Synced document"
    );
    Ok(body.len())
}
