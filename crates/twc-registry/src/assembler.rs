//! Merging of per-item descriptors into a registry.
//!
//! Each descriptor directory is scanned for `*.json` files in name order.
//! Every descriptor is parsed, the base-URL placeholder substituted in all of
//! its strings, and the configured author stamped on it. Broken descriptors are
//! logged and skipped; a missing directory aborts the whole assembly.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{DescriptorError, RegistryError};
use crate::item::{Manifest, RegistryItem};
use crate::placeholder::substitute_placeholder;

/// Settings for [`Assembler`].
#[derive(Clone, Debug)]
pub struct AssemblerSettings {
    /// Token replaced by `base_url` in descriptor strings.
    pub placeholder: String,
    /// Base URL. When `None`, placeholders are left in place.
    pub base_url: Option<String>,
    /// Author stamped on every item.
    pub author: String,
}

/// Result of assembling descriptors.
#[derive(Debug, Default)]
pub struct Assembly {
    /// Items in descriptor order, unique by name.
    pub items: Vec<RegistryItem>,
    /// Descriptors that could not be loaded.
    pub skipped: Vec<PathBuf>,
}

impl Assembly {
    /// Build the manifest from the assembled items.
    #[must_use]
    pub fn into_manifest(self, schema: &str, name: &str, homepage: &str) -> Manifest {
        Manifest {
            schema: schema.to_owned(),
            name: name.to_owned(),
            homepage: homepage.to_owned(),
            items: self.items,
        }
    }
}

/// Loads and merges registry descriptors.
pub struct Assembler {
    settings: AssemblerSettings,
}

impl Assembler {
    #[must_use]
    pub fn new(settings: AssemblerSettings) -> Self {
        Self { settings }
    }

    /// Assemble descriptors from `dirs`, in order.
    ///
    /// Items with a name already seen replace the earlier item in place.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SourceNotFound`] if a directory does not exist.
    pub fn assemble(&self, dirs: &[PathBuf]) -> Result<Assembly, RegistryError> {
        if self.settings.base_url.is_none() {
            tracing::warn!(
                placeholder = %self.settings.placeholder,
                "No registry base URL set, placeholders left unsubstituted"
            );
        }

        let mut assembly = Assembly::default();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for dir in dirs {
            for path in descriptor_files(dir)? {
                let item = match self.load_descriptor(&path) {
                    Ok(item) => item,
                    Err(e) => {
                        tracing::warn!(file = %path.display(), error = %e, "Skipping descriptor");
                        assembly.skipped.push(path);
                        continue;
                    }
                };

                if let Some(&idx) = positions.get(&item.name) {
                    tracing::warn!(
                        name = %item.name,
                        file = %path.display(),
                        "Duplicate registry item, replacing earlier descriptor"
                    );
                    assembly.items[idx] = item;
                } else {
                    positions.insert(item.name.clone(), assembly.items.len());
                    assembly.items.push(item);
                }
            }
        }

        tracing::info!(
            items = assembly.items.len(),
            skipped = assembly.skipped.len(),
            "Assembled registry"
        );
        Ok(assembly)
    }

    /// Load one descriptor, applying placeholder substitution and author.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is empty, unreadable, or not a valid item.
    pub fn load_descriptor(&self, path: &Path) -> Result<RegistryItem, DescriptorError> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(DescriptorError::Empty);
        }

        let mut value: serde_json::Value = serde_json::from_str(&content)?;
        if let Some(base_url) = &self.settings.base_url {
            let base_url = base_url.trim_end_matches('/');
            substitute_placeholder(&mut value, &self.settings.placeholder, base_url);
        }

        let mut item: RegistryItem = serde_json::from_value(value)?;
        item.author = Some(self.settings.author.clone());
        Ok(item)
    }
}

/// `*.json` files directly inside `dir`, sorted by name.
fn descriptor_files(dir: &Path) -> Result<Vec<PathBuf>, RegistryError> {
    if !dir.is_dir() {
        return Err(RegistryError::SourceNotFound(dir.to_path_buf()));
    }

    let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}
