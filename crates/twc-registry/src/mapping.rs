//! Registry dependency alias to documentation page mapping.
//!
//! The docs site links every `@twc-ui/...` registry dependency to its page.
//! The mapping is generated from the assembled items and written either as
//! JSON or as a TypeScript module for the front-end bundle.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::item::RegistryItem;

/// Names starting with this prefix are documented as hooks.
pub const HOOK_PREFIX: &str = "use-";

/// One alias entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasMapping {
    /// Alias as written in `registryDependencies` (e.g. "@twc-ui/date-picker").
    pub alias: String,
    /// Display name (e.g. "Date Picker").
    pub name: String,
    /// Documentation path (e.g. "/docs/components/date-picker").
    pub doc_path: String,
}

/// Title-case hyphen-separated segments: `date-picker` -> `Date Picker`.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Collect alias mappings from every item's registry dependencies.
///
/// Only dependencies starting with `alias_prefix` are included. The result is
/// unique by alias and sorted by alias.
#[must_use]
pub fn build_alias_mapping(
    items: &[RegistryItem],
    alias_prefix: &str,
    docs_prefix: &str,
) -> Vec<AliasMapping> {
    let docs_prefix = docs_prefix.trim_end_matches('/');
    let mut mappings: BTreeMap<&str, AliasMapping> = BTreeMap::new();

    for alias in items.iter().flat_map(|item| &item.registry_dependencies) {
        let Some(stripped) = alias.strip_prefix(alias_prefix) else {
            continue;
        };
        if stripped.is_empty() || mappings.contains_key(alias.as_str()) {
            continue;
        }

        let section = if stripped.starts_with(HOOK_PREFIX) {
            "hooks"
        } else {
            "components"
        };
        mappings.insert(
            alias.as_str(),
            AliasMapping {
                alias: alias.clone(),
                name: display_name(stripped),
                doc_path: format!("{docs_prefix}/{section}/{stripped}"),
            },
        );
    }

    mappings.into_values().collect()
}

/// Write mappings to `path`.
///
/// A `.json` target gets a plain JSON array; anything else gets a TypeScript
/// module exporting `registryDependencyMap`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_mapping(mappings: &[AliasMapping], path: &Path) -> Result<(), RegistryError> {
    let json = serde_json::to_string_pretty(mappings)?;
    let content = if path.extension().is_some_and(|ext| ext == "json") {
        format!("{json}\n")
    } else {
        format!(
            "// Generated by `twc registry create`. Do not edit.\n\n\
             export interface RegistryDependency {{\n    alias: string\n    name: string\n    docPath: string\n}}\n\n\
             export const registryDependencyMap: RegistryDependency[] = {json}\n"
        )
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
