//! Registry manifest types.
//!
//! Field names follow the shadcn registry JSON schema (camelCase). Keys not
//! modelled here are kept in `extra` and written back unchanged.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// File installed by a registry item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Source path inside the repository.
    pub path: String,
    /// File type (e.g. "registry:ui", "registry:hook").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Install location in the consuming project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Inlined file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Installable component or hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Unique item name.
    pub name: String,
    /// Item type (e.g. "registry:ui").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// npm packages required at runtime.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// npm packages required at build time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dev_dependencies: Vec<String>,
    /// Other registry items this item installs (aliases or URLs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<RegistryFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Merged registry manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub homepage: String,
    pub items: Vec<RegistryItem>,
}

impl Manifest {
    /// Write the manifest as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write(&self, path: &Path) -> Result<(), RegistryError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_descriptor() {
        let json = r#"{
            "name": "button",
            "type": "registry:ui",
            "dependencies": ["react-aria-components"],
            "registryDependencies": ["@twc-ui/utils"],
            "files": [
                { "path": "resources/js/components/twc-ui/button.tsx", "type": "registry:ui", "target": "components/ui/button.tsx" }
            ],
            "cssVars": { "light": {} }
        }"#;
        let item: RegistryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "button");
        assert_eq!(item.item_type.as_deref(), Some("registry:ui"));
        assert_eq!(item.dependencies, vec!["react-aria-components"]);
        assert_eq!(item.registry_dependencies, vec!["@twc-ui/utils"]);
        assert_eq!(item.files.len(), 1);
        assert_eq!(
            item.files[0].target.as_deref(),
            Some("components/ui/button.tsx")
        );
        assert!(item.extra.contains_key("cssVars"));
    }

    #[test]
    fn test_missing_name_is_error() {
        assert!(serde_json::from_str::<RegistryItem>(r#"{"type": "registry:ui"}"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_camel_case_and_extra() {
        let json = r#"{"name":"tabs","registryDependencies":["@twc-ui/button"],"docs":"x"}"#;
        let item: RegistryItem = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "tabs",
                "registryDependencies": ["@twc-ui/button"],
                "docs": "x"
            })
        );
    }

    #[test]
    fn test_manifest_schema_key() {
        let manifest = Manifest {
            schema: "https://ui.shadcn.com/schema/registry.json".to_owned(),
            name: "twc-ui".to_owned(),
            homepage: "https://ui.example.com".to_owned(),
            items: Vec::new(),
        };
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value["$schema"],
            serde_json::json!("https://ui.shadcn.com/schema/registry.json")
        );
    }
}
