//! Configuration management for twc-ui tooling.
//!
//! Parses `twc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `registry.base_url`
//! - `registry.homepage`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override docs tree output file.
    pub docs_output: Option<PathBuf>,
    /// Override registry base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "twc.toml";

/// Default registry placeholder token replaced by the base URL.
const DEFAULT_PLACEHOLDER: &str = "{{REGISTRY_URL}}";

/// Default registry manifest schema.
const DEFAULT_SCHEMA: &str = "https://ui.shadcn.com/schema/registry.json";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    docs: DocsConfigRaw,
    #[serde(default)]
    registry: RegistryConfigRaw,
    #[serde(default)]
    sync: SyncConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved registry configuration (set after loading).
    #[serde(skip)]
    pub registry_resolved: RegistryConfig,
    /// Resolved sync configuration (set after loading).
    #[serde(skip)]
    pub sync_resolved: SyncConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output: Option<String>,
    route_prefix: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for `.md`/`.mdx` documents.
    pub source_dir: PathBuf,
    /// Output path for the serialized docs tree.
    pub output: PathBuf,
    /// Prefix prepended to document paths to form routes.
    pub route_prefix: String,
}

/// Raw registry configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RegistryConfigRaw {
    name: Option<String>,
    homepage: Option<String>,
    schema: Option<String>,
    component_dir: Option<String>,
    hook_dir: Option<String>,
    output: Option<String>,
    mapping_output: Option<String>,
    base_url: Option<String>,
    placeholder: Option<String>,
    author: Option<String>,
    alias_prefix: Option<String>,
}

/// Resolved registry configuration.
#[derive(Debug, Default)]
pub struct RegistryConfig {
    /// Registry name written to the manifest.
    pub name: String,
    /// Homepage written to the manifest (falls back to `base_url`).
    pub homepage: String,
    /// Manifest `$schema` URL.
    pub schema: String,
    /// Directory with component descriptors.
    pub component_dir: PathBuf,
    /// Directory with hook descriptors.
    pub hook_dir: PathBuf,
    /// Output path for the merged manifest.
    pub output: PathBuf,
    /// Output path for the alias mapping module.
    pub mapping_output: PathBuf,
    /// Base URL substituted for the placeholder. `None` leaves it in place.
    pub base_url: Option<String>,
    /// Placeholder token searched for in descriptor strings.
    pub placeholder: String,
    /// Author stamped on every registry item.
    pub author: String,
    /// Prefix identifying registry dependency aliases.
    pub alias_prefix: String,
}

impl RegistryConfig {
    /// Descriptor directories in assembly order.
    #[must_use]
    pub fn descriptor_dirs(&self) -> Vec<PathBuf> {
        vec![self.component_dir.clone(), self.hook_dir.clone()]
    }
}

/// Raw sync configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SyncConfigRaw {
    changelog_source: Option<String>,
    changelog_target: Option<String>,
    readme_source: Option<String>,
    readme_target: Option<String>,
}

/// Resolved document sync configuration.
#[derive(Debug, Default)]
pub struct SyncConfig {
    /// Document copied into the changelog.
    pub changelog_source: PathBuf,
    /// Root-level changelog file.
    pub changelog_target: PathBuf,
    /// Document copied into the readme.
    pub readme_source: PathBuf,
    /// Root-level readme file.
    pub readme_target: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`registry.base_url`").
        field: String,
        /// Error message (e.g., "${`REGISTRY_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Treat empty strings (e.g. `${REGISTRY_URL:-}`) as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `twc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
            // Sync sources follow the docs directory unless set explicitly
            if self.sync.changelog_source.is_none() {
                self.sync_resolved.changelog_source = source_dir.join("changelog.mdx");
            }
            if self.sync.readme_source.is_none() {
                self.sync_resolved.readme_source = source_dir.join("introduction.mdx");
            }
        }
        if let Some(output) = &settings.docs_output {
            self.docs_resolved.output.clone_from(output);
        }
        if let Some(base_url) = &settings.base_url {
            self.registry_resolved.base_url = non_empty(Some(base_url.clone()));
            if self.registry.homepage.is_none() {
                self.registry_resolved.homepage = base_url.clone();
            }
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            docs: DocsConfigRaw::default(),
            registry: RegistryConfigRaw::default(),
            sync: SyncConfigRaw::default(),
            docs_resolved: DocsConfig::default(),
            registry_resolved: RegistryConfig::default(),
            sync_resolved: SyncConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.docs_resolved.route_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.route_prefix must start with /".to_owned(),
            ));
        }

        let registry = &self.registry_resolved;
        require_non_empty(&registry.name, "registry.name")?;
        require_non_empty(&registry.placeholder, "registry.placeholder")?;
        require_non_empty(&registry.author, "registry.author")?;
        if let Some(ref base_url) = registry.base_url {
            require_http_url(base_url, "registry.base_url")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.registry.base_url {
            self.registry.base_url = Some(expand::expand_env(url, "registry.base_url")?);
        }
        if let Some(ref homepage) = self.registry.homepage {
            self.registry.homepage = Some(expand::expand_env(homepage, "registry.homepage")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        let source_dir = resolve(self.docs.source_dir.as_deref(), "docs");
        let mut route_prefix = self
            .docs
            .route_prefix
            .clone()
            .unwrap_or_else(|| "/docs/".to_owned());
        if !route_prefix.ends_with('/') {
            route_prefix.push('/');
        }

        self.docs_resolved = DocsConfig {
            output: resolve(self.docs.output.as_deref(), "public/docs-structure.json"),
            route_prefix,
            source_dir: source_dir.clone(),
        };

        let raw = &self.registry;
        let base_url = non_empty(raw.base_url.clone());
        self.registry_resolved = RegistryConfig {
            name: raw.name.clone().unwrap_or_else(|| "twc-ui".to_owned()),
            homepage: non_empty(raw.homepage.clone())
                .or_else(|| base_url.clone())
                .unwrap_or_default(),
            schema: raw
                .schema
                .clone()
                .unwrap_or_else(|| DEFAULT_SCHEMA.to_owned()),
            component_dir: resolve(raw.component_dir.as_deref(), "registry/components"),
            hook_dir: resolve(raw.hook_dir.as_deref(), "registry/hooks"),
            output: resolve(raw.output.as_deref(), "public/registry.json"),
            mapping_output: resolve(
                raw.mapping_output.as_deref(),
                "resources/js/lib/registry-mapping.ts",
            ),
            base_url,
            placeholder: raw
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned()),
            author: raw.author.clone().unwrap_or_else(|| "twc-ui".to_owned()),
            alias_prefix: raw
                .alias_prefix
                .clone()
                .unwrap_or_else(|| "@twc-ui/".to_owned()),
        };

        let sync = &self.sync;
        let from_docs = |path: Option<&str>, default: &str| match path {
            Some(p) => config_dir.join(p),
            None => source_dir.join(default),
        };
        self.sync_resolved = SyncConfig {
            changelog_source: from_docs(sync.changelog_source.as_deref(), "changelog.mdx"),
            changelog_target: resolve(sync.changelog_target.as_deref(), "CHANGELOG.md"),
            readme_source: from_docs(sync.readme_source.as_deref(), "introduction.mdx"),
            readme_target: resolve(sync.readme_target.as_deref(), "README.md"),
        };
    }
}
