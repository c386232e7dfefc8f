//! Component registry assembly for twc-ui.
//!
//! Merges per-component JSON descriptors into a single installable manifest
//! (shadcn registry format) and derives a lookup table from registry
//! dependency aliases to documentation pages.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use twc_registry::{Assembler, AssemblerSettings, build_alias_mapping};
//!
//! let assembler = Assembler::new(AssemblerSettings {
//!     placeholder: "{{REGISTRY_URL}}".to_owned(),
//!     base_url: Some("https://ui.example.com".to_owned()),
//!     author: "twc-ui".to_owned(),
//! });
//! let assembly = assembler.assemble(&[PathBuf::from("registry/components")])?;
//! let mapping = build_alias_mapping(&assembly.items, "@twc-ui/", "/docs/");
//! # Ok(())
//! # }
//! ```

mod assembler;
mod error;
mod item;
mod mapping;
mod placeholder;

pub use assembler::{Assembler, AssemblerSettings, Assembly};
pub use error::{DescriptorError, RegistryError};
pub use item::{Manifest, RegistryFile, RegistryItem};
pub use mapping::{AliasMapping, HOOK_PREFIX, build_alias_mapping, display_name, write_mapping};
pub use placeholder::substitute_placeholder;
