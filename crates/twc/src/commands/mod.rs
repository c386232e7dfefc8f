//! CLI command implementations.

pub(crate) mod docs;
pub(crate) mod registry;
pub(crate) mod sync;

pub(crate) use docs::DocsCommand;
pub(crate) use registry::RegistryCommand;
pub(crate) use sync::SyncCommand;
