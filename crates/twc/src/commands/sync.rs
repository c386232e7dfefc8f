//! `twc sync` command implementations.

use std::path::Path;

use clap::Subcommand;
use twc_config::{Config, SyncConfig};
use twc_docs::sync_document;

use crate::error::CliError;
use crate::output::Output;

/// Document sync commands.
#[derive(Subcommand)]
pub(crate) enum SyncCommand {
    /// Copy the changelog page into CHANGELOG.md.
    Changelog,
    /// Copy the introduction page into README.md.
    Readme,
}

impl SyncCommand {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let output = Output::new();
        match self {
            Self::Changelog => sync_changelog(&config.sync_resolved, &output),
            Self::Readme => sync_readme(&config.sync_resolved, &output),
        }
    }
}

pub(crate) fn sync_changelog(sync: &SyncConfig, output: &Output) -> Result<(), CliError> {
    sync_one(&sync.changelog_source, &sync.changelog_target, output)
}

pub(crate) fn sync_readme(sync: &SyncConfig, output: &Output) -> Result<(), CliError> {
    sync_one(&sync.readme_source, &sync.readme_target, output)
}

fn sync_one(source: &Path, target: &Path, output: &Output) -> Result<(), CliError> {
    sync_document(source, target)?;
    output.success(&format!(
        "Synced {} -> {}",
        source.display(),
        target.display()
    ));
    Ok(())
}
