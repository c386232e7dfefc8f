//! `twc registry` command implementations.

use std::path::Path;

use clap::{Args, Subcommand};
use twc_config::{CliSettings, Config};
use twc_registry::{Assembler, AssemblerSettings, build_alias_mapping, write_mapping};

use crate::commands::sync::{sync_changelog, sync_readme};
use crate::error::CliError;
use crate::output::Output;

/// Registry commands.
#[derive(Subcommand)]
pub(crate) enum RegistryCommand {
    /// Build the registry manifest and alias mapping, then sync README and CHANGELOG.
    Create(CreateArgs),
}

impl RegistryCommand {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        match self {
            Self::Create(args) => args.execute(config_path),
        }
    }
}

/// Arguments for the registry create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Base URL substituted for the registry placeholder (overrides config).
    #[arg(long, env = "REGISTRY_URL")]
    base_url: Option<String>,

    /// Skip README/CHANGELOG sync.
    #[arg(long)]
    no_sync: bool,
}

impl CreateArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            base_url: self.base_url,
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let registry = &config.registry_resolved;

        if registry.base_url.is_none() {
            output.warning(&format!(
                "REGISTRY_URL not set, leaving {} unsubstituted",
                registry.placeholder
            ));
        }

        let assembler = Assembler::new(AssemblerSettings {
            placeholder: registry.placeholder.clone(),
            base_url: registry.base_url.clone(),
            author: registry.author.clone(),
        });
        let assembly = assembler.assemble(&registry.descriptor_dirs())?;
        for skipped in &assembly.skipped {
            output.warning(&format!("Skipped {}", skipped.display()));
        }

        let mapping = build_alias_mapping(
            &assembly.items,
            &registry.alias_prefix,
            &config.docs_resolved.route_prefix,
        );
        let manifest = assembly.into_manifest(&registry.schema, &registry.name, &registry.homepage);

        manifest.write(&registry.output)?;
        output.success(&format!(
            "Wrote {} items to {}",
            manifest.items.len(),
            registry.output.display()
        ));

        write_mapping(&mapping, &registry.mapping_output)?;
        output.success(&format!(
            "Wrote {} aliases to {}",
            mapping.len(),
            registry.mapping_output.display()
        ));

        if !self.no_sync {
            sync_changelog(&config.sync_resolved, &output)?;
            sync_readme(&config.sync_resolved, &output)?;
        }

        Ok(())
    }
}
