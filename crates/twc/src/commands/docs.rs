//! `twc docs` command implementations.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::{Args, Subcommand};
use notify::event::ModifyKind;
use notify::{EventKind, RecursiveMode, Watcher};
use twc_config::{CliSettings, Config, DocsConfig};
use twc_docs::{DOCUMENT_EXTENSIONS, DocTree, TreeBuilder, TreeHandle};

use crate::error::CliError;
use crate::output::Output;

/// Quiet period before a burst of file events triggers a rebuild.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Documentation tree commands.
#[derive(Subcommand)]
pub(crate) enum DocsCommand {
    /// Build the docs tree JSON.
    Build(BuildArgs),
    /// Rebuild the docs tree JSON whenever documents change.
    Watch(BuildArgs),
    /// Show breadcrumb and neighbors of a document.
    Show(ShowArgs),
}

impl DocsCommand {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        match self {
            Self::Build(args) => {
                let config = args.load_config(config_path)?;
                build(&config.docs_resolved, &Output::new()).map(|_| ())
            }
            Self::Watch(args) => {
                let config = args.load_config(config_path)?;
                watch(&config.docs_resolved)
            }
            Self::Show(args) => args.execute(config_path),
        }
    }
}

/// Arguments shared by build and watch.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Docs source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output JSON file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BuildArgs {
    fn load_config(self, config_path: Option<&Path>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            docs_output: self.output,
            ..CliSettings::default()
        };
        Ok(Config::load(config_path, Some(&cli_settings))?)
    }
}

fn builder(docs: &DocsConfig) -> TreeBuilder {
    TreeBuilder::new(&docs.source_dir).with_route_prefix(&docs.route_prefix)
}

/// Build the tree and write the artifact.
fn build(docs: &DocsConfig, output: &Output) -> Result<DocTree, CliError> {
    if !docs.source_dir.is_dir() {
        output.warning(&format!(
            "Docs directory {} not found, writing empty tree",
            docs.source_dir.display()
        ));
    }

    let tree = builder(docs).build();
    tree.write_json(&docs.output)?;
    output.success(&format!(
        "Wrote {} documents to {}",
        tree.flatten_files().len(),
        docs.output.display()
    ));
    Ok(tree)
}

/// Build once, then rebuild on every relevant change until the watcher stops.
fn watch(docs: &DocsConfig) -> Result<(), CliError> {
    let output = Output::new();
    if !docs.source_dir.is_dir() {
        return Err(CliError::Validation(format!(
            "Docs directory not found: {}",
            docs.source_dir.display()
        )));
    }

    let handle = TreeHandle::new(build(docs, &output)?);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = tx.send(res);
    })?;
    watcher.watch(&docs.source_dir, RecursiveMode::Recursive)?;
    output.highlight(&format!("Watching {}", docs.source_dir.display()));

    while let Ok(first) = rx.recv() {
        let mut relevant = is_relevant(&first);
        // Drain the rest of the burst
        while let Ok(next) = rx.recv_timeout(DEBOUNCE) {
            relevant |= is_relevant(&next);
        }
        if !relevant {
            continue;
        }

        match build(docs, &output) {
            Ok(tree) => {
                let previous = handle.replace(tree);
                tracing::debug!(
                    previous = previous.flatten_files().len(),
                    current = handle.current().flatten_files().len(),
                    "Swapped docs tree"
                );
            }
            Err(e) => output.error(&format!("Rebuild failed: {e}")),
        }
    }

    Ok(())
}

fn is_relevant(res: &notify::Result<notify::Event>) -> bool {
    match res {
        Ok(event) => affects_docs(event),
        Err(e) => {
            tracing::warn!(error = %e, "Watch error");
            false
        }
    }
}

/// Whether an event can change the docs tree.
///
/// Document edits always count. Creates, removes and renames count for any
/// path since they may be directories.
fn affects_docs(event: &notify::Event) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_)) => {
            true
        }
        EventKind::Modify(_) => event.paths.iter().any(|path| {
            path.extension().is_some_and(|ext| {
                DOCUMENT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
        }),
        _ => false,
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Document path relative to the docs root (e.g. "guides/setup").
    path: String,

    /// Read this tree artifact instead of building from source.
    #[arg(long)]
    artifact: Option<PathBuf>,
}

impl ShowArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let tree = match &self.artifact {
            Some(path) => DocTree::read_json(path)?,
            None => {
                let config = Config::load(config_path, None)?;
                builder(&config.docs_resolved).build()
            }
        };

        for line in describe(&tree, &self.path)? {
            match line {
                Line::Title(text) => output.highlight(&text),
                Line::Field(text) => output.info(&text),
                Line::Missing(text) => output.detail(&text),
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Title(String),
    Field(String),
    Missing(String),
}

/// Navigation summary of the node at `path`.
fn describe(tree: &DocTree, path: &str) -> Result<Vec<Line>, CliError> {
    let node = tree
        .find_by_path(path)
        .ok_or_else(|| CliError::Validation(format!("Document not found: {path}")))?;

    let crumbs: Vec<&str> = tree
        .breadcrumb(path)
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    let mut lines = vec![
        Line::Title(node.title.clone()),
        Line::Field(format!("Breadcrumb: {}", crumbs.join(" / "))),
    ];

    match &node.route {
        Some(route) => lines.push(Line::Field(format!("Route: {route}"))),
        None => lines.push(Line::Missing("Route: none".to_owned())),
    }

    let neighbors = tree.neighbors(path);
    for (label, neighbor) in [("Previous", neighbors.previous), ("Next", neighbors.next)] {
        match neighbor {
            Some(doc) => lines.push(Line::Field(format!("{label}: {} ({})", doc.title, doc.path))),
            None => lines.push(Line::Missing(format!("{label}: none"))),
        }
    }

    Ok(lines)
}
