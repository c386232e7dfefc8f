//! Documentation tree construction by filesystem walking.
//!
//! Each directory level is processed in two passes:
//! 1. Document files (`.md`, `.mdx`) become file nodes
//! 2. Subdirectories are built recursively, their children sorted, and the
//!    first document of the sorted subtree becomes the directory route
//!
//! Hidden entries (leading `.`) are skipped. A missing root yields an empty
//! tree rather than an error.
//!
//! Paths drop the document extension, so sources can collide. `x.md` and
//! `x.mdx` keep the `.mdx` file; a file `x.mdx` next to a directory `x/`
//! is dropped in favor of the directory. Every collision is logged.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::{Frontmatter, parse_document};
use crate::node::DocNode;
use crate::resolve::first_document;
use crate::sort::sorted;
use crate::title::{format_title, strip_document_extension};
use crate::tree::DocTree;

/// File extensions recognized as document sources.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Default prefix for document routes.
const DEFAULT_ROUTE_PREFIX: &str = "/docs/";

/// Builds a [`DocTree`] from a docs directory.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    root: PathBuf,
    route_prefix: String,
}

impl TreeBuilder {
    /// Create a builder for the given docs root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_owned(),
        }
    }

    /// Set the prefix prepended to document paths to form routes.
    ///
    /// A trailing slash is added if missing.
    #[must_use]
    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        self.route_prefix = if prefix.ends_with('/') {
            prefix.to_owned()
        } else {
            format!("{prefix}/")
        };
        self
    }

    /// Docs root this builder reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the sorted tree.
    ///
    /// Returns an empty tree if the root does not exist.
    #[must_use]
    pub fn build(&self) -> DocTree {
        if !self.root.is_dir() {
            tracing::debug!(root = %self.root.display(), "Docs root not found");
            return DocTree::default();
        }

        let nodes = self.build_level(&self.root, "");
        let tree = DocTree::new(nodes);
        tracing::info!(
            root = %self.root.display(),
            documents = tree.flatten_files().len(),
            "Built docs tree"
        );
        tree
    }

    fn build_level(&self, dir: &Path, prefix: &str) -> Vec<DocNode> {
        let (files, dirs) = match read_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Failed to read directory");
                return Vec::new();
            }
        };

        let files = resolve_collisions(files, &dirs);
        let mut nodes: Vec<DocNode> = files
            .iter()
            .filter_map(|(path, name)| self.build_file(path, name, prefix))
            .collect();

        for (path, name) in &dirs {
            let dir_path = join_path(prefix, name);
            let children = sorted(self.build_level(path, &dir_path));
            let route = first_document(&children).and_then(|doc| doc.route.clone());
            nodes.push(DocNode::directory(
                format_title(name),
                dir_path,
                route,
                children,
            ));
        }

        nodes
    }

    fn build_file(&self, path: &Path, name: &str, prefix: &str) -> Option<DocNode> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Failed to read document");
                return None;
            }
        };

        let frontmatter = match parse_document(&content) {
            Ok((frontmatter, _)) => frontmatter,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Invalid frontmatter, ignoring");
                Frontmatter::default()
            }
        };

        let doc_path = join_path(prefix, strip_document_extension(name));
        let title = frontmatter
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format_title(name));
        let route = format!("{}{doc_path}", self.route_prefix);

        Some(DocNode::file(title, doc_path, route, frontmatter))
    }
}

/// Document files and subdirectories of a directory, sorted by name.
type Entries = (Vec<(PathBuf, String)>, Vec<(PathBuf, String)>);

fn read_entries(dir: &Path) -> std::io::Result<Entries> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)?.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            dirs.push((entry.path(), name));
        } else if file_type.is_file() && is_document(&name) {
            files.push((entry.path(), name));
        }
    }

    files.sort_by(|a, b| a.1.cmp(&b.1));
    dirs.sort_by(|a, b| a.1.cmp(&b.1));
    Ok((files, dirs))
}

/// Keep one source per path at this level.
fn resolve_collisions(
    files: Vec<(PathBuf, String)>,
    dirs: &[(PathBuf, String)],
) -> Vec<(PathBuf, String)> {
    let mut by_stem: BTreeMap<String, (PathBuf, String)> = BTreeMap::new();
    for (path, name) in files {
        match by_stem.entry(strip_document_extension(&name).to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert((path, name));
            }
            Entry::Occupied(mut slot) => {
                let dropped = if extension_rank(&name) > extension_rank(&slot.get().1) {
                    slot.insert((path, name))
                } else {
                    (path, name)
                };
                tracing::warn!(
                    kept = %slot.get().0.display(),
                    dropped = %dropped.0.display(),
                    "Documents share a path"
                );
            }
        }
    }

    for (dir, name) in dirs {
        if let Some((file, _)) = by_stem.remove(name.as_str()) {
            tracing::warn!(
                kept = %dir.display(),
                dropped = %file.display(),
                "Document shares a path with a directory"
            );
        }
    }

    by_stem.into_values().collect()
}

/// Position of the extension in [`DOCUMENT_EXTENSIONS`]; later wins.
fn extension_rank(name: &str) -> Option<usize> {
    let (_, ext) = name.rsplit_once('.')?;
    DOCUMENT_EXTENSIONS
        .iter()
        .position(|known| ext.eq_ignore_ascii_case(known))
}

fn is_document(name: &str) -> bool {
    strip_document_extension(name) != name
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn paths(nodes: &[DocNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.path.as_str()).collect()
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tree = TreeBuilder::new("/nonexistent/docs").build();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = create_test_dir();
        let tree = TreeBuilder::new(temp_dir.path()).build();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_file_nodes() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "date-picker.mdx", "# Date picker");
        write(
            temp_dir.path(),
            "button.md",
            "---\ntitle: Fancy Button\n---\n# Button",
        );

        let tree = TreeBuilder::new(temp_dir.path()).build();
        let nodes = tree.nodes();

        // Sorted by title: "Date Picker" before "Fancy Button"
        assert_eq!(paths(nodes), vec!["date-picker", "button"]);
        assert_eq!(nodes[0].title, "Date Picker");
        assert!(nodes[0].frontmatter.is_empty());
        assert_eq!(nodes[1].title, "Fancy Button");
        assert_eq!(nodes[1].route.as_deref(), Some("/docs/button"));
    }

    #[test]
    fn test_ignores_non_documents_and_hidden() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guide.mdx", "x");
        write(temp_dir.path(), "image.png", "x");
        write(temp_dir.path(), ".draft.mdx", "x");
        write(temp_dir.path(), ".hidden/secret.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path()).build();
        assert_eq!(paths(tree.nodes()), vec!["guide"]);
    }

    #[test]
    fn test_directory_route_is_first_sorted_document() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guides/zeta.mdx", "x");
        write(temp_dir.path(), "guides/alpha.mdx", "---\norder: 2\n---\n");
        write(temp_dir.path(), "guides/beta.mdx", "---\norder: 1\n---\n");

        let tree = TreeBuilder::new(temp_dir.path()).build();
        let guides = &tree.nodes()[0];

        assert!(guides.is_directory());
        assert_eq!(guides.title, "Guides");
        assert_eq!(
            paths(&guides.children),
            vec!["guides/beta", "guides/alpha", "guides/zeta"]
        );
        assert_eq!(guides.route.as_deref(), Some("/docs/guides/beta"));
    }

    #[test]
    fn test_directory_route_from_nested_directory() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "components/form/checkbox.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path()).build();
        let components = &tree.nodes()[0];
        assert_eq!(
            components.route.as_deref(),
            Some("/docs/components/form/checkbox")
        );
    }

    #[test]
    fn test_empty_directory_has_no_route_or_children() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("drafts")).unwrap();

        let tree = TreeBuilder::new(temp_dir.path()).build();
        let drafts = &tree.nodes()[0];
        assert!(drafts.is_directory());
        assert!(drafts.route.is_none());
        assert!(drafts.children.is_empty());
    }

    #[test]
    fn test_invalid_frontmatter_treated_as_empty() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "broken.mdx", "---\ntitle: [oops\n---\nBody");
        write(temp_dir.path(), "fine.mdx", "Body");

        let tree = TreeBuilder::new(temp_dir.path()).build();
        let broken = tree.find_by_path("broken").unwrap();
        assert_eq!(broken.title, "Broken");
        assert!(broken.frontmatter.is_empty());
        assert_eq!(tree.flatten_files().len(), 2);
    }

    #[test]
    fn test_mdx_wins_over_md_with_same_stem() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "intro.md", "---\ntitle: Plain\n---\n");
        write(temp_dir.path(), "intro.mdx", "---\ntitle: Rich\n---\n");
        write(temp_dir.path(), "guides/setup.md", "x");
        write(temp_dir.path(), "guides/setup.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path()).build();

        assert_eq!(paths(tree.nodes()), vec!["intro", "guides"]);
        assert_eq!(tree.nodes()[0].title, "Rich");
        assert_eq!(paths(&tree.nodes()[1].children), vec!["guides/setup"]);
    }

    #[test]
    fn test_directory_wins_over_file_with_same_path() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guides.mdx", "x");
        write(temp_dir.path(), "guides/setup.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path()).build();

        assert_eq!(paths(tree.nodes()), vec!["guides"]);
        let guides = tree.find_by_path("guides").unwrap();
        assert!(guides.is_directory());
        assert_eq!(guides.route.as_deref(), Some("/docs/guides/setup"));
    }

    #[test]
    fn test_paths_are_unique() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "guides.mdx", "x");
        write(temp_dir.path(), "guides/setup.mdx", "x");
        write(temp_dir.path(), "intro.md", "x");
        write(temp_dir.path(), "intro.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path()).build();

        let mut all = Vec::new();
        let mut stack: Vec<&DocNode> = tree.nodes().iter().collect();
        while let Some(node) = stack.pop() {
            all.push(node.path.as_str());
            stack.extend(&node.children);
        }
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_custom_route_prefix() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "intro.mdx", "x");

        let tree = TreeBuilder::new(temp_dir.path())
            .with_route_prefix("/guide")
            .build();
        assert_eq!(tree.nodes()[0].route.as_deref(), Some("/guide/intro"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "api.mdx", "x");
        write(temp_dir.path(), "guides/setup.mdx", "x");
        write(temp_dir.path(), "components/button.mdx", "x");
        write(temp_dir.path(), "installation.mdx", "x");

        let builder = TreeBuilder::new(temp_dir.path());
        assert_eq!(builder.build(), builder.build());
    }
}
