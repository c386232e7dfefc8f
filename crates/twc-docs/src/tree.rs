//! Read-only navigation queries over a built documentation tree.
//!
//! A [`DocTree`] is immutable once constructed. Every query is a depth-first
//! walk over the sorted nodes, so results follow navigation order.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::node::DocNode;
use crate::sort::sorted;

/// Error reading or writing the serialized tree artifact.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization error.
    #[error("Invalid docs tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Previous and next documents around a page, in navigation order.
#[derive(Debug, Default, PartialEq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a DocNode>,
    pub next: Option<&'a DocNode>,
}

/// Sorted documentation tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocTree {
    nodes: Vec<DocNode>,
}

impl DocTree {
    /// Create a tree from top-level nodes, sorting every level.
    #[must_use]
    pub fn new(nodes: Vec<DocNode>) -> Self {
        Self {
            nodes: sorted(nodes),
        }
    }

    /// Top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the first node (depth first) whose path equals `path`.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&DocNode> {
        fn find<'a>(nodes: &'a [DocNode], path: &str) -> Option<&'a DocNode> {
            nodes.iter().find_map(|node| {
                if node.path == path {
                    Some(node)
                } else {
                    find(&node.children, path)
                }
            })
        }

        find(&self.nodes, path)
    }

    /// Find the document served at `route`.
    ///
    /// Directories share their route with their first document, so only file
    /// nodes are considered.
    #[must_use]
    pub fn find_by_route(&self, route: &str) -> Option<&DocNode> {
        self.flatten_files()
            .into_iter()
            .find(|node| node.route.as_deref() == Some(route))
    }

    /// All file nodes in navigation order.
    #[must_use]
    pub fn flatten_files(&self) -> Vec<&DocNode> {
        fn collect<'a>(nodes: &'a [DocNode], out: &mut Vec<&'a DocNode>) {
            for node in nodes {
                if node.is_file() {
                    out.push(node);
                }
                collect(&node.children, out);
            }
        }

        let mut files = Vec::new();
        collect(&self.nodes, &mut files);
        files
    }

    /// Chain of nodes from a top-level node down to the node at `path`.
    ///
    /// Returns an empty vector if no node has that path.
    #[must_use]
    pub fn breadcrumb(&self, path: &str) -> Vec<&DocNode> {
        fn walk<'a>(nodes: &'a [DocNode], path: &str, trail: &mut Vec<&'a DocNode>) -> bool {
            for node in nodes {
                trail.push(node);
                if node.path == path || walk(&node.children, path, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let mut trail = Vec::new();
        walk(&self.nodes, path, &mut trail);
        trail
    }

    /// Nodes that should be highlighted while `current_path` is displayed.
    ///
    /// Same as [`breadcrumb`](Self::breadcrumb); named for the view layer,
    /// which passes the current page explicitly.
    #[must_use]
    pub fn active_trail(&self, current_path: &str) -> Vec<&DocNode> {
        self.breadcrumb(current_path)
    }

    /// Previous and next documents around the document at `path`.
    #[must_use]
    pub fn neighbors(&self, path: &str) -> Neighbors<'_> {
        let files = self.flatten_files();
        let Some(idx) = files.iter().position(|node| node.path == path) else {
            return Neighbors::default();
        };

        Neighbors {
            previous: idx.checked_sub(1).map(|i| files[i]),
            next: files.get(idx + 1).copied(),
        }
    }

    /// Parse a tree from its JSON artifact.
    ///
    /// Nodes are re-sorted, so hand-edited artifacts still load in canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an array of nodes.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let nodes: Vec<DocNode> = serde_json::from_str(json)?;
        Ok(Self::new(nodes))
    }

    /// Serialize the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a tree artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read_json(path: &Path) -> Result<Self, TreeError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the tree artifact to disk, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<(), TreeError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}
