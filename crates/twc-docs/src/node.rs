//! Documentation tree nodes.

use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// Whether a node is a document or a directory of documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Entry in the documentation navigation tree.
///
/// Serialized as `{title, type, path, route?, children?, frontmatter?}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    /// Display title (frontmatter title or formatted name).
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Slash-separated path relative to the docs root, without extension
    /// (e.g. "introduction", "guides/setup").
    pub path: String,
    /// Navigable URL. Always set on files; on directories it points at the
    /// first document of the sorted subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Sorted child nodes. Only directories have children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocNode>,
    #[serde(default, skip_serializing_if = "Frontmatter::is_empty")]
    pub frontmatter: Frontmatter,
}

impl DocNode {
    /// Create a file node.
    #[must_use]
    pub fn file(title: String, path: String, route: String, frontmatter: Frontmatter) -> Self {
        Self {
            title,
            kind: NodeKind::File,
            path,
            route: Some(route),
            children: Vec::new(),
            frontmatter,
        }
    }

    /// Create a directory node.
    #[must_use]
    pub fn directory(
        title: String,
        path: String,
        route: Option<String>,
        children: Vec<DocNode>,
    ) -> Self {
        Self {
            title,
            kind: NodeKind::Directory,
            path,
            route,
            children,
            frontmatter: Frontmatter::default(),
        }
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Final path segment (e.g. "setup" for "guides/setup").
    #[must_use]
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Explicit sort position from frontmatter.
    #[must_use]
    pub fn order(&self) -> Option<f64> {
        self.frontmatter.order
    }

    /// Whether this node is the current page or one of its ancestors.
    ///
    /// `current_path` is a tree path (not a route), e.g. "guides/setup".
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path
            || current_path
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}
