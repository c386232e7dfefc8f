//! Canonical ordering of sibling nodes.
//!
//! Siblings are compared by, in order:
//!
//! 1. Frontmatter `order` (ascending). Nodes with an order come first.
//! 2. Name priority from [`NAME_PRIORITIES`] (lower first, unknown names get
//!    [`DEFAULT_PRIORITY`]).
//! 3. Kind: files before directories.
//! 4. Title, case-insensitive.
//!
//! Exact title and path comparisons break any remaining ties so the order is
//! total and independent of directory enumeration order.

use std::cmp::Ordering;

use crate::node::{DocNode, NodeKind};

/// Priority of well-known document and directory names.
pub const NAME_PRIORITIES: &[(&str, u32)] = &[
    ("introduction", 1),
    ("getting-started", 2),
    ("installation", 3),
    ("usage", 4),
    ("theming", 5),
    ("cli", 6),
    ("components", 10),
    ("hooks", 15),
    ("api", 20),
    ("changelog", 90),
];

/// Priority of names missing from [`NAME_PRIORITIES`].
pub const DEFAULT_PRIORITY: u32 = 50;

/// Look up the priority of a path segment (case-insensitive).
#[must_use]
pub fn name_priority(name: &str) -> u32 {
    let lower = name.to_lowercase();
    NAME_PRIORITIES
        .iter()
        .find(|(known, _)| *known == lower)
        .map_or(DEFAULT_PRIORITY, |&(_, priority)| priority)
}

/// Compare two sibling nodes.
#[must_use]
pub fn compare_nodes(a: &DocNode, b: &DocNode) -> Ordering {
    compare_order(a.order(), b.order())
        .then_with(|| name_priority(a.name()).cmp(&name_priority(b.name())))
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.path.cmp(&b.path))
}

fn compare_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn kind_rank(kind: NodeKind) -> u8 {
    match kind {
        NodeKind::File => 0,
        NodeKind::Directory => 1,
    }
}

/// Return a sorted copy of `nodes`, with every subtree sorted as well.
#[must_use]
pub fn sort_nodes(nodes: &[DocNode]) -> Vec<DocNode> {
    sorted(nodes.to_vec())
}

/// Sort owned nodes recursively.
pub(crate) fn sorted(mut nodes: Vec<DocNode>) -> Vec<DocNode> {
    for node in &mut nodes {
        if !node.children.is_empty() {
            node.children = sorted(std::mem::take(&mut node.children));
        }
    }
    nodes.sort_by(compare_nodes);
    nodes
}
