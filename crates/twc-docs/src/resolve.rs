//! Default link target resolution for directories.

use crate::node::DocNode;

/// Find the first document reachable from already-sorted siblings.
///
/// Files at the current level win over anything nested. Otherwise directories
/// are searched in order, depth first. The input must be sorted: directory
/// routes are defined in terms of sorted order.
#[must_use]
pub fn first_document(nodes: &[DocNode]) -> Option<&DocNode> {
    nodes.iter().find(|node| node.is_file()).or_else(|| {
        nodes
            .iter()
            .filter(|node| node.is_directory())
            .find_map(|node| first_document(&node.children))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Frontmatter;

    fn file(path: &str) -> DocNode {
        DocNode::file(
            path.to_owned(),
            path.to_owned(),
            format!("/docs/{path}"),
            Frontmatter::default(),
        )
    }

    fn dir(path: &str, children: Vec<DocNode>) -> DocNode {
        DocNode::directory(path.to_owned(), path.to_owned(), None, children)
    }

    #[test]
    fn test_empty_returns_none() {
        assert!(first_document(&[]).is_none());
    }

    #[test]
    fn test_file_at_same_level_wins_over_earlier_directory() {
        let nodes = vec![dir("a", vec![file("a/deep")]), file("b")];
        assert_eq!(first_document(&nodes).map(|n| n.path.as_str()), Some("b"));
    }

    #[test]
    fn test_descends_into_first_directory_with_files() {
        let nodes = vec![
            dir("empty", Vec::new()),
            dir("nested", vec![dir("nested/inner", vec![file("nested/inner/doc")])]),
            dir("later", vec![file("later/doc")]),
        ];
        assert_eq!(
            first_document(&nodes).map(|n| n.path.as_str()),
            Some("nested/inner/doc")
        );
    }

    #[test]
    fn test_directories_without_files() {
        let nodes = vec![dir("a", vec![dir("a/b", Vec::new())])];
        assert!(first_document(&nodes).is_none());
    }
}
