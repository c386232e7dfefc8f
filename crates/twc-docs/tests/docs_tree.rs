//! End-to-end tests: docs directory -> tree -> JSON artifact -> queries.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use twc_docs::{DocNode, DocTree, TreeBuilder};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn top_level(tree: &DocTree) -> Vec<&str> {
    tree.nodes().iter().map(|n| n.path.as_str()).collect()
}

fn file_paths(files: &[&DocNode]) -> Vec<String> {
    files.iter().map(|n| n.path.clone()).collect()
}

#[test]
fn test_scenario_order_then_priority_then_kind() {
    let temp_dir = tempfile::tempdir().unwrap();
    let docs = temp_dir.path().join("docs");
    write(&docs, "introduction.mdx", "---\norder: 1\n---\n# Introduction\n");
    write(&docs, "guides/setup.mdx", "# Setup\n");
    write(&docs, "api.mdx", "# API\n");

    let tree = TreeBuilder::new(&docs).build();

    // `api` has priority 20, `guides` the default 50
    assert_eq!(top_level(&tree), vec!["introduction", "api", "guides"]);

    let guides = tree.find_by_path("guides").unwrap();
    assert_eq!(guides.route.as_deref(), Some("/docs/guides/setup"));

    // Rebuilding from the same input is reproducible
    assert_eq!(TreeBuilder::new(&docs).build(), tree);
}

#[test]
fn test_order_precedes_unordered_regardless_of_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "a.mdx", "");
    write(temp_dir.path(), "introduction.mdx", "");
    write(temp_dir.path(), "z.mdx", "---\norder: 5\n---\n");

    let tree = TreeBuilder::new(temp_dir.path()).build();
    assert_eq!(top_level(&tree), vec!["z", "introduction", "a"]);
}

#[test]
fn test_queries_on_component_docs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "introduction.mdx", "---\ntitle: Welcome\n---\n");
    write(root, "installation.mdx", "");
    write(root, "components/button.mdx", "---\norder: 2\n---\n");
    write(root, "components/dialog.mdx", "---\norder: 1\n---\n");
    write(root, "components/forms/checkbox.mdx", "");
    write(root, "hooks/use-media-query.mdx", "");

    let tree = TreeBuilder::new(root).build();

    assert_eq!(
        file_paths(&tree.flatten_files()),
        vec![
            "introduction",
            "installation",
            "components/dialog",
            "components/button",
            "components/forms/checkbox",
            "hooks/use-media-query",
        ]
    );

    // Every flattened path is findable
    for file in tree.flatten_files() {
        assert_eq!(tree.find_by_path(&file.path).unwrap().path, file.path);
    }

    // Breadcrumbs start at a top-level node and end at the target
    for file in tree.flatten_files() {
        let crumbs = tree.breadcrumb(&file.path);
        assert_eq!(crumbs.last().unwrap().path, file.path);
        assert!(tree.nodes().iter().any(|n| n.path == crumbs[0].path));
    }

    let components = tree.find_by_path("components").unwrap();
    assert_eq!(components.route.as_deref(), Some("/docs/components/dialog"));
    assert_eq!(tree.find_by_path("introduction").unwrap().title, "Welcome");
}

#[test]
fn test_directory_routes_match_first_flattened_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "b/zz.mdx", "");
    write(root, "b/aa/deep.mdx", "");
    write(root, "c/x/y.mdx", "");
    fs::create_dir_all(root.join("d/empty")).unwrap();

    let tree = TreeBuilder::new(root).build();

    fn check(node: &DocNode) {
        if node.is_directory() {
            let subtree = DocTree::new(node.children.clone());
            let expected = subtree
                .flatten_files()
                .first()
                .and_then(|f| f.route.clone());
            assert_eq!(node.route, expected, "route of {}", node.path);
            node.children.iter().for_each(check);
        }
    }
    tree.nodes().iter().for_each(check);

    assert!(tree.find_by_path("d").unwrap().route.is_none());
}

#[test]
fn test_directory_route_prefers_shallow_file_over_earlier_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "guides/components/x.mdx", "");
    write(root, "guides/zebra.mdx", "");

    let tree = TreeBuilder::new(root).build();
    let guides = tree.find_by_path("guides").unwrap();

    // "components" has a lower priority number than "zebra", so it sorts first
    assert_eq!(
        file_paths(&tree.flatten_files()),
        vec!["guides/components/x", "guides/zebra"]
    );
    assert_eq!(guides.route.as_deref(), Some("/docs/guides/zebra"));
}

#[test]
fn test_non_finite_order_does_not_break_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("docs");
    write(&root, "z.mdx", "---\norder: .inf\n---\n");
    write(&root, "a.mdx", "");

    let tree = TreeBuilder::new(&root).build();
    let artifact = temp_dir.path().join("docs-structure.json");
    tree.write_json(&artifact).unwrap();
    let loaded = DocTree::read_json(&artifact).unwrap();

    assert!(tree.find_by_path("z").unwrap().frontmatter.order.is_none());
    assert_eq!(top_level(&tree), vec!["a", "z"]);
    assert_eq!(loaded, tree);
}

#[test]
fn test_artifact_round_trip_is_query_equivalent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("docs");
    write(&root, "introduction.mdx", "---\norder: 1\ntags: [intro]\nstatus: beta\n---\n");
    write(&root, "components/tabs.mdx", "");
    write(&root, "components/overlay/dialog.mdx", "");

    let tree = TreeBuilder::new(&root).build();
    let artifact = temp_dir.path().join("public/docs-structure.json");
    tree.write_json(&artifact).unwrap();
    let loaded = DocTree::read_json(&artifact).unwrap();

    assert_eq!(
        file_paths(&loaded.flatten_files()),
        file_paths(&tree.flatten_files())
    );
    for file in tree.flatten_files() {
        assert_eq!(loaded.find_by_path(&file.path), Some(file));
        assert_eq!(
            file_paths(&loaded.breadcrumb(&file.path)),
            file_paths(&tree.breadcrumb(&file.path))
        );
    }

    let intro = loaded.find_by_path("introduction").unwrap();
    assert_eq!(
        intro.frontmatter.extra.get("status"),
        Some(&serde_json::json!("beta"))
    );
}
