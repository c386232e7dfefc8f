//! Documentation tree building, sorting and navigation for twc-ui.
//!
//! This crate provides:
//! - [`TreeBuilder`]: walks a docs directory and builds a sorted [`DocTree`]
//! - [`sort_nodes`]: canonical sibling ordering (frontmatter `order`, well-known
//!   names, files before directories, title)
//! - [`DocTree`]: read-only navigation queries (find, flatten, breadcrumb)
//! - [`TreeHandle`]: atomically swappable tree snapshot for rebuild loops
//! - [`sync_document`]: copies a document body into a root-level text file
//!
//! # Quick Start
//!
//! ```no_run
//! use twc_docs::TreeBuilder;
//!
//! let tree = TreeBuilder::new("docs").build();
//! for file in tree.flatten_files() {
//!     println!("{} -> {:?}", file.title, file.route);
//! }
//! let crumbs = tree.breadcrumb("guides/setup");
//! ```

mod builder;
mod frontmatter;
mod handle;
mod node;
mod resolve;
mod sort;
mod sync;
mod title;
mod tree;

pub use builder::{DOCUMENT_EXTENSIONS, TreeBuilder};
pub use frontmatter::{Frontmatter, MetadataError, parse_document, split_frontmatter};
pub use handle::TreeHandle;
pub use node::{DocNode, NodeKind};
pub use resolve::first_document;
pub use sort::{DEFAULT_PRIORITY, NAME_PRIORITIES, compare_nodes, name_priority, sort_nodes};
pub use sync::{SyncError, document_body, sync_document};
pub use title::{format_title, strip_document_extension};
pub use tree::{DocTree, Neighbors, TreeError};
