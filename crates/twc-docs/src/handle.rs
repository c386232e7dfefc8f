//! Atomically swappable tree snapshot.
//!
//! Rebuilds produce a wholly new [`DocTree`] which replaces the current one.
//! Readers clone the `Arc` and keep using their snapshot; nodes of a tree that
//! is being read are never mutated.

use std::sync::{Arc, PoisonError, RwLock};

use crate::tree::DocTree;

/// Shared handle to the current documentation tree.
#[derive(Debug, Default)]
pub struct TreeHandle {
    current: RwLock<Arc<DocTree>>,
}

impl TreeHandle {
    #[must_use]
    pub fn new(tree: DocTree) -> Self {
        Self {
            current: RwLock::new(Arc::new(tree)),
        }
    }

    /// Get the current tree snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<DocTree> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new tree, returning the previous snapshot.
    pub fn replace(&self, tree: DocTree) -> Arc<DocTree> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(tree))
    }
}
