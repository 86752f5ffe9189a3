//! An AVL tree that uses a coarse grained lock.
//! Inserts and `contains` lookups are O(logN). All operations on one tree are
//! serialized by a single tree-wide mutex.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::check;
use crate::error::{InvariantViolation, TreeError};
use crate::insert::insert;
use crate::iter::{Inorder, Preorder};
use crate::node::{self, Link};
use crate::tracing_helpers::{debug_log, trace_log, warn_log};

/// State guarded by the tree lock.
#[derive(Debug)]
struct Inner<K> {
    root: Link<K>,
    size: usize,
}

/// A coarse grain locked AVL tree that stores distinct, ordered keys.
///
/// `AvlTree<K>` is `Send + Sync` when `K: Send`, so one tree can be shared
/// between threads (by reference in a scope, or behind an `Arc`) and every
/// thread may call [`insert`](AvlTree::insert) on it.
#[derive(Debug)]
pub struct AvlTree<K> {
    inner: Mutex<Inner<K>>,
}

/// Read access to a locked tree. Inserts from other threads block until the
/// guard is dropped.
#[derive(Debug)]
pub struct TreeGuard<'a, K> {
    inner: MutexGuard<'a, Inner<K>>,
}

impl<K> AvlTree<K> {
    /// Makes an empty tree.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                root: None,
                size: 0,
            }),
        }
    }

    /// Locks the tree for reading.
    pub fn lock(&self) -> Result<TreeGuard<'_, K>, TreeError> {
        let inner = self.inner.lock().map_err(|_| {
            warn_log!("tree lock poisoned");
            TreeError::Poisoned
        })?;
        Ok(TreeGuard { inner })
    }

    /// Number of distinct keys in the tree.
    pub fn size(&self) -> Result<usize, TreeError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, TreeError> {
        Ok(self.lock()?.is_empty())
    }

    /// Height of the tree, 0 if empty.
    pub fn height(&self) -> Result<usize, TreeError> {
        Ok(self.lock()?.height())
    }

    /// Releases every node, right subtree before left subtree before the node
    /// itself, and then the tree. Returns the number of nodes released.
    ///
    /// Consuming the tree rules out any other operation running on it.
    pub fn destroy(self) -> usize {
        let mut inner = self
            .inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        inner.clear()
    }
}

impl<K: Ord> AvlTree<K> {
    /// Inserts `key` in the tree.
    /// Returns `Ok(true)` if a new node was created, `Ok(false)` if the key was
    /// already present. The tree is unchanged on error.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn insert(&self, key: K) -> Result<bool, TreeError> {
        let mut guard = self.lock()?;
        let inner = &mut *guard.inner;
        let created = insert(&mut inner.root, key)?.is_some();
        if created {
            inner.size += 1;
        }
        trace_log!(created, size = inner.size, "insert done");
        Ok(created)
    }

    /// Searches for a key, starting from the root node.
    pub fn contains(&self, key: &K) -> Result<bool, TreeError> {
        Ok(self.lock()?.contains(key))
    }
}

impl<K: Clone> AvlTree<K> {
    /// Copies the keys out in pre-order.
    pub fn preorder_keys(&self) -> Result<Vec<K>, TreeError> {
        Ok(self.lock()?.preorder().cloned().collect())
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> TreeGuard<'a, K> {
    pub fn len(&self) -> usize {
        self.inner.size
    }

    pub fn is_empty(&self) -> bool {
        self.inner.root.is_none()
    }

    pub fn height(&self) -> usize {
        node::height(&self.inner.root)
    }

    /// Balance factor of the root, 0 if empty.
    pub fn balance(&self) -> isize {
        node::balance(&self.inner.root)
    }

    /// Keys in pre-order: node, left subtree, right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(&self.inner.root)
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(&self.inner.root)
    }
}

impl<'a, K: Ord> TreeGuard<'a, K> {
    pub fn contains(&self, key: &K) -> bool {
        let mut link = &self.inner.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => &node.left,
                std::cmp::Ordering::Greater => &node.right,
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Checks balance, cached heights, key order and the size counter.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check::validate(&self.inner.root, self.inner.size)
    }
}

impl<K> Inner<K> {
    /// Empties the tree and returns the number of nodes released.
    fn clear(&mut self) -> usize {
        let released = release(self.root.take());
        debug_log!(released, size = self.size, "tree released");
        self.size = 0;
        released
    }
}

/// Post-order release of a subtree: right, left, then the node.
fn release<K>(link: Link<K>) -> usize {
    match link {
        None => 0,
        Some(mut node) => {
            let right = release(node.right.take());
            let left = release(node.left.take());
            drop(node);
            right + left + 1
        }
    }
}

impl<K> Drop for Inner<K> {
    fn drop(&mut self) {
        self.clear();
    }
}
