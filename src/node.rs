//! Nodes of the AVL tree and the height/balance helpers over them.

use std::alloc::{self, Layout};
use std::ptr;

use crate::error::TreeError;
use crate::tracing_helpers::warn_log;

/// An owning edge to a subtree. `None` is the empty subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A node in the tree that stores a key, the height of the subtree rooted by it,
/// and its left, right child subtrees.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Allocates a new leaf of height 1.
    /// Returns `TreeError::AllocationFailed` instead of aborting if the allocator
    /// is out of memory. `key` is dropped in that case.
    pub(crate) fn try_new(key: K) -> Result<Box<Self>, TreeError> {
        let layout = Layout::new::<Self>();
        unsafe {
            // `Node` always holds a `usize`, so the layout is never zero-sized.
            let raw = alloc::alloc(layout) as *mut Self;
            if raw.is_null() {
                warn_log!(bytes = layout.size(), "node allocation failed");
                return Err(TreeError::AllocationFailed {
                    bytes: layout.size(),
                });
            }
            ptr::write(
                raw,
                Self {
                    key,
                    height: 1,
                    left: None,
                    right: None,
                },
            );
            // The block came from the global allocator with `Layout::new::<Self>()`,
            // which is exactly what `Box` expects to free.
            Ok(Box::from_raw(raw))
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height of this node.
    pub(crate) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Cached height of the subtree, 0 if absent.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of the subtree root, 0 if absent.
/// Positive means left-heavy, negative right-heavy.
pub(crate) fn balance<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}
