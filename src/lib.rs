//! A height-balanced (AVL) binary search tree of distinct keys, guarded by one
//! tree-wide lock so that many threads can insert into the same tree.
//!
//! ```rust
//! use locked_avl::AvlTree;
//!
//! let tree = AvlTree::new();
//! assert_eq!(tree.insert(10).unwrap(), true);
//! assert_eq!(tree.insert(20).unwrap(), true);
//! assert_eq!(tree.insert(30).unwrap(), true);
//! assert_eq!(tree.insert(30).unwrap(), false);
//!
//! let guard = tree.lock().unwrap();
//! assert_eq!(guard.preorder().copied().collect::<Vec<_>>(), vec![20, 10, 30]);
//! assert!(guard.validate().is_ok());
//! ```
//!
//! Build with the `tracing` feature to get insert, rebalance and teardown events.

mod tracing_helpers;

mod check;
mod error;
mod insert;
mod iter;
mod node;
mod rotation;

mod tree;
pub use tree::{AvlTree, TreeGuard};

pub use error::{InvariantViolation, TreeError};
pub use iter::{Inorder, Preorder};
