//! AVL insertion: ordinary BST placement, then height refresh and rebalancing
//! while the recursion unwinds.

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::rotation::{rotate_left, rotate_right};
use crate::tracing_helpers::{debug_log, trace_log};

/// Which way the new key went from the subtree root that handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    /// The subtree was empty and the new leaf is its root.
    Here,
    Left,
    Right,
}

/// Inserts `key` into the subtree owned by `slot`.
///
/// Returns `Ok(None)` if the key already exists (nothing changes), otherwise the
/// direction taken at this level. The parent uses its child's direction to tell
/// a straight-line imbalance from a zig-zag one, which is the same as comparing
/// the key against the child's key.
///
/// No node is touched before the new leaf is allocated, so an allocation failure
/// leaves the subtree exactly as it was.
pub(crate) fn insert<K: Ord>(slot: &mut Link<K>, key: K) -> Result<Option<Descent>, TreeError> {
    let node = match slot {
        Some(node) => node,
        None => {
            //key does not exist. insert it here
            *slot = Some(Node::try_new(key)?);
            return Ok(Some(Descent::Here));
        }
    };

    let (descent, below) = match key.cmp(&node.key) {
        Ordering::Less => (Descent::Left, insert(&mut node.left, key)?),
        Ordering::Greater => (Descent::Right, insert(&mut node.right, key)?),
        Ordering::Equal => {
            trace_log!(height = node.height, "duplicate key ignored");
            return Ok(None);
        }
    };
    let below = match below {
        Some(below) => below,
        None => return Ok(None),
    };

    //successful insertion. now, this node may be unbalanced
    node.update_height();
    let balance = node.balance();
    match (descent, below) {
        (Descent::Left, Descent::Left) if balance > 1 => {
            debug_log!(case = "left-left", balance, "rebalancing");
            rotate_right(slot);
        }
        (Descent::Right, Descent::Right) if balance < -1 => {
            debug_log!(case = "right-right", balance, "rebalancing");
            rotate_left(slot);
        }
        (Descent::Left, Descent::Right) if balance > 1 => {
            debug_log!(case = "left-right", balance, "rebalancing");
            rotate_left(&mut node.left);
            rotate_right(slot);
        }
        (Descent::Right, Descent::Left) if balance < -1 => {
            debug_log!(case = "right-left", balance, "rebalancing");
            rotate_right(&mut node.right);
            rotate_left(slot);
        }
        _ => {}
    }
    Ok(Some(descent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::height;

    fn build(keys: &[i32]) -> Link<i32> {
        let mut root = None;
        for &key in keys {
            insert(&mut root, key).unwrap();
        }
        root
    }

    fn preorder(link: &Link<i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            out.push(node.key);
            preorder(&node.left, out);
            preorder(&node.right, out);
        }
    }

    fn keys(link: &Link<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        preorder(link, &mut out);
        out
    }

    #[test]
    fn test_first_insert() {
        let mut root = None;
        assert_eq!(insert(&mut root, 5).unwrap(), Some(Descent::Here));
        assert_eq!(height(&root), 1);
    }

    #[test]
    fn test_duplicate() {
        let mut root = build(&[2, 1, 3]);
        assert_eq!(insert(&mut root, 1).unwrap(), None);
        assert_eq!(insert(&mut root, 2).unwrap(), None);
        assert_eq!(keys(&root), vec![2, 1, 3]);
        assert_eq!(height(&root), 2);
    }

    #[test]
    fn test_direction_reported() {
        let mut root = build(&[2]);
        assert_eq!(insert(&mut root, 1).unwrap(), Some(Descent::Left));
        assert_eq!(insert(&mut root, 3).unwrap(), Some(Descent::Right));
    }

    #[test]
    fn test_left_left() {
        assert_eq!(keys(&build(&[30, 20, 10])), vec![20, 10, 30]);
    }

    #[test]
    fn test_right_right() {
        assert_eq!(keys(&build(&[10, 20, 30])), vec![20, 10, 30]);
    }

    #[test]
    fn test_left_right() {
        assert_eq!(keys(&build(&[30, 10, 20])), vec![20, 10, 30]);
    }

    #[test]
    fn test_right_left() {
        assert_eq!(keys(&build(&[10, 30, 20])), vec![20, 10, 30]);
    }

    #[test]
    fn test_rebalance_below_root() {
        //50 has a full left side, then 70, 80 unbalance 60's right subtree
        let root = build(&[50, 30, 60, 70, 80]);
        assert_eq!(keys(&root), vec![50, 30, 70, 60, 80]);
        assert_eq!(height(&root), 3);
    }

    #[test]
    fn test_ascending_keys_stay_logarithmic() {
        let keys: Vec<i32> = (0..1023).collect();
        let root = build(&keys);
        //a perfect tree of 1023 nodes
        assert_eq!(height(&root), 10);
    }
}
