//! Single rotations. Each one moves ownership of two nodes and one middle subtree
//! between their existing owners; in-order sequence and node count are preserved.

use crate::node::Link;

/// Rotates the subtree in `slot` to the right.
///
/// ```text
///         y            x
///        / \          / \
///       x   C  ==>   A   y
///      / \              / \
///     A   B            B   C
/// ```
///
/// Requires `y.left`. Leaves `slot` untouched otherwise.
pub(crate) fn rotate_right<K>(slot: &mut Link<K>) {
    let mut y = match slot.take() {
        Some(y) => y,
        None => return,
    };
    let mut x = match y.left.take() {
        Some(x) => x,
        None => {
            *slot = Some(y);
            return;
        }
    };
    y.left = x.right.take();
    //child first, then the new parent
    y.update_height();
    x.right = Some(y);
    x.update_height();
    *slot = Some(x);
}

/// Rotates the subtree in `slot` to the left, the mirror image of `rotate_right`.
///
/// Requires `x.right`. Leaves `slot` untouched otherwise.
pub(crate) fn rotate_left<K>(slot: &mut Link<K>) {
    let mut x = match slot.take() {
        Some(x) => x,
        None => return,
    };
    let mut y = match x.right.take() {
        Some(y) => y,
        None => {
            *slot = Some(x);
            return;
        }
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    *slot = Some(y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{height, Node};

    fn leaf(key: i32) -> Link<i32> {
        Some(Node::try_new(key).unwrap())
    }

    fn branch(key: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        let mut node = Node::try_new(key).unwrap();
        node.left = left;
        node.right = right;
        node.update_height();
        Some(node)
    }

    fn inorder(link: &Link<i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            inorder(&node.left, out);
            out.push(node.key);
            inorder(&node.right, out);
        }
    }

    #[test]
    fn test_rotate_right() {
        //y=4 with x=2 (A=1, B=3) and C=5
        let mut slot = branch(4, branch(2, leaf(1), leaf(3)), leaf(5));
        rotate_right(&mut slot);

        let x = slot.as_ref().unwrap();
        assert_eq!(x.key, 2);
        assert_eq!(x.left.as_ref().unwrap().key, 1);
        let y = x.right.as_ref().unwrap();
        assert_eq!(y.key, 4);
        assert_eq!(y.left.as_ref().unwrap().key, 3);
        assert_eq!(y.right.as_ref().unwrap().key, 5);

        assert_eq!(y.height, 2);
        assert_eq!(x.height, 3);

        let mut keys = Vec::new();
        inorder(&slot, &mut keys);
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rotate_left() {
        let mut slot = branch(2, leaf(1), branch(4, leaf(3), leaf(5)));
        rotate_left(&mut slot);

        let y = slot.as_ref().unwrap();
        assert_eq!(y.key, 4);
        assert_eq!(y.right.as_ref().unwrap().key, 5);
        let x = y.left.as_ref().unwrap();
        assert_eq!(x.key, 2);
        assert_eq!(x.left.as_ref().unwrap().key, 1);
        assert_eq!(x.right.as_ref().unwrap().key, 3);

        assert_eq!(x.height, 2);
        assert_eq!(y.height, 3);

        let mut keys = Vec::new();
        inorder(&slot, &mut keys);
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rotate_chain_restores_height() {
        //1 -> 2 -> 3, all right children
        let mut slot = branch(1, None, branch(2, None, leaf(3)));
        assert_eq!(height(&slot), 3);
        rotate_left(&mut slot);
        assert_eq!(height(&slot), 2);
        let root = slot.as_ref().unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.balance(), 0);
    }

    #[test]
    fn test_rotate_without_child() {
        let mut slot = leaf(1);
        rotate_right(&mut slot);
        assert_eq!(slot.as_ref().unwrap().key, 1);
        rotate_left(&mut slot);
        assert_eq!(slot.as_ref().unwrap().key, 1);

        let mut empty: Link<i32> = None;
        rotate_right(&mut empty);
        rotate_left(&mut empty);
        assert!(empty.is_none());
    }
}
