//! Lazy traversals over a borrowed tree.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Pre-order iterator over the keys of a tree: node, left subtree, right subtree.
///
/// Cloning the iterator gives an independent traversal from the same point.
#[derive(Debug)]
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, K> Clone for Preorder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        //right first so the left subtree pops first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// In-order iterator over the keys of a tree, in ascending order.
#[derive(Debug)]
pub struct Inorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(root: &'a Link<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K> Clone for Inorder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}
