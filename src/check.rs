//! Structural self-check of a tree: AVL balance, cached heights, key order, size.

use crate::error::InvariantViolation;
use crate::node::Link;

/// Walks the whole tree and reports the first broken invariant.
pub(crate) fn validate<K: Ord>(root: &Link<K>, size: usize) -> Result<(), InvariantViolation> {
    let mut next = 0;
    let (_, reachable) = walk(root, None, None, &mut next)?;
    if reachable != size {
        return Err(InvariantViolation::SizeMismatch {
            recorded: size,
            reachable,
        });
    }
    Ok(())
}

/// Returns the real height and node count of the subtree.
/// Every key must lie strictly between `lower` and `upper`.
fn walk<'a, K: Ord>(
    link: &'a Link<K>,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
    next: &mut usize,
) -> Result<(usize, usize), InvariantViolation> {
    let node = match link {
        Some(node) => node,
        None => return Ok((0, 0)),
    };
    let position = *next;
    *next += 1;

    let below_lower = lower.map_or(false, |lower| node.key <= *lower);
    let above_upper = upper.map_or(false, |upper| node.key >= *upper);
    if below_lower || above_upper {
        return Err(InvariantViolation::OutOfOrder { position });
    }

    let (left_height, left_count) = walk(&node.left, lower, Some(&node.key), next)?;
    let (right_height, right_count) = walk(&node.right, Some(&node.key), upper, next)?;

    let actual = 1 + left_height.max(right_height);
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            position,
            cached: node.height,
            actual,
        });
    }
    let balance = left_height as isize - right_height as isize;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { position, balance });
    }
    Ok((actual, left_count + right_count + 1))
}
