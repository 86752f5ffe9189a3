use thiserror::Error;

/// Errors reported by the tree operations.
///
/// A duplicate key is not an error: `insert` returns `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The global allocator could not provide memory for a new node.
    #[error("memory allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    /// A thread panicked while holding the tree lock.
    #[error("tree lock poisoned by a panicking thread")]
    Poisoned,
}

/// A structural invariant found broken by `TreeGuard::validate`.
///
/// `position` is the pre-order index of the offending node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("node {position} has balance factor {balance}")]
    Unbalanced { position: usize, balance: isize },

    #[error("node {position} caches height {cached}, subtree height is {actual}")]
    StaleHeight {
        position: usize,
        cached: usize,
        actual: usize,
    },

    #[error("node {position} breaks ascending key order")]
    OutOfOrder { position: usize },

    #[error("size counter is {recorded} but {reachable} nodes are reachable")]
    SizeMismatch { recorded: usize, reachable: usize },
}
