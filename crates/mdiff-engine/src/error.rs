//! Error types for the diff engine.

/// Errors that can occur while computing a diff.
///
/// Only [`DiffError::InvalidInput`] is caused by caller data. The remaining
/// variants signal a broken invariant inside the search/backtrack coupling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The input could not be interpreted as text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A diagonal outside the store's `[-max, +max]` range was addressed.
    #[error("diagonal {index} out of bounds for store of max {max}")]
    OutOfBounds { index: isize, max: usize },

    /// The search exhausted every depth without reaching the corner `(n, m)`.
    #[error("terminal corner not reached within {max} edit steps")]
    Unreachable { max: usize },

    /// A recorded trace step matched neither an insertion nor a deletion.
    #[error("corrupt trace at depth {depth}: no single edit leads to ({x}, {y})")]
    CorruptTrace { depth: usize, x: usize, y: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
