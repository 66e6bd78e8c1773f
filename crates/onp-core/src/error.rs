//! Error types for replaying and validating change lists.
//!
//! Comparison itself never fails; these errors arise only when a change list
//! is checked or applied against sequences it may not belong to.

use crate::change::Change;

/// Errors that can occur when a change list is validated or applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A change starts before the end of the previous one.
    #[error("change {index} is out of order: {change:?}")]
    OutOfOrder { index: usize, change: Change },

    /// A change reaches past the end of one of the sequences.
    #[error("change {index} exceeds sequence bounds ({len_a}, {len_b}): {change:?}")]
    OutOfBounds {
        index: usize,
        change: Change,
        len_a: usize,
        len_b: usize,
    },

    /// A change deletes and inserts nothing.
    #[error("change {index} is empty")]
    EmptyChange { index: usize },

    /// The matched span before a change has different lengths on each side.
    #[error("matched span before change {index} differs in length: {gap_a} vs {gap_b}")]
    MisalignedGap {
        index: usize,
        gap_a: usize,
        gap_b: usize,
    },

    /// A change directly follows the previous one with no matched span.
    #[error("change {index} is adjacent to the previous change")]
    Adjacent { index: usize },
}

/// Convenience alias for replay results.
pub type DiffResult<T> = Result<T, DiffError>;
