//! O(NP) sequence comparison.
//!
//! Computes the minimal set of insertions and deletions that turn one
//! sequence into another, following S. Wu, U. Manber, G. Myers and
//! W. Miller, "An O(NP) Sequence Comparison Algorithm" (1989).
//!
//! The core never sees element data. It is driven by two lengths and an
//! [`Equal`] capability that compares element `i` of the first sequence with
//! element `j` of the second, so any randomly indexable representation can be
//! compared without copying.
//!
//! # Key Types
//!
//! - [`diff`] / [`Equal`] -- The comparison entry point and its capability
//! - [`Change`] -- One contiguous divergence (deleted and inserted counts)
//! - [`DiffOp`] / [`expand`] -- Full left-to-right cover including matched spans
//! - [`apply`] / [`validate`] -- Replay a change list against its inputs
//!
//! # Example
//!
//! ```
//! use onp_core::{str_chars, Change};
//!
//! let changes = str_chars("abcd", "abc");
//! assert_eq!(changes, vec![Change::new(3, 3, 1, 0)]);
//! ```

pub mod adapters;
pub mod apply;
pub mod change;
pub mod compare;
pub mod error;
pub mod ops;

pub use adapters::{bytes, chars, ints, slices, str_chars, strings, SlicePair};
pub use apply::{apply, validate};
pub use change::{Change, DiffStats};
pub use compare::{diff, diff_with_stats, CompareStats, Equal};
pub use error::{DiffError, DiffResult};
pub use ops::{expand, DiffOp};
