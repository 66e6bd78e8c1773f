//! Replaying a change list.
//!
//! [`apply`] rebuilds the second sequence from the first: matched spans are
//! copied from `a`, deleted elements are skipped, and inserted elements are
//! taken from `b`. It is the executable form of the guarantee that a change
//! list fully accounts for every difference between its inputs.

use crate::change::Change;
use crate::error::{DiffError, DiffResult};

/// Check that `changes` is a well-formed change list for sequences of
/// length `len_a` and `len_b`.
///
/// A well-formed list is strictly ordered, stays in bounds, has no empty or
/// adjacent records, and implies matched spans of equal length on both sides.
pub fn validate(changes: &[Change], len_a: usize, len_b: usize) -> DiffResult<()> {
    let (mut a, mut b) = (0, 0);
    for (index, &change) in changes.iter().enumerate() {
        if change.del == 0 && change.ins == 0 {
            return Err(DiffError::EmptyChange { index });
        }
        if change.a < a || change.b < b {
            return Err(DiffError::OutOfOrder { index, change });
        }
        let end_a = change.a.checked_add(change.del).filter(|&end| end <= len_a);
        let end_b = change.b.checked_add(change.ins).filter(|&end| end <= len_b);
        let (Some(end_a), Some(end_b)) = (end_a, end_b) else {
            return Err(DiffError::OutOfBounds {
                index,
                change,
                len_a,
                len_b,
            });
        };
        let (gap_a, gap_b) = (change.a - a, change.b - b);
        if gap_a != gap_b {
            return Err(DiffError::MisalignedGap {
                index,
                gap_a,
                gap_b,
            });
        }
        if index > 0 && gap_a == 0 {
            return Err(DiffError::Adjacent { index });
        }
        a = end_a;
        b = end_b;
    }
    if len_a - a != len_b - b {
        return Err(DiffError::MisalignedGap {
            index: changes.len(),
            gap_a: len_a - a,
            gap_b: len_b - b,
        });
    }
    Ok(())
}

/// Rebuild `b` from `a` using `changes`.
///
/// The list is validated first. Matched spans are taken from `a` without
/// being compared against `b`, so the result equals `b` only when `changes`
/// was computed for this pair.
pub fn apply<T: Clone>(a: &[T], b: &[T], changes: &[Change]) -> DiffResult<Vec<T>> {
    validate(changes, a.len(), b.len())?;

    let mut out = Vec::with_capacity(b.len());
    let mut pos = 0;
    for change in changes {
        out.extend_from_slice(&a[pos..change.a]);
        out.extend_from_slice(&b[change.b_range()]);
        pos = change.a + change.del;
    }
    out.extend_from_slice(&a[pos..]);
    Ok(out)
}
