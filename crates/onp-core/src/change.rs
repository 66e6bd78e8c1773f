//! The change record returned by a comparison, and aggregate statistics.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One contiguous divergence between two sequences.
///
/// At position `a` in the first sequence, `del` elements are removed; at
/// position `b` in the second sequence, `ins` elements are inserted. The two
/// counts are never both zero in a list produced by [`diff`](crate::diff).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    /// Position in the first sequence.
    pub a: usize,
    /// Position in the second sequence.
    pub b: usize,
    /// Number of elements deleted from the first sequence.
    pub del: usize,
    /// Number of elements inserted from the second sequence.
    pub ins: usize,
}

impl Change {
    pub const fn new(a: usize, b: usize, del: usize, ins: usize) -> Self {
        Self { a, b, del, ins }
    }

    /// Indices of the deleted elements in the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a..self.a + self.del
    }

    /// Indices of the inserted elements in the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b..self.b + self.ins
    }

    /// The same change seen from the other side: positions and counts swapped.
    ///
    /// Comparing `b` against `a` yields exactly the transposed records of
    /// comparing `a` against `b`.
    pub const fn transpose(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            del: self.ins,
            ins: self.del,
        }
    }

    /// Returns `true` if this change only removes elements.
    pub const fn is_deletion(&self) -> bool {
        self.del > 0 && self.ins == 0
    }

    /// Returns `true` if this change only adds elements.
    pub const fn is_insertion(&self) -> bool {
        self.del == 0 && self.ins > 0
    }

    /// Returns `true` if this change both removes and adds elements.
    pub const fn is_replacement(&self) -> bool {
        self.del > 0 && self.ins > 0
    }
}

/// Summary counts over a change list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of change records.
    pub changes: usize,
    /// Total elements deleted from the first sequence.
    pub deletions: usize,
    /// Total elements inserted from the second sequence.
    pub insertions: usize,
}

impl DiffStats {
    pub fn from_changes(changes: &[Change]) -> Self {
        changes.iter().fold(Self::default(), |acc, c| Self {
            changes: acc.changes + 1,
            deletions: acc.deletions + c.del,
            insertions: acc.insertions + c.ins,
        })
    }

    /// Edit distance counting only insertions and deletions.
    pub fn distance(&self) -> usize {
        self.deletions + self.insertions
    }

    /// Returns `true` if the change list was empty.
    pub fn is_identical(&self) -> bool {
        self.changes == 0
    }
}
