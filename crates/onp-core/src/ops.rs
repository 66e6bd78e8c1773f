//! Expansion of a change list into a complete edit script.
//!
//! A change list only describes where the sequences diverge. [`expand`]
//! fills in the matched spans between changes so that every element of both
//! sequences is covered exactly once, in order.

use serde::{Deserialize, Serialize};

use crate::change::Change;

/// One step of an expanded edit script.
///
/// `a` and `b` are the positions in the first and second sequence where the
/// step begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOp {
    /// `len` elements present in both sequences.
    Equal { a: usize, b: usize, len: usize },
    /// `len` elements removed from the first sequence.
    Delete { a: usize, b: usize, len: usize },
    /// `len` elements added from the second sequence.
    Insert { a: usize, b: usize, len: usize },
    /// `del` elements removed and `ins` elements added at the same point.
    Replace {
        a: usize,
        b: usize,
        del: usize,
        ins: usize,
    },
}

impl DiffOp {
    /// Number of elements of the first sequence covered by this step.
    pub fn old_len(&self) -> usize {
        match *self {
            Self::Equal { len, .. } | Self::Delete { len, .. } => len,
            Self::Insert { .. } => 0,
            Self::Replace { del, .. } => del,
        }
    }

    /// Number of elements of the second sequence covered by this step.
    pub fn new_len(&self) -> usize {
        match *self {
            Self::Equal { len, .. } | Self::Insert { len, .. } => len,
            Self::Delete { .. } => 0,
            Self::Replace { ins, .. } => ins,
        }
    }

    /// Returns `true` for every step except [`DiffOp::Equal`].
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

impl From<Change> for DiffOp {
    fn from(c: Change) -> Self {
        match (c.del, c.ins) {
            (0, len) => Self::Insert { a: c.a, b: c.b, len },
            (len, 0) => Self::Delete { a: c.a, b: c.b, len },
            (del, ins) => Self::Replace {
                a: c.a,
                b: c.b,
                del,
                ins,
            },
        }
    }
}

/// Interleave the matched spans implied by `changes` with the changes
/// themselves.
///
/// `len_a` and `len_b` are the lengths of the compared sequences; they
/// determine the trailing matched span. `changes` must be a list produced by
/// [`diff`](crate::diff) for those lengths.
pub fn expand(changes: &[Change], len_a: usize, len_b: usize) -> Vec<DiffOp> {
    let mut ops = Vec::with_capacity(changes.len() * 2 + 1);
    let (mut a, mut b) = (0, 0);
    for &c in changes {
        if c.a > a {
            ops.push(DiffOp::Equal { a, b, len: c.a - a });
        }
        ops.push(c.into());
        a = c.a + c.del;
        b = c.b + c.ins;
    }
    let tail = len_a.saturating_sub(a).min(len_b.saturating_sub(b));
    if tail > 0 {
        ops.push(DiffOp::Equal { a, b, len: tail });
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::str_chars;

    #[test]
    fn identical_is_single_equal() {
        assert_eq!(
            expand(&[], 3, 3),
            vec![DiffOp::Equal { a: 0, b: 0, len: 3 }]
        );
        assert!(expand(&[], 0, 0).is_empty());
    }

    #[test]
    fn paper_script_covers_both_sides() {
        let a = "acbdeacbed";
        let b = "acebdabbabed";
        let ops = expand(&str_chars(a, b), a.len(), b.len());
        assert_eq!(
            ops,
            vec![
                DiffOp::Equal { a: 0, b: 0, len: 2 },
                DiffOp::Insert { a: 2, b: 2, len: 1 },
                DiffOp::Equal { a: 2, b: 3, len: 2 },
                DiffOp::Delete { a: 4, b: 5, len: 1 },
                DiffOp::Equal { a: 5, b: 5, len: 1 },
                DiffOp::Delete { a: 6, b: 6, len: 1 },
                DiffOp::Equal { a: 7, b: 6, len: 1 },
                DiffOp::Insert { a: 8, b: 7, len: 3 },
                DiffOp::Equal { a: 8, b: 10, len: 2 },
            ]
        );
        assert_eq!(ops.iter().map(DiffOp::old_len).sum::<usize>(), a.len());
        assert_eq!(ops.iter().map(DiffOp::new_len).sum::<usize>(), b.len());
    }

    #[test]
    fn replacement_is_one_step() {
        let ops = expand(&str_chars("abc", "12345"), 3, 5);
        assert_eq!(
            ops,
            vec![DiffOp::Replace {
                a: 0,
                b: 0,
                del: 3,
                ins: 5
            }]
        );
        assert!(ops[0].is_change());
    }

    #[test]
    fn serializes_with_op_tag() {
        let json = serde_json::to_string(&DiffOp::Insert { a: 1, b: 2, len: 3 }).unwrap();
        assert_eq!(json, r#"{"op":"insert","a":1,"b":2,"len":3}"#);
    }
}
