//! Typed entry points over concrete element kinds.
//!
//! Each adapter wraps two slices in a [`SlicePair`] and hands it to
//! [`diff`]. The search itself is shared; only the equality test differs.

use crate::change::Change;
use crate::compare::{diff, Equal};

/// Two borrowed slices compared element-wise with `PartialEq`.
#[derive(Clone, Copy, Debug)]
pub struct SlicePair<'a, T> {
    pub a: &'a [T],
    pub b: &'a [T],
}

impl<'a, T> SlicePair<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }
}

impl<T: PartialEq> Equal for SlicePair<'_, T> {
    fn equal(&self, i: usize, j: usize) -> bool {
        self.a[i] == self.b[j]
    }
}

/// Differences between any two slices of comparable elements.
pub fn slices<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Change> {
    diff(a.len(), b.len(), &SlicePair::new(a, b))
}

/// Differences between byte slices.
pub fn bytes(a: &[u8], b: &[u8]) -> Vec<Change> {
    slices(a, b)
}

/// Differences between integer slices.
pub fn ints(a: &[i64], b: &[i64]) -> Vec<Change> {
    slices(a, b)
}

/// Differences between character slices.
pub fn chars(a: &[char], b: &[char]) -> Vec<Change> {
    slices(a, b)
}

/// Differences between two strings compared character by character.
///
/// Positions in the result are character indices, not byte offsets.
pub fn str_chars(a: &str, b: &str) -> Vec<Change> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    chars(&a, &b)
}

/// Differences between sequences of string tokens (lines, words, ...).
pub fn strings<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<Change> {
    diff(a.len(), b.len(), &|i: usize, j: usize| {
        a[i].as_ref() == b[j].as_ref()
    })
}
