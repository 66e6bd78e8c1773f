//! Text diffs built on the O(NP) core.
//!
//! Splits two texts into tokens, compares the token sequences with
//! [`onp_core::strings`], and groups the resulting changes into hunks with
//! surrounding context.
//!
//! # Key Types
//!
//! - [`TextDiff`] / [`DiffHunk`] / [`DiffLine`] -- Grouped result of a text diff
//! - [`Granularity`] / [`tokenize`] -- How text is split before comparison
//! - [`render_unified`] -- `diff -u` style rendering

pub mod text_diff;
pub mod tokenize;
pub mod unified;

pub use text_diff::{diff_text, DiffHunk, DiffLine, TextDiff, TextDiffOptions};
pub use tokenize::{tokenize, Granularity};
pub use unified::render_unified;
