//! Unified-diff rendering.

use crate::text_diff::{DiffLine, TextDiff};

/// Render `diff` in the format of `diff -u`.
///
/// Returns an empty string for identical inputs. Hunk headers follow the
/// usual convention that a hunk covering no lines on one side reports the
/// line before it. A line without a terminator is followed by
/// `\ No newline at end of file`.
pub fn render_unified(diff: &TextDiff, old_label: &str, new_label: &str) -> String {
    if diff.is_empty() {
        return String::new();
    }

    let mut out = format!("--- {old_label}\n+++ {new_label}\n");
    for hunk in &diff.hunks {
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            range(hunk.old_start, hunk.old_count),
            range(hunk.new_start, hunk.new_count)
        ));
        for line in &hunk.lines {
            let (prefix, text) = match line {
                DiffLine::Context(t) => (' ', t.as_str()),
                DiffLine::Removed(t) => ('-', t.as_str()),
                DiffLine::Added(t) => ('+', t.as_str()),
                DiffLine::NoNewline => ('\\', " No newline at end of file"),
            };
            out.push(prefix);
            out.push_str(text);
            out.push('\n');
        }
    }
    out
}

fn range(start: usize, count: usize) -> String {
    match count {
        0 => format!("{},0", start - 1),
        1 => start.to_string(),
        n => format!("{start},{n}"),
    }
}
