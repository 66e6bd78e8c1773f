//! Token-level diff of two texts, grouped into hunks with context.

use onp_core::Change;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokenize::{tokenize, Granularity};

/// Options controlling how two texts are compared and grouped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDiffOptions {
    /// Unit of comparison.
    pub granularity: Granularity,
    /// Number of unchanged tokens shown around each change.
    pub context: usize,
}

impl Default for TextDiffOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Lines,
            context: 3,
        }
    }
}

/// The result of diffing two texts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    /// The diff hunks.
    pub hunks: Vec<DiffHunk>,
    /// Total number of tokens in the old content.
    pub old_tokens: usize,
    /// Total number of tokens in the new content.
    pub new_tokens: usize,
    /// Raw change records over the token sequences.
    pub changes: Vec<Change>,
    /// Set when either input was not valid UTF-8.
    pub is_binary: bool,
}

impl TextDiff {
    /// Returns `true` if the two texts are identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of tokens added across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of tokens removed across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }
}

/// A contiguous region of changes in a diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// Token number in the old content where this hunk starts (1-based).
    pub old_start: usize,
    /// Number of tokens from the old content in this hunk.
    pub old_count: usize,
    /// Token number in the new content where this hunk starts (1-based).
    pub new_start: usize,
    /// Number of tokens from the new content in this hunk.
    pub new_count: usize,
    /// The individual diff lines in this hunk.
    pub lines: Vec<DiffLine>,
}

/// A single token in a diff hunk.
///
/// Line tokens are stored without their trailing `\n`; a carriage return
/// before it is kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DiffLine {
    /// Present in both old and new (context).
    Context(String),
    /// Added in the new content.
    Added(String),
    /// Removed from the old content.
    Removed(String),
    /// The preceding line has no terminator (end of file).
    NoNewline,
}

/// Compute a token-level diff between two byte slices.
///
/// The content is interpreted as UTF-8 text. If either side is not valid
/// UTF-8, a single hunk noting the binary difference is returned.
pub fn diff_text(old: &[u8], new: &[u8], options: &TextDiffOptions) -> TextDiff {
    let (old_str, new_str) = match (std::str::from_utf8(old), std::str::from_utf8(new)) {
        (Ok(o), Ok(n)) => (o, n),
        _ => return make_binary_diff(old, new),
    };

    let old_toks = tokenize(old_str, options.granularity);
    let new_toks = tokenize(new_str, options.granularity);

    let changes = if old_str == new_str {
        Vec::new()
    } else {
        onp_core::strings(&old_toks, &new_toks)
    };
    let hunks = build_hunks(&old_toks, &new_toks, &changes, options);

    debug!(
        granularity = ?options.granularity,
        old = old_toks.len(),
        new = new_toks.len(),
        changes = changes.len(),
        hunks = hunks.len(),
        "text diff computed"
    );

    TextDiff {
        hunks,
        old_tokens: old_toks.len(),
        new_tokens: new_toks.len(),
        changes,
        is_binary: false,
    }
}

/// Group changes into hunks. Changes separated by at most `2 * context`
/// matched tokens share a hunk.
fn build_hunks(
    old: &[&str],
    new: &[&str],
    changes: &[Change],
    options: &TextDiffOptions,
) -> Vec<DiffHunk> {
    let context = options.context;
    let mut hunks = Vec::new();
    let mut start = 0;
    while start < changes.len() {
        let mut end = start;
        while let Some(next) = changes.get(end + 1) {
            let prev = &changes[end];
            if next.a - (prev.a + prev.del) > 2 * context {
                break;
            }
            end += 1;
        }
        hunks.push(make_hunk(old, new, &changes[start..=end], options));
        start = end + 1;
    }
    hunks
}

fn make_hunk(old: &[&str], new: &[&str], group: &[Change], options: &TextDiffOptions) -> DiffHunk {
    let (first, last) = (group[0], group[group.len() - 1]);
    let lead = first.a.min(options.context);
    let old_start = first.a - lead;
    let new_start = first.b - lead;

    let g = options.granularity;
    let mut lines = Vec::new();
    push_tokens(&mut lines, &old[old_start..first.a], DiffLine::Context, g);

    let mut pos = first.a;
    for change in group {
        push_tokens(&mut lines, &old[pos..change.a], DiffLine::Context, g);
        push_tokens(&mut lines, &old[change.a_range()], DiffLine::Removed, g);
        push_tokens(&mut lines, &new[change.b_range()], DiffLine::Added, g);
        pos = change.a + change.del;
    }

    let trail = (old.len() - pos).min(options.context);
    push_tokens(&mut lines, &old[pos..pos + trail], DiffLine::Context, g);

    DiffHunk {
        old_start: old_start + 1,
        old_count: pos + trail - old_start,
        new_start: new_start + 1,
        new_count: last.b + last.ins + trail - new_start,
        lines,
    }
}

fn push_tokens(
    lines: &mut Vec<DiffLine>,
    tokens: &[&str],
    kind: fn(String) -> DiffLine,
    granularity: Granularity,
) {
    for token in tokens {
        if granularity != Granularity::Lines {
            lines.push(kind(token.to_string()));
            continue;
        }
        match token.strip_suffix('\n') {
            Some(text) => lines.push(kind(text.to_string())),
            None => {
                lines.push(kind(token.to_string()));
                lines.push(DiffLine::NoNewline);
            }
        }
    }
}

/// Create a synthetic diff for binary content.
fn make_binary_diff(old: &[u8], new: &[u8]) -> TextDiff {
    if old == new {
        return TextDiff {
            hunks: Vec::new(),
            old_tokens: 0,
            new_tokens: 0,
            changes: Vec::new(),
            is_binary: true,
        };
    }

    let mut lines = Vec::new();
    if !old.is_empty() {
        lines.push(DiffLine::Removed(format!("(binary content, {} bytes)", old.len())));
    }
    if !new.is_empty() {
        lines.push(DiffLine::Added(format!("(binary content, {} bytes)", new.len())));
    }

    TextDiff {
        hunks: vec![DiffHunk {
            old_start: 1,
            old_count: usize::from(!old.is_empty()),
            new_start: 1,
            new_count: usize::from(!new.is_empty()),
            lines,
        }],
        old_tokens: 0,
        new_tokens: 0,
        changes: Vec::new(),
        is_binary: true,
    }
}
