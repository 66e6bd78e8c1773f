//! Splitting text into comparable tokens.

use serde::{Deserialize, Serialize};

/// The unit in which two texts are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One token per line, including its terminator.
    #[default]
    Lines,
    /// Maximal runs of whitespace or of non-whitespace.
    Words,
    /// One token per Unicode scalar value.
    Chars,
}

/// Split `text` into tokens of the given granularity.
///
/// The tokens always concatenate back to `text`. Line tokens keep their
/// `\n` or `\r\n` terminator, so texts that differ only in line endings or
/// in a missing final newline produce different tokens.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Lines => text.split_inclusive('\n').collect(),
        Granularity::Words => words(text),
        Granularity::Chars => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}

fn words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_terminators() {
        assert_eq!(
            tokenize("a\nb\r\nc\n", Granularity::Lines),
            vec!["a\n", "b\r\n", "c\n"]
        );
        assert_eq!(tokenize("a\nb", Granularity::Lines), vec!["a\n", "b"]);
        assert!(tokenize("", Granularity::Lines).is_empty());
    }

    #[test]
    fn words_keep_whitespace_runs() {
        let text = "let  x =\tfoo(1);\n";
        let tokens = tokenize(text, Granularity::Words);
        assert_eq!(tokens, vec!["let", "  ", "x", " ", "=", "\t", "foo(1);", "\n"]);
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn words_on_leading_whitespace() {
        assert_eq!(tokenize("  hi", Granularity::Words), vec!["  ", "hi"]);
        assert!(tokenize("", Granularity::Words).is_empty());
    }

    #[test]
    fn chars_split_scalars() {
        let tokens = tokenize("héllo", Granularity::Chars);
        assert_eq!(tokens, vec!["h", "é", "l", "l", "o"]);
    }

    #[test]
    fn granularity_serde_lowercase() {
        let json = serde_json::to_string(&Granularity::Words).unwrap();
        assert_eq!(json, "\"words\"");
        let back: Granularity = serde_json::from_str("\"chars\"").unwrap();
        assert_eq!(back, Granularity::Chars);
    }
}
