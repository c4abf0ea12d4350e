//! Tokenizer: splits raw text into an ordered token sequence.
//!
//! Normalization is an explicit, testable stage rather than inline pattern
//! substitution. The rules:
//!
//! - Characters outside the permitted set (alphanumerics, `_`, whitespace,
//!   and the punctuation marks `! ? . , ; : -`) are dropped, not rejected.
//! - Consecutive whitespace collapses to a single separator before splitting.
//! - Chunks with no alphanumeric content are not emitted as tokens; their
//!   punctuation folds onto the preceding token's tail so that sentence
//!   emphasis survives spacing variants (`"it !!!"` scores like `"it!!!"`).
//!   Orphan punctuation with no preceding token is discarded.
//! - Empty or whitespace-only input yields an empty sequence, never an error.

use crate::types::Token;

/// Punctuation retained because it carries sentiment signal.
const PERMITTED_PUNCTUATION: &[char] = &['!', '?', '.', ',', ';', ':', '-'];

/// Split `text` into an ordered sequence of [`Token`]s.
pub fn tokenize(text: &str) -> Vec<Token> {
    let cleaned: String = text
        .chars()
        .filter(|&c| {
            c.is_alphanumeric()
                || c == '_'
                || c.is_whitespace()
                || PERMITTED_PUNCTUATION.contains(&c)
        })
        .collect();

    let mut tokens: Vec<Token> = Vec::new();
    for chunk in cleaned.split_whitespace() {
        if chunk.chars().any(|c| c.is_alphanumeric()) {
            let position = tokens.len();
            tokens.push(Token::new(chunk, position));
        } else if let Some(last) = tokens.last_mut() {
            // Punctuation-only chunk: fold into the previous token's tail.
            let position = last.position;
            let merged = format!("{}{}", last.text, chunk);
            *last = Token::new(merged, position);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        let tokens = tokenize("a   b\t\nc");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn disallowed_characters_are_dropped() {
        let tokens = tokenize("nice 😀 @#$ fine");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["nice", "fine"]);
    }

    #[test]
    fn punctuation_only_chunks_fold_backwards() {
        let tokens = tokenize("like it !!!");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "it!!!");
        assert_eq!(tokens[1].normalized, "it");
    }

    #[test]
    fn leading_orphan_punctuation_is_discarded() {
        assert!(tokenize("!!! ...").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn positions_are_sequential() {
        let tokens = tokenize("one two three");
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
    }
}
