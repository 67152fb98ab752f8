//! Word definition command
//!
//! One-off dictionary lookup, CLI twin of the in-game definitions view.

use crate::dictionary::{Definition, DictionaryOracle};

/// Look up a word's definitions
///
/// # Errors
///
/// Returns an error when the word contains non-letter characters or the
/// dictionary cannot confirm it.
pub async fn run_define<O: DictionaryOracle>(oracle: &O, word: &str) -> Result<Definition, String> {
    if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(format!("'{word}' is not a word (letters only)"));
    }

    oracle
        .lookup(word)
        .await
        .ok_or_else(|| format!("No definition found for '{word}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::testing::FixedOracle;

    #[tokio::test]
    async fn known_word_returns_definitions() {
        let oracle = FixedOracle::knowing(&["hello"]);
        let definition = run_define(&oracle, "hello").await.unwrap();
        assert_eq!(definition.word, "hello");
        assert!(!definition.definitions.is_empty());
    }

    #[tokio::test]
    async fn unknown_word_is_an_error() {
        let oracle = FixedOracle::unreachable();
        let err = run_define(&oracle, "zzyx").await.unwrap_err();
        assert!(err.contains("zzyx"));
    }

    #[tokio::test]
    async fn malformed_word_never_reaches_the_oracle() {
        let oracle = FixedOracle::knowing(&["hello"]);
        assert!(run_define(&oracle, "he-llo").await.is_err());
        assert!(run_define(&oracle, "").await.is_err());
        assert_eq!(oracle.call_count(), 0);
    }
}
