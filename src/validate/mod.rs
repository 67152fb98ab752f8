//! Level bulk validation
//!
//! Batch pipeline over a level's word list: duplicate detection, structural
//! legality, dictionary realness, and length-class coverage. Reuses the
//! legality checker and the oracle but never touches a game session; this is
//! the offline `validate` command's engine.

use crate::core::is_legal_formation;
use crate::dictionary::DictionaryOracle;
use rustc_hash::FxHashSet;

/// Shortest base word the game considers playable
pub const MIN_BASE_WORD_LEN: usize = 5;

/// Per-level validation breakdown
///
/// `valid` and `not_real_words` are not mutually exclusive: a word that is
/// structurally well-formed but unknown to the dictionary appears in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    pub duplicates: Vec<String>,
    pub not_real_words: Vec<String>,
    pub base_word_valid: bool,
    pub base_word_too_short: bool,
    pub base_word_not_real: bool,
    pub has_3_letter_word: bool,
    pub has_4_letter_word: bool,
    pub has_5_letter_word: bool,
}

impl ValidationReport {
    /// True when nothing in the level needs attention
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.base_word_valid
            && self.invalid.is_empty()
            && self.duplicates.is_empty()
            && self.not_real_words.is_empty()
    }
}

/// Validate one level's base word and answer list
///
/// Runs every check over every word and never aborts early: a failed lookup
/// lands the word in `not_real_words` and the batch continues. The base-word
/// lookup is skipped entirely when the word is already too short.
pub async fn validate_level<O: DictionaryOracle>(
    oracle: &O,
    base_word: &str,
    sub_words: &[String],
) -> ValidationReport {
    let base_word_too_short = base_word.len() < MIN_BASE_WORD_LEN;
    let base_word_not_real = if base_word_too_short {
        false
    } else {
        oracle.lookup(base_word).await.is_none()
    };

    // Second and later occurrences by lowercase key, original casing
    // preserved, source order; identical spellings are reported once.
    let mut duplicates: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for word in sub_words {
        let key = word.to_lowercase();
        if seen.contains(&key) && !duplicates.contains(word) {
            duplicates.push(word.clone());
        }
        seen.insert(key);
    }

    let mut valid: Vec<String> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();
    for word in sub_words {
        // The base word itself passes here even though it is never a legal
        // live guess; bulk validation treats it as well-formed.
        if is_legal_formation(word, base_word) || word.eq_ignore_ascii_case(base_word) {
            valid.push(word.clone());
        } else {
            invalid.push(word.clone());
        }
    }

    let mut not_real_words: Vec<String> = Vec::new();
    for word in &valid {
        if oracle.lookup(word).await.is_none() {
            not_real_words.push(word.clone());
        }
    }

    let mut has_3_letter_word = false;
    let mut has_4_letter_word = false;
    let mut has_5_letter_word = false;
    for word in &valid {
        if not_real_words.contains(word) {
            continue;
        }
        match word.len() {
            3 => has_3_letter_word = true,
            4 => has_4_letter_word = true,
            5 => has_5_letter_word = true,
            _ => {}
        }
    }

    ValidationReport {
        valid,
        invalid,
        duplicates,
        not_real_words,
        base_word_valid: !base_word_too_short && !base_word_not_real,
        base_word_too_short,
        base_word_not_real,
        has_3_letter_word,
        has_4_letter_word,
        has_5_letter_word,
    }
}
