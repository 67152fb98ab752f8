//! Structural word legality
//!
//! Decides whether a candidate string is a legal formation from a base word
//! under the game rules. Purely structural: dictionary realness is the
//! oracle's concern, not this module's.

use super::multiset::LetterMultiset;

/// Check whether a candidate can be legally formed from a base word
///
/// A candidate is legal iff:
/// - it is not the base word itself (case-insensitively);
/// - both strings contain only ASCII letters A-Z/a-z (hyphens, digits,
///   punctuation and diacritics all disqualify);
/// - its letter multiset fits inside the base word's letter multiset.
///
/// No minimum length is enforced; the empty string is a legal formation and
/// gets rejected downstream by the dictionary instead.
///
/// # Examples
/// ```
/// use subwords::core::is_legal_formation;
///
/// assert!(is_legal_formation("HELL", "HELLO"));
/// assert!(!is_legal_formation("HELLO", "HELLO")); // base word itself
/// assert!(!is_legal_formation("LLL", "HELLO"));   // only two Ls available
/// ```
#[must_use]
pub fn is_legal_formation(candidate: &str, base_word: &str) -> bool {
    if candidate.eq_ignore_ascii_case(base_word) {
        return false;
    }

    if !is_ascii_letters(candidate) || !is_ascii_letters(base_word) {
        return false;
    }

    LetterMultiset::from_word(candidate).is_subset_of(&LetterMultiset::from_word(base_word))
}

fn is_ascii_letters(word: &str) -> bool {
    word.chars().all(|ch| ch.is_ascii_alphabetic())
}
