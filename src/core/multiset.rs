//! Letter multiset arithmetic
//!
//! A letter multiset counts how many times each letter occurs in a word.
//! It is the basis of the "can this word be spelled from these letters"
//! check and of the per-level letter supply the player draws from.

use rustc_hash::FxHashMap;

/// A multiset of letters keyed by their ASCII-uppercase form.
///
/// Letters are case-normalized on every insertion and lookup, so
/// `from_word("hello")` and `from_word("HELLO")` are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<char, u32>,
}

impl LetterMultiset {
    /// Tally the letters of a word
    ///
    /// Accepts any input; an empty word yields an empty multiset.
    ///
    /// # Examples
    /// ```
    /// use subwords::core::LetterMultiset;
    ///
    /// let letters = LetterMultiset::from_word("HELLO");
    /// assert_eq!(letters.count('L'), 2);
    /// assert_eq!(letters.count('l'), 2);
    /// assert_eq!(letters.count('Z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch.to_ascii_uppercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many of this letter remain (0 if absent)
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// True iff every letter in `self` is covered by `supply`
    ///
    /// Pointwise `count_self(letter) <= count_supply(letter)`, with letters
    /// absent from the supply counting as zero.
    #[must_use]
    pub fn is_subset_of(&self, supply: &Self) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &count)| supply.count(letter) >= count)
    }

    /// Return one occurrence of a letter to the multiset
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
    }

    /// Consume one occurrence of a letter
    ///
    /// Returns `false` without mutating when none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter.to_ascii_uppercase()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total number of letters counting multiplicity
    #[must_use]
    pub fn len(&self) -> u32 {
        self.counts.values().sum()
    }

    /// True iff no letters remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    /// Iterate over `(letter, count)` pairs with a nonzero count
    ///
    /// Order is unspecified; callers wanting stable display order should sort.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_tallies_letters() {
        let letters = LetterMultiset::from_word("HELLO");
        assert_eq!(letters.count('H'), 1);
        assert_eq!(letters.count('E'), 1);
        assert_eq!(letters.count('L'), 2);
        assert_eq!(letters.count('O'), 1);
    }

    #[test]
    fn from_word_empty() {
        let letters = LetterMultiset::from_word("");
        assert!(letters.is_empty());
        assert_eq!(letters.len(), 0);
    }

    #[test]
    fn from_word_case_normalized() {
        assert_eq!(
            LetterMultiset::from_word("Hello"),
            LetterMultiset::from_word("HELLO")
        );
        let letters = LetterMultiset::from_word("hello");
        assert_eq!(letters.count('L'), 2);
        assert_eq!(letters.count('l'), 2);
    }

    #[test]
    fn subset_of_itself() {
        let letters = LetterMultiset::from_word("PAINTER");
        assert!(letters.is_subset_of(&letters));
    }

    #[test]
    fn subset_respects_multiplicity() {
        let supply = LetterMultiset::from_word("HELLO");
        assert!(LetterMultiset::from_word("HELL").is_subset_of(&supply));
        assert!(LetterMultiset::from_word("LL").is_subset_of(&supply));
        // Three Ls is one more than HELLO provides
        assert!(!LetterMultiset::from_word("LLL").is_subset_of(&supply));
    }

    #[test]
    fn subset_missing_letter() {
        let supply = LetterMultiset::from_word("HELLO");
        assert!(!LetterMultiset::from_word("HELP").is_subset_of(&supply));
    }

    #[test]
    fn empty_is_subset_of_anything() {
        let empty = LetterMultiset::default();
        assert!(empty.is_subset_of(&LetterMultiset::from_word("HELLO")));
        assert!(empty.is_subset_of(&empty));
    }

    #[test]
    fn take_consumes_and_add_restores() {
        let mut letters = LetterMultiset::from_word("HELLO");
        assert!(letters.take('L'));
        assert_eq!(letters.count('L'), 1);
        assert!(letters.take('l'));
        assert_eq!(letters.count('L'), 0);
        assert!(!letters.take('L'));

        letters.add('L');
        assert_eq!(letters.count('L'), 1);
    }

    #[test]
    fn take_absent_letter_fails() {
        let mut letters = LetterMultiset::from_word("HELLO");
        assert!(!letters.take('Z'));
        assert_eq!(letters, LetterMultiset::from_word("HELLO"));
    }

    #[test]
    fn len_counts_multiplicity() {
        assert_eq!(LetterMultiset::from_word("HELLO").len(), 5);
        let mut letters = LetterMultiset::from_word("HELLO");
        letters.take('L');
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn iter_skips_exhausted_letters() {
        let mut letters = LetterMultiset::from_word("HI");
        letters.take('H');
        let remaining: Vec<(char, u32)> = letters.iter().collect();
        assert_eq!(remaining, vec![('I', 1)]);
    }
}
