//! Game session state machine
//!
//! Tracks one level of play: the remaining letter supply, the word being
//! typed, the guessed-word set, the running score, and the
//! playing-to-complete transition.
//!
//! All mutating operations take `&mut self`, which serializes them: a second
//! `submit` cannot start while one is suspended on the dictionary lookup,
//! and a level switch cannot interleave with a pending submit. Every
//! operation is total; the only suspension point is `submit`'s lookup, whose
//! failures the oracle has already absorbed into "not found".

use crate::core::{Level, LetterMultiset, is_legal_formation};
use crate::dictionary::DictionaryOracle;
use std::fmt;

/// Points for finding one of the level's designated answers
pub const TARGET_POINTS: u32 = 100;

/// Points for a dictionary-confirmed word outside the answer key
pub const BONUS_POINTS: u32 = 200;

/// Player-facing outcome of a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The guess is already in the guessed-word set
    AlreadyFound,
    /// The guess is not a legal formation from the base word
    NotValidWord,
    /// The dictionary could not confirm the guess as a real word
    NotRealWord,
    /// Confirmed real; points were awarded
    Correct { word: String, points: u32 },
    /// A clue revealed an unfound answer directly
    ClueRevealed { word: String },
}

impl Feedback {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::ClueRevealed { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFound => write!(f, "You already found this word!"),
            Self::NotValidWord => write!(f, "Not a valid word. Try again!"),
            Self::NotRealWord => write!(f, "Not a valid English word. Try again!"),
            Self::Correct { points, .. } => write!(f, "Correct word! +{points} points!"),
            Self::ClueRevealed { word } => write!(f, "Clue revealed: {word}"),
        }
    }
}

/// One level's interactive play state
///
/// Invariants, maintained by every operation:
/// - `available_letters` never exceeds `letter_budget` pointwise;
/// - for every letter, `available_letters + occurrences in current_input ==
///   letter_budget`.
#[derive(Debug, Clone)]
pub struct GameSession {
    base_word: String,
    target_words: Vec<String>,
    letter_budget: LetterMultiset,
    available_letters: LetterMultiset,
    current_input: String,
    guessed_words: Vec<String>,
    score: u32,
    complete: bool,
}

impl GameSession {
    /// Fresh session for a level: zero score, nothing guessed
    #[must_use]
    pub fn new(level: &Level) -> Self {
        Self::with_progress(level, 0, Vec::new())
    }

    /// Session resuming carried-over score and guessed words
    ///
    /// Score and guessed words are owned by the caller across levels; they
    /// are reset only by an explicit game reset at that layer.
    #[must_use]
    pub fn with_progress(level: &Level, score: u32, guessed_words: Vec<String>) -> Self {
        let base_word = level.base_word.to_ascii_uppercase();
        let letter_budget = LetterMultiset::from_word(&base_word);
        Self {
            available_letters: letter_budget.clone(),
            letter_budget,
            base_word,
            target_words: level
                .sub_words
                .iter()
                .map(|word| word.to_ascii_uppercase())
                .collect(),
            current_input: String::new(),
            guessed_words,
            score,
            complete: false,
        }
    }

    /// Swap in a new level, keeping score and guessed words untouched
    ///
    /// Resets the letter supply, clears the typed input, and returns the
    /// session to the playing state.
    pub fn load_level(&mut self, level: &Level) {
        let carried_score = self.score;
        let carried_words = std::mem::take(&mut self.guessed_words);
        *self = Self::with_progress(level, carried_score, carried_words);
    }

    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    #[must_use]
    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    #[must_use]
    pub fn letter_budget(&self) -> &LetterMultiset {
        &self.letter_budget
    }

    #[must_use]
    pub fn available_letters(&self) -> &LetterMultiset {
        &self.available_letters
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Guessed words in insertion order (display order is the caller's)
    #[must_use]
    pub fn guessed_words(&self) -> &[String] {
        &self.guessed_words
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Targets not yet guessed, in list order
    pub fn unfound_targets(&self) -> impl Iterator<Item = &str> {
        self.target_words
            .iter()
            .filter(|word| !self.guessed_words.contains(word))
            .map(String::as_str)
    }

    /// Type one letter
    ///
    /// No-op when the level is complete or the letter has no remaining
    /// supply.
    pub fn click_letter(&mut self, letter: char) {
        if self.complete {
            return;
        }
        if self.available_letters.take(letter) {
            self.current_input.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last typed letter, returning it to the supply
    pub fn backspace(&mut self) {
        if let Some(letter) = self.current_input.pop() {
            self.available_letters.add(letter);
        }
    }

    /// Wipe the typed input and restore the full letter supply
    pub fn clear(&mut self) {
        self.current_input.clear();
        self.available_letters = self.letter_budget.clone();
    }

    /// Submit the typed input as a guess
    ///
    /// Resolution order: already-guessed and structural legality are checked
    /// synchronously (no network); only a fresh, legal guess reaches the
    /// oracle. The input is reset on every outcome. Returns `None` without
    /// doing anything when the level is already complete.
    pub async fn submit<O: DictionaryOracle>(&mut self, oracle: &O) -> Option<Feedback> {
        if self.complete {
            return None;
        }

        let guess = self.current_input.to_ascii_uppercase();

        if self.guessed_words.contains(&guess) {
            self.clear();
            return Some(Feedback::AlreadyFound);
        }

        if !is_legal_formation(&guess, &self.base_word) {
            self.clear();
            return Some(Feedback::NotValidWord);
        }

        let confirmed = oracle.lookup(&guess).await.is_some();
        self.clear();

        if !confirmed {
            return Some(Feedback::NotRealWord);
        }

        let points = if self.target_words.contains(&guess) {
            TARGET_POINTS
        } else {
            BONUS_POINTS
        };
        self.score += points;
        self.guessed_words.push(guess.clone());
        self.refresh_completion();

        Some(Feedback::Correct { word: guess, points })
    }

    /// Reveal the first unfound target directly into the guessed set
    ///
    /// Clues are trusted: no legality check, no oracle call, no points.
    /// Returns `None` when every target is already found.
    pub fn request_clue(&mut self) -> Option<Feedback> {
        let word = self
            .target_words
            .iter()
            .find(|word| !self.guessed_words.contains(*word))?
            .clone();

        self.guessed_words.push(word.clone());
        self.refresh_completion();
        Some(Feedback::ClueRevealed { word })
    }

    fn refresh_completion(&mut self) {
        if self
            .target_words
            .iter()
            .all(|word| self.guessed_words.contains(word))
        {
            self.complete = true;
        }
    }
}
