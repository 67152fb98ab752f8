//! Level catalog
//!
//! Read access to the shipped level set, plus loading and maintenance of
//! custom catalog files.

mod embedded;
pub mod loader;

pub use embedded::LEVEL_COUNT;

use crate::core::Level;

/// All built-in levels, in play order
///
/// Indices are 1-based and contiguous, matching the "Level N of TOTAL"
/// display.
#[must_use]
pub fn levels() -> Vec<Level> {
    embedded::RAW_LEVELS
        .iter()
        .enumerate()
        .map(|(i, (base_word, sub_words))| Level::new((i + 1) as u32, base_word, sub_words))
        .collect()
}

/// Look up a level by its 1-based index
#[must_use]
pub fn level_by_index(levels: &[Level], index: u32) -> Option<&Level> {
    levels.iter().find(|level| level.index == index)
}

/// Order a level's answers by length, then alphabetically
pub fn sort_sub_words(sub_words: &mut [String]) {
    sub_words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}
