//! Level reference data

use serde::{Deserialize, Serialize};

/// One puzzle level: a base word and its sanctioned answers
///
/// Immutable reference data loaded once from the catalog. `index` is the
/// 1-based ordering key shown to the player as "Level N of TOTAL".
/// `base_word` is canonically uppercase in the shipped catalog; custom
/// catalog files are normalized on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub index: u32,
    pub base_word: String,
    pub sub_words: Vec<String>,
}

impl Level {
    /// Create a level, normalizing the base word and answers to uppercase
    #[must_use]
    pub fn new(index: u32, base_word: &str, sub_words: &[&str]) -> Self {
        Self {
            index,
            base_word: base_word.to_ascii_uppercase(),
            sub_words: sub_words
                .iter()
                .map(|word| word.to_ascii_uppercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_case() {
        let level = Level::new(1, "painter", &["Pain", "pane"]);
        assert_eq!(level.base_word, "PAINTER");
        assert_eq!(level.sub_words, vec!["PAIN", "PANE"]);
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let level = Level::new(1, "PAINTER", &["PAIN"]);
        let json = serde_json::to_string(&level).unwrap();
        assert!(json.contains("\"baseWord\""));
        assert!(json.contains("\"subWords\""));

        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }
}
