//! HTTP dictionary client
//!
//! Client for the free dictionary API wire format: a JSON array of entries,
//! each carrying `meanings`, each of those carrying `definitions` of
//! `{"definition": ...}` objects. A fixed pause precedes every request;
//! the public service has no auth and an implicit rate limit.

use super::{Definition, DictionaryOracle};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);

/// Dictionary oracle backed by an HTTP JSON API
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: reqwest::Client,
    base_url: String,
    throttle: Duration,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    definition: String,
}

impl HttpDictionary {
    /// Client against the default public dictionary service
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client against an alternate endpoint (trailing slash not expected)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            throttle: DEFAULT_THROTTLE,
        }
    }

    /// Override the pre-request pause (zero disables it)
    #[must_use]
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    async fn fetch_entries(&self, word: &str) -> Option<Vec<Entry>> {
        let url = format!("{}/{word}", self.base_url);
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json().await.ok()
    }
}

impl Default for HttpDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryOracle for HttpDictionary {
    async fn lookup(&self, word: &str) -> Option<Definition> {
        if !self.throttle.is_zero() {
            tokio::time::sleep(self.throttle).await;
        }
        let word = word.to_lowercase();
        let entries = self.fetch_entries(&word).await?;
        definition_from_entries(word, &entries)
    }
}

/// Extract up to the first two definitions of the first entry's first meaning
fn definition_from_entries(word: String, entries: &[Entry]) -> Option<Definition> {
    let meaning = entries.first()?.meanings.first()?;
    let definitions: Vec<String> = meaning
        .definitions
        .iter()
        .take(2)
        .map(|sense| sense.definition.clone())
        .collect();

    if definitions.is_empty() {
        None
    } else {
        Some(Definition { word, definitions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries_from(value: serde_json::Value) -> Vec<Entry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_first_two_definitions() {
        let entries = entries_from(json!([{
            "word": "hell",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "first sense"},
                    {"definition": "second sense"},
                    {"definition": "third sense"}
                ]
            }]
        }]));

        let result = definition_from_entries("hell".to_string(), &entries).unwrap();
        assert_eq!(result.word, "hell");
        assert_eq!(result.definitions, vec!["first sense", "second sense"]);
    }

    #[test]
    fn only_first_entry_and_meaning_consulted() {
        let entries = entries_from(json!([
            {"meanings": [
                {"definitions": [{"definition": "from first meaning"}]},
                {"definitions": [{"definition": "from second meaning"}]}
            ]},
            {"meanings": [{"definitions": [{"definition": "from second entry"}]}]}
        ]));

        let result = definition_from_entries("word".to_string(), &entries).unwrap();
        assert_eq!(result.definitions, vec!["from first meaning"]);
    }

    #[test]
    fn empty_entries_yield_none() {
        assert!(definition_from_entries("word".to_string(), &[]).is_none());
    }

    #[test]
    fn missing_meanings_yield_none() {
        let entries = entries_from(json!([{"word": "x"}]));
        assert!(definition_from_entries("x".to_string(), &entries).is_none());
    }

    #[test]
    fn empty_definitions_yield_none() {
        let entries = entries_from(json!([{"meanings": [{"definitions": []}]}]));
        assert!(definition_from_entries("x".to_string(), &entries).is_none());
    }

    #[test]
    fn unexpected_body_fails_to_parse() {
        let parsed: Result<Vec<Entry>, _> =
            serde_json::from_value(json!({"title": "No Definitions Found"}));
        assert!(parsed.is_err());
    }
}
