//! Dictionary oracle
//!
//! Wraps the external dictionary lookup service behind a found/not-found
//! decision. Every failure mode - network error, non-success status,
//! unparsable body, no extractable definitions - collapses to `None`:
//! callers cannot distinguish "the service is down" from "this is not a
//! word", and never see a transport error.

mod cache;
mod http;

pub use cache::CachedOracle;
pub use http::HttpDictionary;

use std::future::Future;

/// A dictionary entry for a confirmed-real word
///
/// Carries at most the first two sense definitions of the word's first
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    pub definitions: Vec<String>,
}

/// The external word-realness authority
///
/// One lookup per call; implementations normalize the word to lowercase
/// before querying. `None` means "not confirmed real", whatever the cause.
pub trait DictionaryOracle {
    /// Look up a word, returning its definition when the word is confirmed
    /// real and `None` otherwise. Never returns an error.
    fn lookup(&self, word: &str) -> impl Future<Output = Option<Definition>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Definition, DictionaryOracle};
    use std::cell::RefCell;

    /// Oracle backed by a fixed word set; no network
    ///
    /// Records every lookup so tests can assert on call counts. An empty
    /// word set models a total transport failure: every lookup fails.
    pub struct FixedOracle {
        known: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FixedOracle {
        pub fn knowing(words: &[&str]) -> Self {
            Self {
                known: words.iter().map(|w| w.to_lowercase()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Every lookup fails, as if the service were unreachable
        pub fn unreachable() -> Self {
            Self::knowing(&[])
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl DictionaryOracle for FixedOracle {
        async fn lookup(&self, word: &str) -> Option<Definition> {
            let key = word.to_lowercase();
            self.calls.borrow_mut().push(key.clone());
            if self.known.contains(&key) {
                Some(Definition {
                    word: word.to_string(),
                    definitions: vec![format!("test definition of {key}")],
                })
            } else {
                None
            }
        }
    }
}
