//! Memoizing oracle wrapper
//!
//! The bulk validator looks up every word of every level, and the HTTP
//! adapter pays a throttle delay per request. Caching results by normalized
//! word keeps repeated words (and re-runs over level ranges) from
//! re-querying the service.

use super::{Definition, DictionaryOracle};
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Wraps any oracle with a lookup cache keyed by the lowercase word
///
/// Not-found results are cached too: a word the service could not confirm
/// stays unconfirmed for the lifetime of this wrapper.
pub struct CachedOracle<O> {
    inner: O,
    cache: Mutex<FxHashMap<String, Option<Definition>>>,
}

impl<O: DictionaryOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of distinct words resolved so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, Option<Definition>>> {
        // The cache holds no invariant worth dying for on a poisoned lock
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: DictionaryOracle> DictionaryOracle for CachedOracle<O> {
    async fn lookup(&self, word: &str) -> Option<Definition> {
        let key = word.to_lowercase();

        if let Some(hit) = self.lock().get(&key).cloned() {
            return hit;
        }

        // The guard is dropped before suspending on the inner lookup
        let result = self.inner.lookup(&key).await;
        self.lock().insert(key, result.clone());
        result
    }
}
