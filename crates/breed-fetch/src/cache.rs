//! Read-through cache in front of any [`BreedSource`].
//!
//! Lookups are keyed by the trimmed, ASCII-lowercased breed name, so
//! `"  AKITA "`, `"akita"` and `"Akita"` share one entry. Entries live as long
//! as the cache itself: there is no expiry, eviction or size bound, and only
//! successful lookups are stored.
//!
//! Hits return the very [`SubBreeds`] handle the wrapped source produced.
//! Nothing is copied; because the list behind the handle is immutable, a
//! caller cannot change what later hits observe.

use crate::error::Result;
use crate::source::{normalize_breed, BreedSource, SubBreeds};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Caching decorator for a [`BreedSource`].
///
/// The wrapped source is called with the caller's original argument, never
/// with the cache key. A miss counts as a call even when the wrapped source
/// fails, and failures are never cached, so the next lookup tries again.
///
/// The entry map is not locked while the wrapped source runs. Concurrent
/// misses on one key may each reach the wrapped source; the last result
/// stored wins.
pub struct CachingBreedSource<S> {
    inner: S,
    entries: Mutex<HashMap<String, SubBreeds>>,
    calls_made: AtomicUsize,
}

impl<S: BreedSource> CachingBreedSource<S> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
            calls_made: AtomicUsize::new(0),
        }
    }

    /// Number of times the wrapped source has been called (cache misses).
    pub fn calls_made(&self) -> usize {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Number of breeds currently cached.
    pub fn cached_breeds(&self) -> usize {
        self.entries().len()
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, SubBreeds>> {
        // A panic elsewhere cannot leave the map half-updated.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: BreedSource> BreedSource for CachingBreedSource<S> {
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds> {
        let key = breed.map(normalize_breed);

        if let Some(key) = key.as_deref() {
            if let Some(cached) = self.entries().get(key) {
                debug!("Sub-breed cache hit for {:?}", key);
                return Ok(SubBreeds::clone(cached));
            }
        }

        let calls = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Sub-breed cache miss for {:?} (call #{})", key, calls);

        let sub_breeds = self.inner.get_sub_breeds(breed)?;

        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.entries().insert(key, SubBreeds::clone(&sub_breeds));
        }
        Ok(sub_breeds)
    }
}
