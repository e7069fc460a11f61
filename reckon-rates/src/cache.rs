//! Keyed TTL cache with request coalescing

use crate::RATE_TTL;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::model::RateError;

struct Entry<T> {
    data: T,
    fetched_at: Instant,
}

/// Time-bounded cache keyed by request string.
///
/// Each key owns an async slot lock, so concurrent misses for the same key
/// queue behind one fetch instead of fanning out to the source. Expiry is
/// lazy: an entry older than the TTL is replaced on the next lookup, never
/// evicted in the background. Failed fetches leave the slot empty.
pub struct RateCache<T> {
    slots: Mutex<HashMap<String, Arc<tokio::sync::Mutex<Option<Entry<T>>>>>>,
    ttl: Duration,
}

impl<T: Clone> RateCache<T> {
    pub fn new() -> Self {
        Self::with_ttl(RATE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn slot(&self, key: &str) -> Arc<tokio::sync::Mutex<Option<Entry<T>>>> {
        let mut slots = self.slots.lock().unwrap();
        Arc::clone(slots.entry(key.to_string()).or_default())
    }

    /// Return the cached value for `key`, fetching through `fetch` on a miss
    /// or an expired entry. A failed fetch yields `None` and caches nothing.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RateError>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        if let Some(entry) = guard.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                return Some(entry.data.clone());
            }
            debug!(key, "cached rates expired, refetching");
        }

        match fetch().await {
            Ok(data) => {
                *guard = Some(Entry {
                    data: data.clone(),
                    fetched_at: Instant::now(),
                });
                Some(data)
            }
            Err(err) => {
                debug!(key, error = %err, "rate fetch failed");
                *guard = None;
                None
            }
        }
    }

    /// Number of keys holding a value, counting expired entries.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap();
        slots
            .values()
            .filter(|slot| slot.try_lock().map(|g| g.is_some()).unwrap_or(true))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for RateCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
