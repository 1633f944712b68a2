//! Small string-keyed TTL cache for expensive lookups.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Default expiry for cached entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

struct Entry<T> {
    value: T,
    expires_at: Option<Instant>,
}

impl<T> Entry<T> {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Mutex-guarded map of values with per-entry expiry.
///
/// Expired entries are dropped by the read that touches them; there is
/// no background sweeper.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Clone> TtlCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key; expired entries count as misses and are removed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.lock();
        if entries.get(key).is_some_and(Entry::is_expired) {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store a value under the default TTL and hand it back.
    pub fn set(&self, key: impl Into<String>, value: T) -> T {
        self.set_with_ttl(key, value, Some(DEFAULT_TTL))
    }

    /// Store a value with an explicit TTL; `None` never expires.
    ///
    /// Existing entries are overwritten unconditionally.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: T, ttl: Option<Duration>) -> T {
        let expires_at = ttl.and_then(|ttl| Instant::now().checked_add(ttl));
        self.lock().insert(
            key.into(),
            Entry {
                value: value.clone(),
                expires_at,
            },
        );
        value
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_miss_on_unknown_key() {
        let cache: TtlCache<String> = TtlCache::new();

        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn should_return_stored_value_before_expiry() {
        let cache = TtlCache::new();

        let stored = cache.set("answer", 42);

        assert_eq!(stored, 42);
        assert_eq!(cache.get("answer"), Some(42));
    }

    #[test]
    fn should_drop_value_after_its_ttl() {
        let cache = TtlCache::new();
        cache.set_with_ttl("answer", 42, Some(Duration::from_millis(5)));

        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.get("answer"), None);
    }

    #[test]
    fn should_keep_value_stored_without_ttl() {
        let cache = TtlCache::new();
        cache.set_with_ttl("answer", 42, None);

        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(cache.get("answer"), Some(42));
    }

    #[test]
    fn should_overwrite_existing_entry() {
        let cache = TtlCache::new();
        cache.set("answer", 1);

        cache.set("answer", 2);

        assert_eq!(cache.get("answer"), Some(2));
    }
}
