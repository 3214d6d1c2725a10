//! Cache Store Module
//!
//! Main cache engine: a HashMap of TTL entries behind a read/write lock,
//! lazy expiry on read, and atomic hit/miss/set accounting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, StatsCounters, SystemClock, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

/// TTL in seconds applied when a caller does not pass one.
pub const DEFAULT_TTL_SECS: u64 = 300;

// == Cache Store ==
/// Thread-safe TTL cache.
///
/// Share one store between consumers with `Arc<CacheStore<V>>`; all
/// operations take `&self`.
#[derive(Debug)]
pub struct CacheStore<V = Value> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Performance statistics
    stats: StatsCounters,
    /// Source of entry generations
    next_generation: AtomicU64,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: u64,
    /// Time source for expiry
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `default_ttl` - Default TTL in seconds for entries without explicit TTL
    /// * `clock` - Time source used for every expiry decision
    pub fn new(default_ttl: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsCounters::new(),
            next_generation: AtomicU64::new(1),
            default_ttl,
            clock,
        }
    }

    /// Creates an empty store driven by the system clock.
    ///
    /// # Errors
    /// Fails with `CacheError::ClockUnavailable` if the system time is unusable.
    pub fn with_system_clock(default_ttl: u64) -> Result<Self> {
        Ok(Self::new(default_ttl, Arc::new(SystemClock::new()?)))
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Returns `None` when the key was never set, was deleted, or has expired.
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_with_ttl(key).map(|(value, _)| value)
    }

    // == Get With TTL ==
    /// Like [`CacheStore::get`], also returning the remaining TTL in
    /// milliseconds (`None` for entries without expiry).
    ///
    /// Accounting and lazy expiry are identical to `get`.
    pub fn get_with_ttl(&self, key: &str) -> Option<(V, Option<u64>)> {
        let now = self.clock.now_ms();

        let stale_generation = {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    self.stats.record_hit();
                    return Some((entry.value.clone(), entry.ttl_remaining_ms(now)));
                }
                Some(entry) => entry.generation,
            }
        };

        // The read lock is released here, so a fresh set may have replaced
        // the entry. Only the generation we saw expire is removed.
        if self.remove_generation(key, stale_generation) {
            self.stats.record_evictions(1);
            debug!(key, "Removed expired entry on read");
        }
        self.stats.record_expired_miss();
        None
    }

    // == Set ==
    /// Stores a value, overwriting any existing entry for `key`.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None, 0 expires immediately)
    ///
    /// # Errors
    /// `CacheError::InvalidKey` for an empty key or one over `MAX_KEY_LENGTH` bytes.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<u64>) -> Result<()> {
        self.insert(key.into(), value, Some(ttl.unwrap_or(self.default_ttl)))
    }

    // == Set Without Expiry ==
    /// Stores a value that never expires on its own.
    pub fn set_without_expiry(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.insert(key.into(), value, None)
    }

    fn insert(&self, key: String, value: V, ttl: Option<u64>) -> Result<()> {
        validate_key(&key)?;

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl, generation);

        self.entries.write().insert(key, entry);
        self.stats.record_set();
        Ok(())
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether an entry was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Statistics are kept.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Reset Stats ==
    /// Zeroes hit, miss, set and eviction counters. Entries are kept.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write();

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();

        self.stats.record_evictions(removed as u64);
        removed
    }

    // == Length ==
    /// Returns the number of entries physically stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Default TTL in seconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Removes `key` only if it still holds the entry stamped `generation`.
    fn remove_generation(&self, key: &str, generation: u64) -> bool {
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(entry) if entry.generation == generation => {
                entries.remove(key);
                true
            }
            _ => false,
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
