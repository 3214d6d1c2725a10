//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, sets and
//! expiry evictions.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// == Stats Counters ==
/// Live counters owned by a store.
///
/// Counters are atomics so a hit can be recorded while only holding the
/// entry map's read lock.
#[derive(Debug, Default)]
pub struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    expired_misses: AtomicU64,
    evictions: AtomicU64,
}

impl StatsCounters {
    // == Constructor ==
    /// Creates counters all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Records a miss for a key that was never stored (or already removed).
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Expired Miss ==
    /// Records a miss caused by reading an expired entry.
    ///
    /// Counts towards `misses` as well, so callers cannot tell the two apart
    /// but diagnostics can.
    pub fn record_expired_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        self.expired_misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Set ==
    pub fn record_set(&self) {
        self.sets.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Evictions ==
    /// Adds `count` entries removed because they expired.
    pub fn record_evictions(&self, count: u64) {
        self.evictions.fetch_add(count, Ordering::Relaxed);
    }

    // == Reset ==
    /// Zeroes every counter.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.sets.store(0, Ordering::Relaxed);
        self.expired_misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the counters together with the current entry count.
    pub fn snapshot(&self, size: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        CacheStats {
            hits,
            misses,
            sets: self.sets.load(Ordering::Relaxed),
            hit_rate: format_hit_rate(hits, misses),
            size,
            expired_misses: self.expired_misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of gets that returned a live value
    pub hits: u64,
    /// Number of gets that returned nothing (including expired reads)
    pub misses: u64,
    /// Number of successful sets, overwrites included
    pub sets: u64,
    /// Hit percentage formatted to two decimals, e.g. "50.00%"
    pub hit_rate: String,
    /// Entries physically stored, including expired ones not yet read
    pub size: usize,
    /// Subset of `misses` caused by an expired entry
    pub expired_misses: u64,
    /// Entries removed because they expired
    pub evictions: u64,
}

/// Returns hits / (hits + misses), or 0.0 if no gets have been made.
fn hit_ratio(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

fn format_hit_rate(hits: u64, misses: u64) -> String {
    format!("{:.2}%", hit_ratio(hits, misses) * 100.0)
}
