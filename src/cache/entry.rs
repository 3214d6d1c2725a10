//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
    /// Identity stamp assigned by the store on every set
    pub generation: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry written at `now_ms`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now_ms` - Insertion time in Unix milliseconds
    /// * `ttl_seconds` - Optional TTL in seconds, None = never expires
    /// * `generation` - Identity stamp from the owning store
    pub fn new(value: V, now_ms: u64, ttl_seconds: Option<u64>, generation: u64) -> Self {
        let expires_at = ttl_seconds.map(|ttl| now_ms.saturating_add(ttl.saturating_mul(1000)));

        Self {
            value,
            created_at: now_ms,
            expires_at,
            generation,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is expired once `now_ms >= expires_at`, so a TTL of zero is
    /// expired on the very next read.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired (TTL elapsed)
    /// - `Some(remaining_ms)` if the entry has TTL and hasn't expired
    /// - `None` if the entry has no TTL (never expires)
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.expires_at.map(|expires| expires.saturating_sub(now_ms))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value", NOW, None, 1);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, NOW);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(u64::MAX));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("test_value", NOW, Some(300), 1);

        assert_eq!(entry.expires_at, Some(NOW + 300_000));
        assert!(!entry.is_expired_at(NOW));
        assert!(!entry.is_expired_at(NOW + 299_999));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test", NOW, Some(1), 1);

        // Expired exactly at the expiry instant, not a millisecond later
        assert!(!entry.is_expired_at(NOW + 999));
        assert!(entry.is_expired_at(NOW + 1_000));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new("test", NOW, Some(0), 1);
        assert!(entry.is_expired_at(NOW));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = CacheEntry::new("test", NOW, Some(u64::MAX), 1);
        assert_eq!(entry.expires_at, Some(u64::MAX));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("test", NOW, Some(10), 1);

        assert_eq!(entry.ttl_remaining_ms(NOW), Some(10_000));
        assert_eq!(entry.ttl_remaining_ms(NOW + 4_000), Some(6_000));
        assert_eq!(entry.ttl_remaining_ms(NOW + 20_000), Some(0));
    }

    #[test]
    fn test_ttl_remaining_no_expiration() {
        let entry = CacheEntry::new("test", NOW, None, 1);
        assert!(entry.ttl_remaining_ms(NOW).is_none());
    }
}
