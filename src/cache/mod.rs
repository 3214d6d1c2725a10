//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, lazy eviction on read,
//! namespaced key derivation and TTL tiers.

mod clock;
mod entry;
mod keys;
mod stats;
mod store;
mod tier;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use keys::{comparison_key, insights_key, profile_key};
pub use stats::{CacheStats, StatsCounters};
pub use store::{CacheStore, DEFAULT_TTL_SECS};
pub use tier::{Tier, TtlTiers};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
