//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{Tier, TtlTiers};

/// Request body for the SET operation (PUT /cache/:key)
///
/// # Fields
/// - `value`: Any JSON value to store
/// - `ttl`: Optional TTL in seconds
/// - `tier`: Optional TTL tier, used when `ttl` is absent
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
    /// Optional TTL tier
    #[serde(default)]
    pub tier: Option<Tier>,
}

impl SetRequest {
    /// Resolves the TTL to store with.
    ///
    /// An explicit `ttl` wins over `tier`; None means the store default applies.
    pub fn resolve_ttl(&self, tiers: &TtlTiers) -> Option<u64> {
        self.ttl.or_else(|| self.tier.map(|tier| tiers.ttl_for(tier)))
    }
}
