//! TTL Tier Module
//!
//! Groups cache entries by how volatile their source data is. The store
//! never looks at tiers; callers use them to pick a TTL.

use serde::{Deserialize, Serialize};

/// Short tier: upstream profile facts change often (5 minutes).
pub const PROFILE_TTL_SECS: u64 = 300;

/// Long tier: generated insight text is expensive to recompute (24 hours).
pub const INSIGHTS_TTL_SECS: u64 = 24 * 60 * 60;

/// Long tier: comparison verdicts are derived from slow-moving inputs (24 hours).
pub const COMPARISON_TTL_SECS: u64 = 24 * 60 * 60;

// == Tier ==
/// TTL class of a cached artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Upstream profile data
    Profile,
    /// Generated insight text
    Insights,
    /// Head-to-head comparison verdicts
    Comparison,
}

// == TTL Tiers ==
/// TTL in seconds for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlTiers {
    pub profile: u64,
    pub insights: u64,
    pub comparison: u64,
}

impl TtlTiers {
    /// Returns the TTL in seconds configured for `tier`.
    pub fn ttl_for(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Profile => self.profile,
            Tier::Insights => self.insights,
            Tier::Comparison => self.comparison,
        }
    }
}

impl Default for TtlTiers {
    fn default() -> Self {
        Self {
            profile: PROFILE_TTL_SECS,
            insights: INSIGHTS_TTL_SECS,
            comparison: COMPARISON_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let tiers = TtlTiers::default();
        assert_eq!(tiers.ttl_for(Tier::Profile), 300);
        assert_eq!(tiers.ttl_for(Tier::Insights), 86_400);
        assert_eq!(tiers.ttl_for(Tier::Comparison), 86_400);
    }

    #[test]
    fn test_derived_tiers_outlive_profile_tier() {
        let tiers = TtlTiers::default();
        assert!(tiers.ttl_for(Tier::Insights) > tiers.ttl_for(Tier::Profile));
        assert!(tiers.ttl_for(Tier::Comparison) > tiers.ttl_for(Tier::Profile));
    }

    #[test]
    fn test_tier_deserialize() {
        let tier: Tier = serde_json::from_str(r#""insights""#).unwrap();
        assert_eq!(tier, Tier::Insights);
    }
}
