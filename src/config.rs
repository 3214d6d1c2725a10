//! Configuration Module
//!
//! Handles loading and managing cache and server configuration from
//! environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{TtlTiers, DEFAULT_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: u64,
    /// TTL per tier in seconds
    pub tiers: TtlTiers,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 = lazy expiry only
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `PROFILE_TTL` - Profile tier TTL in seconds (default: 300)
    /// - `INSIGHTS_TTL` - Insights tier TTL in seconds (default: 86400)
    /// - `COMPARISON_TTL` - Comparison tier TTL in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Expired entry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
            tiers: TtlTiers {
                profile: env_or("PROFILE_TTL", defaults.tiers.profile),
                insights: env_or("INSIGHTS_TTL", defaults.tiers.insights),
                comparison: env_or("COMPARISON_TTL", defaults.tiers.comparison),
            },
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    /// Returns true when the background sweeper should run.
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            tiers: TtlTiers::default(),
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}

/// Parses `name` from the environment, falling back to `default` when unset
/// or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
