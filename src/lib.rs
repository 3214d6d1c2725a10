//! Tiered Cache - A TTL-based response cache
//!
//! Memoizes expensive upstream results behind namespaced keys, expires them
//! lazily on read, and keeps hit/miss/set accounting.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStats, CacheStore};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
