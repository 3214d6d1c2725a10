//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{comparison_key, insights_key, profile_key, CacheStats, CacheStore, TtlTiers};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, KeyResponse, SetRequest,
    SetResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one cache store built by the composition root. The store locks
/// internally, so handlers only share it through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store
    pub cache: Arc<CacheStore>,
    /// TTL per tier for requests that name a tier
    pub tiers: TtlTiers,
}

impl AppState {
    /// Creates a new AppState around an existing store.
    pub fn new(cache: Arc<CacheStore>, tiers: TtlTiers) -> Self {
        Self { cache, tiers }
    }

    /// Creates a new AppState from configuration, using the system clock.
    ///
    /// # Errors
    /// Fails if the system clock is unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = CacheStore::with_system_clock(config.default_ttl)?;
        Ok(Self::new(Arc::new(cache), config.tiers))
    }
}

/// Handler for PUT /cache/:key
///
/// Stores a JSON value under `key`, with TTL taken from `ttl`, then `tier`,
/// then the store default.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    let ttl = req
        .resolve_ttl(&state.tiers)
        .unwrap_or_else(|| state.cache.default_ttl());

    state.cache.set(key.clone(), req.value, Some(ttl))?;

    Ok(Json(SetResponse::new(key, ttl)))
}

/// Handler for GET /cache/:key
///
/// Returns the live value with its remaining TTL, or 404 when absent or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get_with_ttl(&key) {
        Some((value, ttl_remaining_ms)) => {
            Ok(Json(GetResponse::new(key, value, ttl_remaining_ms)))
        }
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache/:key
///
/// Always succeeds; `removed` reports whether the key was present.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.delete(&key);
    Json(DeleteResponse::new(key, removed))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear();
    Json(ClearResponse { removed })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Handler for POST /stats/reset
///
/// Zeroes the counters and returns the fresh statistics.
pub async fn reset_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    state.cache.reset_stats();
    Json(state.cache.stats())
}

/// Handler for GET /keys/profile/:id
pub async fn profile_key_handler(Path(id): Path<String>) -> Json<KeyResponse> {
    Json(KeyResponse {
        key: profile_key(&id),
    })
}

/// Handler for GET /keys/insights/:id
pub async fn insights_key_handler(Path(id): Path<String>) -> Json<KeyResponse> {
    Json(KeyResponse {
        key: insights_key(&id),
    })
}

/// Handler for GET /keys/compare/:a/:b
pub async fn comparison_key_handler(Path((a, b)): Path<(String, String)>) -> Json<KeyResponse> {
    Json(KeyResponse {
        key: comparison_key(&a, &b),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
