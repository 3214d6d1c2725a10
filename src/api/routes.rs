//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, comparison_key_handler, delete_handler, get_handler, health_handler,
    insights_key_handler, profile_key_handler, reset_stats_handler, set_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:key` - Retrieve a value by key
/// - `PUT /cache/:key` - Store a value with optional TTL or tier
/// - `DELETE /cache/:key` - Delete a key
/// - `DELETE /cache` - Remove every entry
/// - `GET /stats` - Get cache statistics
/// - `POST /stats/reset` - Reset cache statistics
/// - `GET /keys/profile/:id`, `/keys/insights/:id`, `/keys/compare/:a/:b` - Derive keys
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache", delete(clear_handler))
        .route(
            "/cache/:key",
            get(get_handler).put(set_handler).delete(delete_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/stats/reset", post(reset_stats_handler))
        .route("/keys/profile/:id", get(profile_key_handler))
        .route("/keys/insights/:id", get(insights_key_handler))
        .route("/keys/compare/:a/:b", get(comparison_key_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
