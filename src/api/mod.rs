//! API Module
//!
//! HTTP handlers and routing that expose the shared cache store.
//!
//! # Endpoints
//! - `GET|PUT|DELETE /cache/:key` - Read, store or delete one entry
//! - `DELETE /cache` - Clear all entries
//! - `GET /stats`, `POST /stats/reset` - Cache statistics
//! - `GET /keys/...` - Namespaced key derivation
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
