//! Tiered Cache - A TTL-based response cache
//!
//! Service host that owns the one shared cache store for the process.

use std::net::SocketAddr;

use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiered_cache::{api::create_router, spawn_sweep_task, AppState, Config};

/// Main entry point for the cache service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache store (fails fast on an unusable clock)
/// 4. Start the expired entry sweep, unless disabled
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiered_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tiered cache service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, tiers={:?}, port={}, sweep_interval={}s",
        config.default_ttl, config.tiers, config.server_port, config.sweep_interval
    );

    let state = AppState::from_config(&config)?;
    info!("Cache store initialized");

    let cancel = CancellationToken::new();
    let sweep_handle = if config.sweep_enabled() {
        info!("Background sweep task started");
        Some(spawn_sweep_task(
            state.cache.clone(),
            config.sweep_interval,
            cancel.clone(),
        ))
    } else {
        info!("Background sweep disabled, relying on lazy expiry");
        None
    };

    let app = create_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await?;

    if let Some(handle) = sweep_handle {
        if let Err(e) = handle.await {
            warn!(error = %e, "Sweep task ended abnormally");
        }
    }

    let stats = state.cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        sets = stats.sets,
        hit_rate = %stats.hit_rate,
        "Server shutdown complete"
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then cancels background tasks.
async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cancel.cancel();
    warn!("Background tasks cancelled");
}
