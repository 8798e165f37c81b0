//! Inventory Returns API
//!
//! Exposes products, their SKUs, and returned items over a small JSON API
//! backed by PostgreSQL. The database handle is created once at startup,
//! shared by every request, and closed when the server shuts down.

mod config;
mod db;
mod error;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::db::{create_pool, PgStore};
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting inventory returns API...");

    let settings = Settings::load()?;
    info!(
        "Configuration loaded (database {}@{}:{}, pool size {})",
        settings.database.database,
        settings.database.host,
        settings.database.port,
        settings.database.max_pool_size
    );

    let pool = create_pool(&settings.database)
        .map_err(|e| anyhow::anyhow!("Failed to create pool: {}", e))?;
    let store = Arc::new(PgStore::new(pool));

    store
        .verify_connection()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to verify database connection: {}", e))?;
    info!("Connected to the database");

    if let Err(e) = store.ensure_schema().await {
        warn!("Warning creating tables: {}", e);
    }

    let state = Arc::new(AppState::new(store.clone()));
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));
    info!("Server listening on http://{}", addr);
    info!("   GET  /products                     - List products");
    info!("   POST /products                     - Add or update a product");
    info!("   PUT  /products/{{idBarang}}          - Update a product");
    info!("   GET  /products/{{idBarang}}/skus     - List SKUs of a product");
    info!("   POST /products/{{idBarang}}/skus     - Add or update a SKU");
    info!("   GET  /return-items                 - List return items");
    info!("   POST /return-items                 - Record a return item");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close();
    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory_returns_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        },
    }
}
