//! Corporate Information API server
//!
//! Loads the policy, procedure and contact catalogs once, then serves
//! read-only lookups over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (listens on 0.0.0.0:8002)
//! cargo run --bin corporate_api
//!
//! # Test endpoints
//! curl http://localhost:8002/health
//! curl http://localhost:8002/api/policies/teletrabajo
//! curl "http://localhost:8002/api/procedures/Solicitar%20Vacaciones"
//! curl http://localhost:8002/api/contacts/rrhh
//! ```

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use corporate_api::{build_router, AppState, Catalogs, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "corporate_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Catalogs are loaded before the listener exists; a missing or broken
    // file leaves that catalog empty.
    let catalogs = Catalogs::load(&config.data_dir);
    let app = build_router(AppState::new(catalogs, config.port));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("Corporate API listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Corporate API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed
            tracing::warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
