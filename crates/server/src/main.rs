//! JCN dashboard API server.
//!
//! Starts the axum server that exposes the fundamentals, BPSP and portfolio
//! procedures on top of the MotherDuck analytical store.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use jcn_dashboard_core::models::settings::StoreSettings;
use jcn_dashboard_core::Dashboard;
use jcn_dashboard_server::config::ServerConfig;
use jcn_dashboard_server::routes::create_api_router;
use jcn_dashboard_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "jcn_dashboard_server=info,jcn_dashboard_core=info,tower_http=debug".into()
            }),
        )
        .init();

    info!("Starting JCN dashboard API server...");

    let store_settings = StoreSettings::from_env();
    if !store_settings.has_token() {
        // Every store-backed procedure will answer with a failure envelope.
        warn!("MOTHERDUCK_TOKEN is not set; store queries will fail");
    }
    info!(settings = ?store_settings, "Analytical store configured");

    let state = Arc::new(AppState::new(Dashboard::new(store_settings)));

    let app = create_api_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C (and SIGTERM on unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
