use std::net::SocketAddr;

use axum::{Router, routing::get, routing::post};
use tokio::net::TcpListener;
use tower_http::decompression::RequestDecompressionLayer;
use tracing::info;

use super::{
    services::{health, negotiate, parse_media_type},
    state::AppState,
};
use crate::config::Config;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All API routes over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/negotiate", post(negotiate))
        .route("/parse", post(parse_media_type))
        .route("/health", get(health))
        .with_state(state)
        // gzip request bodies are inflated before handlers see them
        .layer(RequestDecompressionLayer::new())
}

/// Serves the API until Ctrl+C or SIGTERM
///
/// `address` overrides `server.bind_addr` when given.
pub async fn run(config: Config, address: Option<SocketAddr>) -> Result<(), AnyError> {
    let address = address.unwrap_or(config.server.bind_addr);
    info!(
        precision = config.negotiation.precision,
        available = config.negotiation.available.len(),
        "Starting negotiation API"
    );

    let app = router(AppState::new(config));

    let listener = TcpListener::bind(address).await?;
    info!(%address, "mimeparser API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
