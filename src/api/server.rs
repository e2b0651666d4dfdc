use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{
    services::{not_found, search_books},
    state::AppState,
};
use crate::catalog::GoogleBooksClient;
use crate::config::Config;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Routing table for the service
///
/// Only `GET /books` is served; every other path or method answers 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/books",
            get(search_books).head(not_found).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn run(config: Config) -> Result<(), AnyError> {
    let address = config.server.bind_addr();

    info!(base_url = %config.catalog.base_url, "Initializing Google Books client");
    let catalog = GoogleBooksClient::new(&config.catalog)
        .map_err(|e| format!("Failed to build catalog client: {}", e))?;

    let state = AppState::new(Arc::new(catalog));
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "bookproxy listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
