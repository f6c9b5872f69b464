//! Router assembly and the serve loop.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Builds the API router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = state.config.cors;
    let max_body_bytes = state.config.max_body_bytes;

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/status", get(handlers::status))
        // Algorithm endpoints
        .route("/api/algorithms/prime", post(handlers::prime))
        .route("/api/algorithms/summation", post(handlers::summation))
        .route("/api/algorithms/fibonacci", post(handlers::fibonacci))
        .route("/api/algorithms/gcd", post(handlers::gcd))
        .route("/api/algorithms/quicksort", post(handlers::quicksort))
        .route("/api/algorithms/count", post(handlers::count))
        // Catalog and listings
        .route("/api/catalog", get(handlers::list_catalog))
        .route("/api/catalog/{id}", get(handlers::catalog_entry))
        // Execution log
        .route("/api/executions", get(handlers::list_executions))
        .route("/api/executions/{id}", get(handlers::get_execution))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        Self { config, state }
    }

    /// Shared state, for callers that want to inspect the execution log.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Binds the listen address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self) -> std::io::Result<()> {
        let router = router(Arc::clone(&self.state));
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        tracing::info!(
            addr = %listener.local_addr()?,
            history_capacity = self.config.history_capacity,
            cors = self.config.cors,
            "AlgoLab server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
