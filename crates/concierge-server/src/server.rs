//! HTTP server assembly and lifecycle
//!
//! Builds the axum router with permissive CORS and request tracing, binds
//! the listener, and runs until ctrl-c or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use concierge_core::{GenerationStrategy, KeywordResponder, RemoteConfig, RemoteGenerator};

use crate::handlers;
use crate::settings::{Engine, Settings};

/// Shared per-request state: the generation strategy selected at startup
#[derive(Clone)]
pub struct AppState {
    pub strategy: Arc<dyn GenerationStrategy>,
}

/// Construct the strategy the settings ask for
pub fn build_strategy(settings: &Settings) -> Result<Arc<dyn GenerationStrategy>> {
    Ok(match settings.engine {
        Engine::Remote => Arc::new(RemoteGenerator::new(RemoteConfig::new(&settings.api_url)?)),
        Engine::Keyword => Arc::new(KeywordResponder::default()),
    })
}

/// Router with the API routes, permissive CORS, and request tracing
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-message", post(handlers::generate_message))
        .route("/api/explain-decision", post(handlers::explain_decision))
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until shutdown
pub async fn run(settings: Settings) -> Result<()> {
    let strategy = build_strategy(&settings)?;
    info!("Using {} generation engine", strategy.name());

    let app = create_app(AppState { strategy });

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP listener to {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on ctrl-c or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
