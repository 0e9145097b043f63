pub mod config;
pub mod content;
pub mod error;
pub mod health;
pub mod http;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod outline;
pub mod rules;
pub mod server;
pub mod state;
pub mod tools;
pub mod utils;
pub mod validator;

pub use config::{CliArgs, ServerConfig, TransportKind};
pub use error::BlogError;
pub use logging::{LoggingConfig, init_logging};
pub use server::BlogServer;

use anyhow::Result;
use axum::Router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const HTTP_SERVICE_PATH: &str = "/mcp";

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let config = Arc::new(config);
    let state = Arc::new(AppState::new(config.clone()));

    tracing::info!(
        transport = %config.transport,
        rng_seed = ?config.rng_seed,
        "starting blog content MCP server",
    );

    match config.transport {
        TransportKind::Stdio => {
            let server = BlogServer::from_state(state);
            server.run_stdio().await
        }
        TransportKind::Http => run_stream_http_transport(config, state).await,
    }
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> (axum::http::StatusCode, String) {
    let metrics_text = metrics::METRICS.encode();
    (axum::http::StatusCode::OK, metrics_text)
}

/// Full router for the HTTP transport: the MCP service at `/mcp`, the REST
/// adapter under `/api/blog`, and the operational endpoints.
pub fn http_router(config: Arc<ServerConfig>, state: Arc<AppState>) -> Router {
    let service_state = state.clone();
    let service = StreamableHttpService::new(
        move || Ok(BlogServer::from_state(service_state.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let health_checker = Arc::new(health::HealthChecker::new(config, state.clone()));

    Router::new()
        .nest_service(HTTP_SERVICE_PATH, service)
        .route("/health", axum::routing::get(health::liveness_handler))
        .route("/ready", axum::routing::get(health::readiness_handler))
        .route(
            "/health/components",
            axum::routing::get(health::components_handler),
        )
        .route("/metrics", axum::routing::get(metrics_handler))
        .with_state(health_checker)
        .nest("/api/blog", http::api_router(state))
}

async fn run_stream_http_transport(config: Arc<ServerConfig>, state: Arc<AppState>) -> Result<()> {
    let bind_addr = config.http_bind_address;
    let router = http_router(config, state);

    let listener = TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!(transport = "http", bind = %actual_addr, path = HTTP_SERVICE_PATH, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Wait for a shutdown signal (SIGTERM or SIGINT)
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
        _ = ctrl_c => {
            tracing::info!("received SIGINT (Ctrl+C), shutting down");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        },
    }
}
