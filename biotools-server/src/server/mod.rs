//! HTTP surface of the sequence engine

pub mod error;
pub mod handlers;
pub mod models;
pub mod upload;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use biotools_core::{BiotoolsError, BiotoolsResult, Config};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

fn cors_layer(origins: &[String]) -> BiotoolsResult<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                BiotoolsError::Configuration(format!("Invalid CORS origin '{}'", origin))
            })
        })
        .collect::<BiotoolsResult<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> BiotoolsResult<Router> {
    let server = &state.config.server;
    let cors = cors_layer(&server.cors_allow_origins)?;
    let body_limit = DefaultBodyLimit::max(server.max_upload_bytes);
    let timeout = TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs));

    let sequence = Router::new()
        .route("/reverse-complement", post(handlers::reverse_complement))
        .route("/transcribe", post(handlers::transcribe))
        .route("/reverse-transcribe", post(handlers::reverse_transcribe))
        .route("/translate", post(handlers::translate))
        .route("/case/upper", post(handlers::uppercase))
        .route("/case/lower", post(handlers::lowercase))
        .route("/stats", post(handlers::stats));

    let fasta = Router::new()
        .route("/reverse-complement", post(handlers::fasta_reverse_complement))
        .route("/transcribe", post(handlers::fasta_transcribe))
        .route("/translate", post(handlers::fasta_translate))
        .route("/stats", post(handlers::fasta_stats))
        .route(
            "/upload/reverse-complement",
            post(handlers::upload_reverse_complement),
        )
        .route("/upload/stats", post(handlers::upload_stats));

    Ok(Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/sequence", sequence)
        .nest("/fasta", fasta)
        .layer(body_limit)
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let address = config.server.bind_address();
    let app = router(AppState::new(config))?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %address, "Biotools API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
