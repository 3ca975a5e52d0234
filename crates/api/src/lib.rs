//! GRC Risk Assessment API Server
//!
//! REST API for submitting risk observations and querying assessed records.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod rate_limit;
mod routes;

pub use self::config::ServiceConfig;
pub use error::ApiError;
pub use rate_limit::RateLimitConfig;

use storage::Repository;

/// Fixed liveness payload, independent of store state
const LIVENESS_MESSAGE: &str = "GRC Risk Assessment API is running";

/// Application state shared across handlers
pub struct AppState {
    /// Storage repository
    pub repository: Repository,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around an initialized repository
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub risk_count: i64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/health", get(health_handler))
        .route("/assess-risk", post(routes::risks::create_risk))
        .route("/risks", get(routes::risks::list_risks))
        .with_state(state)
}

/// Liveness handler
async fn liveness_handler() -> impl IntoResponse {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE,
    })
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let risk_count = state.repository.count().await.unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        risk_count,
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until shutdown
pub async fn run_server(config: &ServiceConfig, repository: Repository) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(repository));
    let governor_config = rate_limit::create_governor_config(&config.rate_limit);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(GovernorLayer {
            config: governor_config,
        });

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
