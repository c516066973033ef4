//! Car Price API Server
//!
//! HTTP transport for the price prediction pipeline. The transport is thin:
//! one POST endpoint feeds the normalizer/builder core and the loaded model,
//! everything else is plumbing.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use config::ApiConfig;

use inference_engine::{PriceEngine, PriceModel};

/// Application state shared across handlers
pub struct AppState {
    /// Loaded price model, read-only for the process lifetime
    pub model: Arc<dyn PriceModel>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a loaded model
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self {
            model,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Home response
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/predict", post(routes::predict::predict_price))
        // Postman and browser clients hit this from arbitrary origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Home handler
async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Car Price API running successfully".to_string(),
    })
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
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

/// Load the model and run the server
pub async fn run_server(config: &ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = PriceEngine::new(&config.model_path)?;
    engine.load()?;
    let state = Arc::new(AppState::new(Arc::new(engine)));
    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
