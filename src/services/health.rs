use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub update_mode: String,
    pub dispatcher_running: bool,
    pub uptime_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub update_mode: &'static str,
    pub ready: Arc<AtomicBool>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
    ready: Arc<AtomicBool>,
}

impl HealthService {
    pub fn new(update_mode: &'static str) -> Self {
        let ready = Arc::new(AtomicBool::new(false));
        let state = AppState {
            update_mode,
            ready: ready.clone(),
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router, ready }
    }

    /// Flag flipped once the dispatcher is about to receive updates.
    pub fn readiness_flag(&self) -> Arc<AtomicBool> {
        self.ready.clone()
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;
    let running = state.ready.load(Ordering::SeqCst);

    Json(HealthResponse {
        status: if running { "healthy" } else { "starting" }.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        update_mode: state.update_mode.to_string(),
        dispatcher_running: running,
        uptime_seconds: uptime,
    })
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    if state.ready.load(Ordering::SeqCst) {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    // Responding at all means the process is alive
    Json("alive")
}
