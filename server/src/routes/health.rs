//! Liveness endpoint for the dealer service.
//!
//! Answers without touching the record stores, so it stays up even when the
//! data directory is unusable.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Liveness response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Liveness handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Dealer Service"
}
