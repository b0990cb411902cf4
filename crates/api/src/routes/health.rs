//! Health check and greeting endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;
use crate::response::MessageResponse;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root greeting handler.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, world!"))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
