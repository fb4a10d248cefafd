use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Plain-text banner at the root path.
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, "User Service is running.")
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "user-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
