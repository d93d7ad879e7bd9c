//! Health, readiness and liveness probes.
//!
//! None of the probes touch the cache or the registry: reads degrade around
//! an unreachable cache, and registry outages are reported per request.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Probe body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy`, `ready` or `alive`, depending on the probe.
    pub status: String,
    /// Crate version of the running binary.
    pub version: String,
}

impl HealthResponse {
    fn probe(status: &str) -> Json<Self> {
        Json(Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// Routes for the three probes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    HealthResponse::probe("healthy")
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses((status = 200, description = "Service accepts traffic", body = HealthResponse))
)]
pub async fn readiness_check() -> Json<HealthResponse> {
    HealthResponse::probe("ready")
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses((status = 200, description = "Process is alive", body = HealthResponse))
)]
pub async fn liveness_check() -> Json<HealthResponse> {
    HealthResponse::probe("alive")
}
