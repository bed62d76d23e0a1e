use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use models::{HealthResponse, ReadyResponse, SERVICE_NAME};

use crate::http::{not_found, ApiContext};

pub fn router() -> Router<ApiContext> {
    // Unmatched methods on these paths fall through to the shared 404
    // handler instead of axum's default 405.
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/ready", get(ready).fallback(not_found))
}

/// Liveness probe. Reports process uptime and the current time so that
/// successive calls are distinguishable.
async fn health(State(context): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: context.config.version.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: context.started_at.elapsed().as_secs_f64(),
    })
}

/// Readiness probe. The service has no dependencies to wait on, so it is
/// ready as soon as it is serving.
async fn ready(State(context): State<ApiContext>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        service: SERVICE_NAME,
        version: context.config.version.clone(),
    })
}
