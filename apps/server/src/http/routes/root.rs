use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use models::ServiceInfo;

use crate::http::{not_found, ApiContext};

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(service_info).fallback(not_found))
}

async fn service_info(State(context): State<ApiContext>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Authentication Service",
        version: context.config.version.clone(),
        environment: context.config.environment.clone(),
        site_group: context.config.site_group.clone(),
    })
}
