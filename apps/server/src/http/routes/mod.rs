mod auth;
mod health_check;
mod root;

use axum::Router;

use super::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .merge(health_check::router())
        .merge(root::router())
        .merge(auth::router())
}
