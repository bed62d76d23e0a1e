use crate::config::Config;
use anyhow::Context;
use axum::{body::Body, http::Request, Router};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

pub use error::{Error, Result};

use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    /// Set once when the router is built; `/health` reports the elapsed
    /// time since then as the process uptime.
    pub started_at: Instant,
}

/// Builds the application router.
///
/// Split out from [`serve`] so integration tests can drive the router
/// in-process without binding a socket.
pub fn app(config: Config) -> Router {
    Router::<ApiContext>::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new().layer(RequestIdLayer).layer(
                TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            ),
        )
        .fallback(not_found)
        .with_state(ApiContext {
            config: Arc::new(config),
            started_at: Instant::now(),
        })
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let ip: IpAddr = config
        .address
        .parse()
        .with_context(|| format!("invalid listen address `{}`", config.address))?;
    let addr = SocketAddr::new(ip, config.port);

    tracing::info!(
        environment = %config.environment,
        site_group = %config.site_group,
        "auth service listening on {addr}"
    );

    axum::Server::bind(&addr)
        .serve(app(config).into_make_service())
        .await
        .context("error running HTTP server")
}

/// Shared fallback for unmatched paths and for unmatched methods on
/// registered paths, so both produce the same 404 body.
pub(crate) async fn not_found() -> Error {
    Error::NotFound
}
