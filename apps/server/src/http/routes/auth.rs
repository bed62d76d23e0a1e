use anyhow::Context;
use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use axum::routing::{get, post};
use axum::{Json, Router};
use models::{LoginResponse, MeResponse, User, ValidateResponse};
use serde_json::Value;

use crate::http::{not_found, ApiContext, Result};

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/auth/login", post(login).fallback(not_found))
        .route("/auth/validate", post(validate).fallback(not_found))
        .route("/auth/me", get(me).fallback(not_found))
}

/// Reads the request body the way the service treats every body: parsed
/// eagerly when the content type says JSON, ignored otherwise.
///
/// Malformed JSON funnels into the generic 500 responder rather than
/// crashing the handler; no route actually uses the parsed value.
fn parse_json_body(headers: &HeaderMap, body: &Bytes) -> Result<Option<Value>> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);

    if !is_json || body.is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_slice(body).context("malformed JSON request body")?;

    Ok(Some(value))
}

/// Demo login. Credentials are not checked; every request gets the same
/// canned token and user.
async fn login(headers: HeaderMap, body: Bytes) -> Result<Json<LoginResponse>> {
    let _credentials = parse_json_body(&headers, &body)?;

    Ok(Json(LoginResponse {
        message: "Login endpoint",
        token: "demo-jwt-token",
        user: User::demo(),
    }))
}

/// Demo token validation. Any token, or none at all, is reported valid.
async fn validate(headers: HeaderMap, body: Bytes) -> Result<Json<ValidateResponse>> {
    let _token = parse_json_body(&headers, &body)?;

    Ok(Json(ValidateResponse {
        valid: true,
        user: User::demo(),
    }))
}

async fn me() -> Json<MeResponse> {
    Json(MeResponse {
        user: User::demo_with_roles(),
    })
}
