//! Response payload types shared between the server and its clients.
//!
//! Each route defines its own payload shape; there is no schema unification
//! across routes, so every endpoint gets its own struct here.

use serde::Serialize;

/// The service name reported by the health, readiness, and root endpoints.
pub const SERVICE_NAME: &str = "auth-service";

/// The demo user returned by every auth endpoint.
///
/// `roles` is only present in the `/auth/me` payload; the login and validate
/// payloads omit the field entirely rather than sending `null`.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl User {
    pub fn demo() -> Self {
        Self {
            id: 1,
            username: "demo-user".to_string(),
            roles: None,
        }
    }

    pub fn demo_with_roles() -> Self {
        Self {
            roles: Some(vec!["user".to_string()]),
            ..Self::demo()
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
    pub timestamp: String,
    pub uptime: f64,
}

/// Body of `GET /ready`.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: String,
    pub environment: String,
    #[serde(rename = "siteGroup")]
    pub site_group: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: &'static str,
    pub user: User,
}

/// Body of `POST /auth/validate`.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub user: User,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn demo_user_serializes_without_roles() {
        let value = serde_json::to_value(User::demo()).unwrap();
        assert_eq!(value, json!({ "id": 1, "username": "demo-user" }));
    }

    #[test]
    fn demo_user_with_roles_includes_role_array() {
        let value = serde_json::to_value(User::demo_with_roles()).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "username": "demo-user", "roles": ["user"] })
        );
    }

    #[test]
    fn service_info_uses_camel_case_site_group() {
        let info = ServiceInfo {
            message: "Authentication Service",
            version: "dev".to_string(),
            environment: "development".to_string(),
            site_group: "SSG1".to_string(),
        };
        let value = serde_json::to_value(info).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Authentication Service",
                "version": "dev",
                "environment": "development",
                "siteGroup": "SSG1"
            })
        );
    }
}
