use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,

    /// Automatically return `500 Internal Server Error` on an `anyhow::Error`.
    ///
    /// Via the generated `From<anyhow::Error> for Error` impl,
    /// this allows using `?` on fallible calls in handler functions without a
    /// manual mapping step.
    ///
    /// The actual error message isn't returned to the client for security reasons.
    /// It should be logged instead
    #[error("an internal server error has occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed message sent to the client. Internal detail never leaves
    /// the process.
    fn client_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Endpoint not found",
            Self::Anyhow(_) => "Something went wrong!",
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        if let Self::Anyhow(ref cause) = self {
            tracing::error!("handler error: {cause:?}");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.client_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: Error) -> serde_json::Value {
        let response = error.into_response();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_fixed_body() {
        let response = Error::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(Error::NotFound).await;
        assert_eq!(body, serde_json::json!({ "error": "Endpoint not found" }));
    }

    #[tokio::test]
    async fn internal_error_hides_cause_from_client() {
        let error = Error::from(anyhow::anyhow!("connection reset by peer"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(Error::from(anyhow::anyhow!("boom"))).await;
        assert_eq!(body, serde_json::json!({ "error": "Something went wrong!" }));
    }
}
