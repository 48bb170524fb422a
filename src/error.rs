use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::upstream::UpstreamError;

#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter was absent or empty.
    MissingParameter(&'static str),
    /// The query string could not be read at all.
    InvalidQuery(String),
    /// The upstream call failed; `error` is the route's fixed message.
    Upstream { error: &'static str, details: Value },
    NotFound,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    pub fn upstream(error: &'static str, source: &UpstreamError) -> Self {
        ApiError::Upstream {
            error,
            details: source.details(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::MissingParameter(message) => {
                (StatusCode::BAD_REQUEST, message.to_string(), None)
            }
            ApiError::InvalidQuery(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Upstream { error, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string(), Some(details))
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string(), None),
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
