use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;

/// HTTP status for a domain failure
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::Database(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain failure as `{ "error": message }`
pub fn error_response(err: DomainError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    }

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
