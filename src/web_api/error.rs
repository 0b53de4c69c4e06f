use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::data_access::task_store::StoreError;
use crate::validation_error::ValidationError;

/// Wire shape for every failure: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Everything a handler can fail with, mapped onto conventional
/// statuses. Store failures are kept apart from not-found: a broken
/// database surfaces as a 500.
#[derive(Debug)]
pub enum ApiError {
    /// 400: malformed input; carries the first failing rule's message.
    Validation(String),
    /// 404: the mutation target does not exist.
    NotFound,
    /// 500: the store misbehaved.
    Internal(String),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        ApiError::Validation("Invalid id".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::NotFound => "Task not found".to_string(),
            ApiError::Internal(detail) => format!("Storage failure: {detail}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.message)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "store operation failed");
        ApiError::Internal(e.to_string())
    }
}

// An unparsable body is a validation failure, same as a failing rule.
impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        ApiError::Validation("Invalid request body".to_string())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_message_is_surfaced_verbatim() {
        let err: ApiError = ValidationError::new("Title is required").into();
        assert_eq!(err.message(), "Title is required");
    }
}
