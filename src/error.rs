//! Error handling module
//!
//! Provides the error type returned by every handler and its HTTP mapping.

use crate::db::StoreError;
use crate::models::MessageResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A store call failed. `context` is the only text the client sees.
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Body of a 500 response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database { context, source } => {
                error!("{}: {:?}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: context.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::message_only(msg)),
            )
                .into_response(),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::message_only(msg)),
            )
                .into_response(),
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Wrap a store error with the message shown to clients, for use in `map_err`
pub fn db_error(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Database { context, source }
}

/// Helper function to create a validation error
pub fn validation_error(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

/// Helper function to create a not found error
pub fn not_found_error(msg: impl Into<String>) -> AppError {
    AppError::NotFound(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_database_error_hides_detail() {
        let err = db_error("Error fetching products")(StoreError::Constraint(
            "relation \"products\" does not exist".to_string(),
        ));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error fetching products" }));
    }

    #[tokio::test]
    async fn test_not_found_uses_message_envelope() {
        let (status, body) = body_of(not_found_error("Invalid SKU")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Invalid SKU" }));
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = body_of(validation_error("alasan is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "alasan is required" }));
    }
}
