//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error body has the shape `{"error": "<message>"}`. Internal
//! failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mealplan_core::{StoreError, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request rejected by a domain rule (400).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Request body could not be parsed (400).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to show a client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::Validation(ValidationError::PlanRequired).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_body_is_the_bare_message() {
        let (status, body) =
            response_parts(ValidationError::RecipeFieldsRequired.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "title and url required");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let (status, body) =
            response_parts(AppError::Internal("disk on fire at /srv/data.json".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "internal error");
    }

    #[test]
    fn store_errors_become_internal() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(StoreError::Malformed {
            location: "memory".into(),
            source: parse,
        });
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.public_message(), "internal error");
    }
}
