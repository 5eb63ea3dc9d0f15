//! # API Errors
//!
//! Error types for the JSON API. The form page and the selector never fail;
//! only catalog lookups by path can miss.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Branch not in the catalog
    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    /// Subject not in the catalog
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BranchNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SubjectNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BranchNotFound("X".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::SubjectNotFound("Y".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::SubjectNotFound("Alchemy".to_string()));
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Subject not found: Alchemy");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::BranchNotFound("Arts".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
