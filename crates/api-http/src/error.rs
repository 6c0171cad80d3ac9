//! HTTP Error Mapping
//!
//! Maps application errors to HTTP status codes. Bodies are always
//! `{"error": message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use praxis_core::error::AppError;
use praxis_core::port::RunnerError;

/// API-level error
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    /// The run gate is exhausted; the client should retry later
    Busy,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Busy => StatusCode::TOO_MANY_REQUESTS,
            ApiError::App(err) => match err {
                AppError::Domain(_) | AppError::Validation(_) | AppError::Serialization(_) => {
                    StatusCode::BAD_REQUEST
                }
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::Runner(RunnerError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Busy => "A test run is already in progress. Please retry.".to_string(),
            ApiError::App(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_core::domain::DomainError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::App(AppError::NotFound("Chapter 'x' not found".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_slug_maps_to_400() {
        let err = ApiError::App(AppError::Domain(DomainError::InvalidSlug("..".to_string())));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let err = ApiError::App(AppError::Runner(RunnerError::Timeout(30_000)));
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_busy_maps_to_429() {
        assert_eq!(ApiError::Busy.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_spawn_failure_maps_to_500() {
        let err = ApiError::App(AppError::Runner(RunnerError::SpawnFailed(
            "cargo: not found".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
