use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failures from the remote catalog API. Callers distinguish them only by
/// status code; there is no richer taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Numeric status for status failures, `None` for transport faults.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Domain failures from the content lookup service.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Brand {0} not found")]
    BrandNotFound(String),
    #[error("Model {model} not found for brand {brand}")]
    ModelNotFound { brand: String, model: String },
    #[error("Failed to generate recommendation")]
    GenerationFailed,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_carries_code() {
        let err = ApiError::Status(503);
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn content_errors_name_the_missing_entity() {
        let err = ContentError::BrandNotFound("Toyota".to_string());
        assert_eq!(err.to_string(), "Brand Toyota not found");

        let err = ContentError::ModelNotFound {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
        };
        assert_eq!(err.to_string(), "Model Corolla not found for brand Toyota");
    }
}
