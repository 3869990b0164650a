use crate::domain::DomainError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: &'static str,
    pub detail: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError {
            code: "invalid_input",
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_implemented(detail: impl Into<String>) -> Self {
        ApiError {
            code: "not_implemented",
            detail: detail.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(detail) => ApiError::bad_request(detail),
            DomainError::NotImplemented(detail) => {
                tracing::error!(detail = %detail, "Integration not implemented");
                ApiError::not_implemented(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.code, self.detail));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.detail)
    }
}

impl std::error::Error for ApiError {}
