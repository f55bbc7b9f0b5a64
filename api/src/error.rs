//! API Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tok_economics::EconomicsError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EconomicsError> for ApiError {
    fn from(err: EconomicsError) -> Self {
        match err {
            EconomicsError::InvalidAmount(msg) => ApiError::InvalidAmount(msg),
            EconomicsError::UnknownCurrency(code) => ApiError::UnknownCurrency(code),
            EconomicsError::UnknownCountry(code) => {
                ApiError::NotFound(format!("Country {} not found", code))
            }
            EconomicsError::InvalidPackage(msg) => ApiError::InvalidPackage(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InvalidAmount(msg) => (
                StatusCode::BAD_REQUEST,
                "invalid_amount",
                format!("Please enter a valid number: {}", msg),
            ),
            ApiError::UnknownCurrency(code) => (
                StatusCode::BAD_REQUEST,
                "unknown_currency",
                format!("Currency {} is not supported", code),
            ),
            ApiError::InvalidPackage(msg) => (StatusCode::BAD_REQUEST, "invalid_package", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_economics_error_status() {
        let cases = [
            (EconomicsError::InvalidAmount("-1".into()), StatusCode::BAD_REQUEST),
            (EconomicsError::UnknownCurrency("XYZ".into()), StatusCode::BAD_REQUEST),
            (EconomicsError::InvalidPackage("0 coins".into()), StatusCode::BAD_REQUEST),
            (EconomicsError::UnknownCountry("ZZ".into()), StatusCode::NOT_FOUND),
            (EconomicsError::InvalidConfig("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
