use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::ErrorResponse;
use crate::domain::error::DomainError;

/// REST-facing error: a status code plus the `{ "error": ... }` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// Every domain validation failure maps to HTTP 400 with the error's display
/// string, so `?` works in handlers.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        tracing::debug!(error = %e, "domain validation failed");
        Self::bad_request(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_400_with_fixed_messages() {
        let e = ApiError::from(DomainError::DivideByZero);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Divide by zero");

        let e = ApiError::from(DomainError::NegativeSqrt);
        assert_eq!(e.message, "Cannot compute square root of negative number");

        let e = ApiError::from(DomainError::NegativeFactorial);
        assert_eq!(e.message, "Cannot compute factorial of negative number");
    }
}
