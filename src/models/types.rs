//! Wire payloads returned by the API

use serde::Serialize;

use super::errors::AppError;

/// Classification payload for `GET /api/{number}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FizzBuzzResponse {
    pub message: String,
    pub details: String,
}

/// Error payload for rejected input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status_code: u16,
}

impl ErrorResponse {
    /// Map any application error to its client payload.
    ///
    /// Validation codes get their own message and status; everything else
    /// collapses into a generic 500.
    pub fn from_error(err: &AppError) -> Self {
        Self {
            error: err.code.client_message().to_string(),
            status_code: err.code.http_status(),
        }
    }
}
