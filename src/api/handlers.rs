//! API Request Handlers

use axum::{
    extract::{rejection::PathRejection, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use super::types::{error_response, json_response};
use crate::core::classifier::{fizzbuzz, is_buzz, is_fizz, is_fizzbuzz};
use crate::core::validator::{validate_number, ValidatedNumber};
use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::CONTENT_TYPE_HTML;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Path segment as extracted; a segment that is not valid UTF-8 after
/// percent-decoding arrives as the rejection
type NumberSegment = Result<Path<String>, PathRejection>;

/// Validate the raw segment, run `f`, and render either outcome as JSON
fn respond<T, F>(segment: NumberSegment, f: F) -> Response
where
    T: Serialize,
    F: FnOnce(ValidatedNumber) -> T,
{
    let result: AppResult<T> = match segment {
        Ok(Path(raw)) => validate_number(&raw).map(f),
        Err(rejection) => Err(AppError::invalid_number(&rejection.body_text())),
    };

    match result {
        Ok(value) => json_response(StatusCode::OK, &value),
        Err(err) if err.code.is_client_error() => {
            debug!(code = err.code_str(), error = %err, "Rejected number");
            error_response(&err)
        }
        Err(err) => {
            error!(code = err.code_str(), error = %err, "Request failed");
            error_response(&err)
        }
    }
}

// ============================================
// Classification
// ============================================

/// `GET /api/{number}`
pub async fn classify_number(segment: NumberSegment) -> Response {
    respond(segment, fizzbuzz)
}

/// `GET /api/fizz/{number}`
pub async fn check_fizz(segment: NumberSegment) -> Response {
    respond(segment, |n| is_fizz(n.get()))
}

/// `GET /api/buzz/{number}`
pub async fn check_buzz(segment: NumberSegment) -> Response {
    respond(segment, |n| is_buzz(n.get()))
}

/// `GET /api/fizzbuzz/{number}`
pub async fn check_fizzbuzz(segment: NumberSegment) -> Response {
    respond(segment, |n| is_fizzbuzz(n.get()))
}

// ============================================
// Landing page
// ============================================

/// `GET /` and every unmatched GET path
pub async fn index() -> Response {
    ([(header::CONTENT_TYPE, CONTENT_TYPE_HTML)], INDEX_HTML).into_response()
}
