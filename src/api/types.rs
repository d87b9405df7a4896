//! API response rendering
//!
//! Bodies are pretty-printed with 2-space indentation and end with a newline.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::ErrorResponse;
use crate::utils::constants::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};

/// Encode a value as indented JSON followed by `\n`
pub fn render_json<T: Serialize>(value: &T) -> AppResult<String> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    Ok(body)
}

/// JSON response with the given status.
///
/// An encoding failure is logged and answered with a plain-text 500.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match render_json(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response(),
        Err(err) => {
            error!(code = err.code_str(), error = %err, "Error encoding JSON");
            internal_error_response(&err)
        }
    }
}

/// Plain-text 500 for failures that cannot be reported as JSON
pub fn internal_error_response(err: &AppError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
        format!("{}\n", err),
    )
        .into_response()
}

/// Structured `{error, status_code}` response for a failed request
pub fn error_response(err: &AppError) -> Response {
    let payload = ErrorResponse::from_error(err);
    let status =
        StatusCode::from_u16(payload.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use axum::body::to_bytes;
    use serde::ser::Error as _;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to encode"))
        }
    }

    #[test]
    fn test_render_indentation() {
        let body = render_json(&crate::models::types::FizzBuzzResponse {
            message: "Fizz".into(),
            details: "3 is divisible by 3".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            "{\n  \"message\": \"Fizz\",\n  \"details\": \"3 is divisible by 3\"\n}\n"
        );
        assert_eq!(render_json(&true).unwrap(), "true\n");
    }

    #[tokio::test]
    async fn test_encode_failure_is_plain_500() {
        let resp = json_response(StatusCode::OK, &Unencodable);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], CONTENT_TYPE_TEXT);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("[SERIALIZATION_FAILED]"));
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_error_response_status() {
        let resp = error_response(&AppError::number_too_large("12345678"));
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], CONTENT_TYPE_JSON);

        let resp = error_response(&AppError::new(ErrorCode::Unknown, "boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Internal server error");
        assert_eq!(value["status_code"], 500);
    }
}
