//! Centralized Error Handling Module
//!
//! Every failure carries an `ErrorCode` so logs and client payloads stay
//! consistent. Error codes are UPPER_SNAKE strings:
//! - INVALID_NUMBER / NUMBER_TOO_LARGE: input validation
//! - SERIALIZATION_FAILED: response encoding
//! - UNKNOWN_ERROR: anything else

use std::fmt;

use crate::utils::constants::{
    INTERNAL_ERROR_MESSAGE, INVALID_NUMBER_MESSAGE, NUMBER_TOO_LARGE_MESSAGE,
};

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Error code for logging and status mapping
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input is empty or contains a non-digit character
    InvalidNumber,
    /// Input is all digits but longer than the free-tier limit
    NumberTooLarge,
    /// Response body could not be encoded
    SerializationFailed,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "INVALID_NUMBER",
            Self::NumberTooLarge => "NUMBER_TOO_LARGE",
            Self::SerializationFailed => "SERIALIZATION_FAILED",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidNumber => 400,
            Self::NumberTooLarge => 402,
            _ => 500,
        }
    }

    /// Message shown to API clients
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidNumber => INVALID_NUMBER_MESSAGE,
            Self::NumberTooLarge => NUMBER_TOO_LARGE_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Validation failures are answered with a structured JSON body
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidNumber | Self::NumberTooLarge)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Malformed number
    pub fn invalid_number(raw: &str) -> Self {
        Self::new(ErrorCode::InvalidNumber, format!("invalid number: {:?}", raw))
    }

    /// Too many digits
    pub fn number_too_large(raw: &str) -> Self {
        Self::new(
            ErrorCode::NumberTooLarge,
            format!("number too large: {} digits", raw.len()),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::SerializationFailed, "JSON encode error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::invalid_number("12a");
        assert_eq!(err.code, ErrorCode::InvalidNumber);
        assert_eq!(err.code_str(), "INVALID_NUMBER");
        assert_eq!(err.to_string(), "[INVALID_NUMBER] invalid number: \"12a\"");

        let err = AppError::number_too_large("12345678");
        assert_eq!(err.code_str(), "NUMBER_TOO_LARGE");
        assert!(err.message.contains("8 digits"));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::InvalidNumber.http_status(), 400);
        assert_eq!(ErrorCode::NumberTooLarge.http_status(), 402);
        assert_eq!(ErrorCode::SerializationFailed.http_status(), 500);
        assert_eq!(ErrorCode::Unknown.http_status(), 500);
    }

    #[test]
    fn test_client_messages() {
        assert!(ErrorCode::InvalidNumber.client_message().starts_with("Invalid number."));
        assert!(ErrorCode::NumberTooLarge.client_message().contains("7 digits"));
        assert_eq!(ErrorCode::Unknown.client_message(), "Internal server error");
        assert!(!ErrorCode::SerializationFailed.is_client_error());
    }

    #[test]
    fn test_source_is_kept() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.code, ErrorCode::SerializationFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}
