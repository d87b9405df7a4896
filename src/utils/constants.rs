//! Constants Module - Single Source of Truth
//!
//! Limits, client-facing messages and server defaults used across the crate.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "FizzBuzz API";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// VALIDATION LIMITS
// ============================================

/// Longest digit string accepted on the free tier
pub const MAX_DIGITS: usize = 7;

// ============================================
// CLIENT MESSAGES
// ============================================

pub const INVALID_NUMBER_MESSAGE: &str =
    "Invalid number. Please upgrade to a paid plan to use imaginary, non-real, or non-numeric numbers.";

pub const NUMBER_TOO_LARGE_MESSAGE: &str =
    "Free tier is limited to 7 digits. Please upgrade to a paid plan to use larger numbers.";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ============================================
// SERVER DEFAULTS
// ============================================

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Env var for the bind host
pub const ENV_HOST: &str = "FIZZBUZZ_HOST";

/// Env var for the bind port
pub const ENV_PORT: &str = "FIZZBUZZ_PORT";

/// Port set by PaaS platforms, checked before `FIZZBUZZ_PORT`
pub const ENV_PLATFORM_PORT: &str = "PORT";

// ============================================
// CONTENT TYPES
// ============================================

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
