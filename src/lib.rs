//! FizzBuzz API Library
//!
//! Validates a number taken from the request path and classifies it:
//! - divisible by 3 and 5 -> "FizzBuzz"
//! - divisible by 3 -> "Fizz"
//! - divisible by 5 -> "Buzz"
//! - otherwise the number itself
//!
//! Malformed input answers 400, more than 7 digits answers 402.

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use api::create_router;
pub use self::core::{
    fizzbuzz, is_buzz, is_fizz, is_fizzbuzz, validate_number, Classification, ValidatedNumber,
};
pub use models::{AppError, AppResult, ErrorCode, ErrorResponse, FizzBuzzResponse, ServerConfig};
