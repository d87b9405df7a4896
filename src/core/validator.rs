//! Input Validator
//!
//! Turns a raw path segment into a bounded, non-negative number.
//!
//! Check order:
//! 1. any character outside `0`-`9` (or an empty string) -> `InvalidNumber`
//! 2. more than `MAX_DIGITS` characters -> `NumberTooLarge`, without parsing
//! 3. parse the digits

use std::fmt;
use std::str::FromStr;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::MAX_DIGITS;

/// A number that came from a 1-7 digit all-numeric string.
///
/// Only [`validate_number`] (or `str::parse`) creates one, so the value is
/// always in `0..=9_999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatedNumber(u32);

impl ValidatedNumber {
    /// Largest value a 7 digit string can hold
    pub const MAX: u32 = 9_999_999;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ValidatedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ValidatedNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_number(s)
    }
}

/// Validate a raw path parameter.
pub fn validate_number(raw: &str) -> AppResult<ValidatedNumber> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::invalid_number(raw));
    }

    // All ASCII at this point, so byte length == digit count
    if raw.len() > MAX_DIGITS {
        return Err(AppError::number_too_large(raw));
    }

    raw.parse::<u32>()
        .map(ValidatedNumber)
        .map_err(|_| AppError::invalid_number(raw))
}
