//! FizzBuzz Classifier
//!
//! Pure divisibility rules. 0 is divisible by everything, so it is FizzBuzz.

use super::validator::ValidatedNumber;
use crate::models::types::FizzBuzzResponse;

/// Divisible by 3
#[inline]
pub fn is_fizz(n: u32) -> bool {
    n % 3 == 0
}

/// Divisible by 5
#[inline]
pub fn is_buzz(n: u32) -> bool {
    n % 5 == 0
}

/// Divisible by both 3 and 5
#[inline]
pub fn is_fizzbuzz(n: u32) -> bool {
    is_fizz(n) && is_buzz(n)
}

/// Outcome of classifying a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    FizzBuzz(u32),
    Fizz(u32),
    Buzz(u32),
    Plain(u32),
}

impl Classification {
    /// Apply the rules in order: both, 3, 5, neither
    pub fn of(n: ValidatedNumber) -> Self {
        Self::of_u32(n.get())
    }

    fn of_u32(n: u32) -> Self {
        if is_fizzbuzz(n) {
            Self::FizzBuzz(n)
        } else if is_fizz(n) {
            Self::Fizz(n)
        } else if is_buzz(n) {
            Self::Buzz(n)
        } else {
            Self::Plain(n)
        }
    }

    /// "FizzBuzz", "Fizz", "Buzz", or the number itself
    pub fn message(&self) -> String {
        match self {
            Self::FizzBuzz(_) => "FizzBuzz".to_string(),
            Self::Fizz(_) => "Fizz".to_string(),
            Self::Buzz(_) => "Buzz".to_string(),
            Self::Plain(n) => n.to_string(),
        }
    }

    /// Divisibility explanation
    pub fn details(&self) -> String {
        match self {
            Self::FizzBuzz(n) => format!("{} is divisible by 3 and 5", n),
            Self::Fizz(n) => format!("{} is divisible by 3", n),
            Self::Buzz(n) => format!("{} is divisible by 5", n),
            Self::Plain(n) => format!("{} is not divisible by 3 or 5", n),
        }
    }
}

impl From<Classification> for FizzBuzzResponse {
    fn from(c: Classification) -> Self {
        Self {
            message: c.message(),
            details: c.details(),
        }
    }
}

/// Classify a validated number into its response payload
pub fn fizzbuzz(n: ValidatedNumber) -> FizzBuzzResponse {
    Classification::of(n).into()
}
