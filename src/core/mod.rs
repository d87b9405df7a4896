//! Core Module - Validation & Classification
//!
//! Synchronous, side-effect free. The HTTP layer only wires these together.

pub mod classifier;
pub mod validator;

pub use classifier::*;
pub use validator::*;
