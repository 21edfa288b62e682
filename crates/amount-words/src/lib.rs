//! Amount Words - currency amounts in English words
//!
//! This crate provides:
//! - A non-negative, two-decimal `Amount` type backed by `rust_decimal`
//! - English cardinal numbers (one, two, ... one hundred and twenty-three)
//! - Rupee amounts in words ("One hundred and twenty three rupees and 45 paisa")
//!
//! # Example
//!
//! ```
//! use amount_words::{format_rupees, Amount};
//!
//! let amount: Amount = "123.45".parse().unwrap();
//! assert_eq!(
//!     format_rupees(&amount),
//!     "One hundred and twenty three rupees and 45 paisa"
//! );
//! ```

mod amount;
mod cardinal;
mod formatter;

pub use amount::Amount;
pub use cardinal::cardinal;
pub use formatter::{format_rupees, AmountFormatter};

use thiserror::Error;

/// Errors that can occur when building an amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0:?}")]
    Invalid(String),

    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount is too large: {0}")]
    TooLarge(String),
}

/// Result type for amount operations
pub type Result<T> = std::result::Result<T, AmountError>;
