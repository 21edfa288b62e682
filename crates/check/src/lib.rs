//! Check - bank check layout and rendering
//!
//! This crate provides:
//! - The check record and the raw form it is built from
//! - A declarative layout (JSON configurable) that plans draw operations
//! - Signature image loading with a plain-line fallback
//! - Rendering to a single-page PDF
//!
//! # Example
//!
//! ```ignore
//! use check::{CheckForm, CheckRenderer};
//!
//! let form = CheckForm::from_file("check.json")?;
//! let record = form.into_record()?;
//! CheckRenderer::default().render(&record, "check.pdf")?;
//! ```

mod layout;
mod record;
mod renderer;
mod signature;

pub use layout::{CheckArea, CheckLayout, DrawOp, ImageBox, Labels, LineSpec, TextSlot};
pub use record::{CheckForm, CheckRecord};
pub use renderer::CheckRenderer;
pub use signature::{Signature, SignatureOutcome};

use amount_words::AmountError;
use thiserror::Error;

/// Message shown when the amount field does not parse
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount like 123.45";

/// Errors that can occur while building or rendering a check
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Please enter a valid amount like 123.45")]
    InvalidAmount(#[from] AmountError),

    #[error("Signature error: {0}")]
    Signature(String),

    #[error("Invalid layout: {0}")]
    Layout(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for check operations
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_message() {
        let err = CheckError::from(AmountError::Invalid("abc".to_string()));
        assert_eq!(err.to_string(), INVALID_AMOUNT_MESSAGE);
    }
}
