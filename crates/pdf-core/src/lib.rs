//! PDF Core - Low-level single-page PDF canvas
//!
//! This crate provides functionality for:
//! - Creating a blank page of a fixed size (Letter, A4 or custom)
//! - Drawing text in the standard Type1 fonts (Helvetica, Courier)
//! - Stroking lines and rectangles
//! - Inserting raster images (JPEG, PNG, BMP)
//! - Saving atomically to a file
//!
//! Coordinates are in points, measured from the top-left corner of the page.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::Letter);
//! doc.set_font(StandardFont::Helvetica, 10.0);
//! doc.insert_text("Hello, World!", 100.0, 72.0, Align::Left)?;
//! doc.draw_rect(54.0, 72.0, 432.0, 198.0);
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod graphics;
mod image;
mod text;

pub use document::{PageSize, PdfDocument};
pub use font::StandardFont;
pub use graphics::{generate_line_operators, generate_rect_operators};
pub use image::{
    calculate_scaled_dimensions, detect_format, ColorSpace, ImageFilter, ImageFormat,
    ImageScaleMode, ImageXObject,
};
pub use text::{encode_win_ansi_hex, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to points
pub fn inch(value: f64) -> f64 {
    value * POINTS_PER_INCH
}

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("No font set")]
    FontNotSet,

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
