//! Standard Type1 fonts
//!
//! The base-14 fonts need no embedding; every conforming reader ships them.
//! Widths come from the Adobe Core14 AFM files and are used for alignment.

use crate::text::win_ansi_code;
use lopdf::{dictionary, Dictionary};
use serde::{Deserialize, Serialize};

/// Glyph widths for WinAnsi codes 32..=126, Helvetica
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 48-63
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 64-79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 80-95
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 96-111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 112-126
];

/// Glyph widths for WinAnsi codes 32..=126, Helvetica-Bold
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 48-63
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 64-79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 80-95
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 96-111
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 112-126
];

/// Glyph widths for WinAnsi codes 0x80..=0x9F, Helvetica (0 where unassigned)
const HELVETICA_HIGH_WIDTHS: [u16; 32] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 80-8F
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 90-9F
];

/// Glyph widths for WinAnsi codes 0x80..=0x9F, Helvetica-Bold (0 where unassigned)
const HELVETICA_BOLD_HIGH_WIDTHS: [u16; 32] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 80-8F
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 90-9F
];

/// Every Courier glyph has the same advance
const COURIER_WIDTH: u16 = 600;

/// Width used for Latin-1 glyphs outside the ASCII tables
const FALLBACK_WIDTH: u16 = 556;

/// Base-14 fonts available to the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
    Courier,
}

impl StandardFont {
    /// PostScript name written to the font dictionary
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    /// Whether every glyph has the same advance width
    pub fn is_monospaced(&self) -> bool {
        matches!(self, StandardFont::Courier)
    }

    /// Advance width of a character in 1/1000 em
    pub fn char_width(&self, c: char) -> u16 {
        if self.is_monospaced() {
            return COURIER_WIDTH;
        }

        let (ascii, high) = match self {
            StandardFont::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_HIGH_WIDTHS),
            _ => (&HELVETICA_WIDTHS, &HELVETICA_HIGH_WIDTHS),
        };

        match win_ansi_code(c) {
            code @ 32..=126 => ascii[(code - 32) as usize],
            code @ 0x80..=0x9F => high[(code - 0x80) as usize],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in points at `size`
    pub fn text_width_points(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }

    /// Font dictionary for the page resources
    pub fn to_pdf_dictionary(&self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font_name(),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}
