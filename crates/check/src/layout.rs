//! Check layout and draw planning
//!
//! A [`CheckLayout`] describes where every field of a check goes. Positions
//! are in inches relative to the top-left corner of the check area, with `y`
//! growing downward to the text baseline. [`CheckLayout::plan`] turns a
//! record into absolute [`DrawOp`]s in page points (top-origin).

use crate::signature::SignatureOutcome;
use crate::{CheckError, CheckRecord, Result};
use amount_words::format_rupees;
use pdf_core::{inch, Align, ImageScaleMode, ImageXObject, PageSize, StandardFont};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Position and size of the check on the page, in inches from the page's
/// top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CheckArea {
    fn default() -> Self {
        Self {
            x: 0.75,
            y: 1.0,
            width: 6.0,
            height: 2.75,
        }
    }
}

/// Where and how one line of text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSlot {
    /// Anchor x (inches from the check's left edge)
    pub x: f64,
    /// Baseline y (inches from the check's top edge)
    pub y: f64,
    pub font: StandardFont,
    /// Font size in points
    pub size: f32,
    pub align: Align,
}

impl TextSlot {
    fn new(x: f64, y: f64, font: StandardFont, size: f32, align: Align) -> Self {
        Self {
            x,
            y,
            font,
            size,
            align,
        }
    }
}

impl Default for TextSlot {
    fn default() -> Self {
        Self::new(0.0, 0.0, StandardFont::Helvetica, 10.0, Align::Left)
    }
}

/// Box the signature image is fitted into (inches, top-left anchored)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A straight line (inches)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSpec {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Fixed label text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub date: String,
    pub payee: String,
    pub amount: String,
    pub memo: String,
    pub signature: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            date: "Date: ".to_string(),
            payee: "Pay to the order of: ".to_string(),
            amount: "Rupees: ".to_string(),
            memo: "Memo: ".to_string(),
            signature: "Signature:".to_string(),
        }
    }
}

/// Complete check layout
///
/// Every field has a default, so a JSON layout only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckLayout {
    pub page_size: PageSize,
    pub check: CheckArea,
    /// Stroke width in points
    pub line_width: f64,
    pub date: TextSlot,
    pub payee: TextSlot,
    pub amount: TextSlot,
    pub amount_words: TextSlot,
    pub memo: TextSlot,
    pub signature_label: TextSlot,
    pub signature_box: ImageBox,
    /// Drawn instead of the signature image
    pub signature_line: LineSpec,
    pub bank: TextSlot,
    pub micr: TextSlot,
    pub labels: Labels,
    /// Drawn when the record has no bank name
    pub bank_placeholder: String,
    /// Between routing, account and check numbers
    pub micr_separator: String,
}

impl Default for CheckLayout {
    fn default() -> Self {
        use Align::*;
        use StandardFont::*;

        let area = CheckArea::default();
        let right = area.width - 0.3;
        let bottom = area.height;

        Self {
            page_size: PageSize::Letter,
            check: area,
            line_width: 1.0,
            date: TextSlot::new(right, 0.3, Helvetica, 10.0, Right),
            payee: TextSlot::new(0.3, 0.7, Helvetica, 10.0, Left),
            amount: TextSlot::new(right, 0.7, HelveticaBold, 12.0, Right),
            amount_words: TextSlot::new(0.3, 1.15, Helvetica, 10.0, Left),
            memo: TextSlot::new(0.3, bottom - 0.6, Helvetica, 10.0, Left),
            signature_label: TextSlot::new(area.width - 2.3, bottom - 0.6, Helvetica, 10.0, Left),
            signature_box: ImageBox {
                x: area.width - 1.8,
                y: bottom - 0.85,
                width: 1.6,
                height: 0.6,
            },
            signature_line: LineSpec {
                x1: area.width - 2.3,
                y1: bottom - 0.4,
                x2: right,
                y2: bottom - 0.4,
            },
            bank: TextSlot::new(0.3, bottom - 0.25, Helvetica, 10.0, Left),
            micr: TextSlot::new(area.width / 2.0, bottom - 0.05, Courier, 12.0, Center),
            labels: Labels::default(),
            bank_placeholder: "Your Bank Name".to_string(),
            micr_separator: "  ".to_string(),
        }
    }
}

/// A single drawing instruction in page points, measured from the top-left
/// corner of the page
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Stroked rectangle anchored at its top-left corner
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Text on a baseline at `y`
    Text {
        text: String,
        x: f64,
        y: f64,
        font: StandardFont,
        size: f32,
        align: Align,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Image fitted into a box anchored at its top-left corner
    Image {
        image: ImageXObject,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mode: ImageScaleMode,
    },
}

impl CheckLayout {
    /// Parse a layout from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the layout as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that sizes are positive and coordinates are finite
    pub fn validate(&self) -> Result<()> {
        let (page_width, page_height) = self.page_size.dimensions();
        if !(page_width > 0.0 && page_height > 0.0) {
            return Err(CheckError::Layout(format!(
                "page size must be positive, got {page_width} x {page_height}"
            )));
        }

        let area = &self.check;
        if !(area.width > 0.0 && area.height > 0.0) {
            return Err(CheckError::Layout(format!(
                "check size must be positive, got {} x {}",
                area.width, area.height
            )));
        }

        if !(self.line_width > 0.0) {
            return Err(CheckError::Layout(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }

        let slots = [
            ("date", &self.date),
            ("payee", &self.payee),
            ("amount", &self.amount),
            ("amountWords", &self.amount_words),
            ("memo", &self.memo),
            ("signatureLabel", &self.signature_label),
            ("bank", &self.bank),
            ("micr", &self.micr),
        ];
        for (name, slot) in slots {
            if !(slot.x.is_finite() && slot.y.is_finite()) {
                return Err(CheckError::Layout(format!("{name}: position must be finite")));
            }
            if !(slot.size > 0.0) {
                return Err(CheckError::Layout(format!(
                    "{name}: font size must be positive, got {}",
                    slot.size
                )));
            }
        }

        let sig = &self.signature_box;
        if !(sig.width > 0.0 && sig.height > 0.0) {
            return Err(CheckError::Layout(format!(
                "signatureBox: size must be positive, got {} x {}",
                sig.width, sig.height
            )));
        }

        Ok(())
    }

    /// Absolute x in points for an offset in inches from the check's left edge
    fn page_x(&self, x: f64) -> f64 {
        inch(self.check.x + x)
    }

    /// Absolute y in points for an offset in inches from the check's top edge
    fn page_y(&self, y: f64) -> f64 {
        inch(self.check.y + y)
    }

    fn text(&self, slot: &TextSlot, text: String) -> DrawOp {
        DrawOp::Text {
            text,
            x: self.page_x(slot.x),
            y: self.page_y(slot.y),
            font: slot.font,
            size: slot.size,
            align: slot.align,
        }
    }

    /// The routing, account and check numbers joined into one line
    pub fn micr_line(&self, record: &CheckRecord) -> String {
        [
            record.routing_number.as_str(),
            record.account_number.as_str(),
            record.check_number.as_str(),
        ]
        .join(&self.micr_separator)
    }

    /// Plan every draw operation for a record
    ///
    /// Operations come out in drawing order: border, date, payee, amount,
    /// amount in words, memo, signature label, signature image or line,
    /// bank name and the MICR-style line.
    pub fn plan(&self, record: &CheckRecord, signature: &SignatureOutcome) -> Vec<DrawOp> {
        let labels = &self.labels;
        let mut ops = Vec::with_capacity(10);

        ops.push(DrawOp::Rect {
            x: self.page_x(0.0),
            y: self.page_y(0.0),
            width: inch(self.check.width),
            height: inch(self.check.height),
        });

        ops.push(self.text(&self.date, format!("{}{}", labels.date, record.date)));
        ops.push(self.text(&self.payee, format!("{}{}", labels.payee, record.payee)));
        ops.push(self.text(&self.amount, format!("{}{}", labels.amount, record.amount)));
        ops.push(self.text(&self.amount_words, format_rupees(&record.amount)));
        ops.push(self.text(&self.memo, format!("{}{}", labels.memo, record.memo)));
        ops.push(self.text(&self.signature_label, labels.signature.clone()));

        match signature {
            SignatureOutcome::Image(sig) => {
                let bx = &self.signature_box;
                ops.push(DrawOp::Image {
                    image: sig.image().clone(),
                    x: self.page_x(bx.x),
                    y: self.page_y(bx.y),
                    width: inch(bx.width),
                    height: inch(bx.height),
                    mode: ImageScaleMode::FitBox,
                });
            }
            SignatureOutcome::Line => {
                let line = &self.signature_line;
                ops.push(DrawOp::Line {
                    x1: self.page_x(line.x1),
                    y1: self.page_y(line.y1),
                    x2: self.page_x(line.x2),
                    y2: self.page_y(line.y2),
                });
            }
        }

        let bank = record
            .bank
            .as_deref()
            .filter(|bank| !bank.trim().is_empty())
            .unwrap_or(self.bank_placeholder.as_str());
        ops.push(self.text(&self.bank, bank.to_string()));

        ops.push(self.text(&self.micr, self.micr_line(record)));

        ops
    }
}
