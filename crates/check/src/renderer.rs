//! Check rendering

use crate::layout::{CheckLayout, DrawOp};
use crate::signature::Signature;
use crate::{CheckRecord, Result};
use log::debug;
use pdf_core::PdfDocument;
use std::path::Path;

/// Renders check records onto a single PDF page
#[derive(Debug, Clone, Default)]
pub struct CheckRenderer {
    layout: CheckLayout,
}

impl CheckRenderer {
    /// Create a renderer for a layout
    pub fn new(layout: CheckLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &CheckLayout {
        &self.layout
    }

    /// Plan the draw operations for a record
    ///
    /// The signature image is loaded here; if it cannot be used the plan
    /// carries a signature line instead.
    pub fn plan(&self, record: &CheckRecord) -> Vec<DrawOp> {
        let signature = Signature::resolve(record.signature_path.as_deref());
        self.layout.plan(record, &signature)
    }

    /// Draw a record onto a new page
    pub fn render_document(&self, record: &CheckRecord) -> Result<PdfDocument> {
        let mut doc = PdfDocument::new(self.layout.page_size);
        doc.set_line_width(self.layout.line_width);

        for op in self.plan(record) {
            op.apply(&mut doc)?;
        }

        Ok(doc)
    }

    /// Render a record and write it to `path`
    ///
    /// On failure nothing is left at `path`.
    pub fn render<P: AsRef<Path>>(&self, record: &CheckRecord, path: P) -> Result<()> {
        let path = path.as_ref();
        self.render_document(record)?.save(path)?;
        debug!("Rendered check for {:?} to {}", record.payee, path.display());
        Ok(())
    }

    /// Render a record to PDF bytes
    pub fn render_to_bytes(&self, record: &CheckRecord) -> Result<Vec<u8>> {
        Ok(self.render_document(record)?.to_bytes()?)
    }
}

impl DrawOp {
    /// Draw this operation onto a document
    pub fn apply(&self, doc: &mut PdfDocument) -> Result<()> {
        match self {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
            } => doc.draw_rect(*x, *y, *width, *height),
            DrawOp::Text {
                text,
                x,
                y,
                font,
                size,
                align,
            } => {
                doc.set_font(*font, *size);
                doc.insert_text(text, *x, *y, *align)?;
            }
            DrawOp::Line { x1, y1, x2, y2 } => doc.draw_line(*x1, *y1, *x2, *y2),
            DrawOp::Image {
                image,
                x,
                y,
                width,
                height,
                mode,
            } => doc.insert_image(image, *x, *y, *width, *height, *mode),
        }

        Ok(())
    }
}
