//! PDF Document wrapper

use crate::graphics::{generate_line_operators, generate_rect_operators};
use crate::image::{
    calculate_scaled_dimensions, generate_image_operators, ImageScaleMode, ImageXObject,
};
use crate::text::{encode_win_ansi_hex, generate_text_operators, TextRenderContext};
use crate::{Align, PdfError, Result, StandardFont};
use log::debug;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::path::Path;

/// Page size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSize {
    /// US Letter, 8.5 x 11 inches
    #[default]
    Letter,
    /// ISO A4
    A4,
    /// Custom size in points
    Custom { width: f64, height: f64 },
}

impl PageSize {
    /// (width, height) in points
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Single-page PDF document
///
/// Drawing operators are buffered and written as one content stream when
/// the document is finished with [`PdfDocument::to_bytes`] or
/// [`PdfDocument::save`].
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// The only page
    page_id: ObjectId,
    /// Page size
    page_size: PageSize,
    /// Current font
    current_font: Option<StandardFont>,
    /// Current font size
    current_font_size: f32,
    /// Current stroke width
    line_width: f64,
    /// Fonts used on the page (font -> resource name)
    font_resources: BTreeMap<StandardFont, String>,
    /// Embedded images (data hash -> resource name)
    embedded_images: HashMap<u64, String>,
    /// Image resources (resource name -> PDF object ID)
    image_resources: BTreeMap<String, ObjectId>,
    /// Buffered content operators
    content: Vec<u8>,
}

impl PdfDocument {
    /// Create a document with one blank page
    pub fn new(page_size: PageSize) -> Self {
        let mut inner = Document::with_version("1.7");
        let (width, height) = page_size.dimensions();

        let pages_id = inner.new_object_id();
        let page_id = inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ],
        });

        inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            page_id,
            page_size,
            current_font: None,
            current_font_size: 12.0,
            line_width: 1.0,
            font_resources: BTreeMap::new(),
            embedded_images: HashMap::new(),
            image_resources: BTreeMap::new(),
            content: Vec::new(),
        }
    }

    /// Page size of the document
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Page height in points
    pub fn page_height(&self) -> f64 {
        self.page_size.dimensions().1
    }

    /// Get a reference to the underlying lopdf document
    pub fn inner(&self) -> &Document {
        &self.inner
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.current_font = Some(font);
        self.current_font_size = size;
    }

    /// Set the stroke width for lines and rectangles
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Width of `text` in the current font and size
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font.ok_or(PdfError::FontNotSet)?;
        Ok(font.text_width_points(text, self.current_font_size) as f64)
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - X coordinate in points (anchor for the alignment)
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        let font = self.current_font.ok_or(PdfError::FontNotSet)?;

        if text.is_empty() {
            return Ok(());
        }

        let font_name = self.get_or_create_font_ref(font);
        let ctx = TextRenderContext {
            font_name: &font_name,
            font_size: self.current_font_size,
            text_width: font.text_width_points(text, self.current_font_size) as f64,
        };

        let pdf_y = self.page_height() - y;
        let operators = generate_text_operators(&encode_win_ansi_hex(text), x, pdf_y, align, &ctx);
        self.content.extend_from_slice(&operators);

        Ok(())
    }

    /// Stroke a straight line between two points (from top)
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let height = self.page_height();
        let operators = generate_line_operators(x1, height - y1, x2, height - y2, self.line_width);
        self.content.extend_from_slice(&operators);
    }

    /// Stroke a rectangle anchored at its top-left corner
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let pdf_y = self.page_height() - y - height;
        let operators = generate_rect_operators(x, pdf_y, width, height, self.line_width);
        self.content.extend_from_slice(&operators);
    }

    /// Insert an image into a box anchored at its top-left corner
    ///
    /// With [`ImageScaleMode::FitBox`] the scaled image is centred in the box.
    ///
    /// # Arguments
    /// * `image` - Decoded image
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points (from top)
    /// * `width` - Box width in points
    /// * `height` - Box height in points
    /// * `mode` - Scaling mode
    pub fn insert_image(
        &mut self,
        image: &ImageXObject,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mode: ImageScaleMode,
    ) {
        let image_resource_name = self.get_or_create_image_ref(image);

        let (actual_width, actual_height) =
            calculate_scaled_dimensions(image.width, image.height, width, height, mode);

        let dx = (width - actual_width) / 2.0;
        let dy = (height - actual_height) / 2.0;
        let pdf_y = self.page_height() - (y + dy) - actual_height;

        let operators = generate_image_operators(
            &image_resource_name,
            x + dx,
            pdf_y,
            actual_width,
            actual_height,
        );
        self.content.extend_from_slice(&operators);
    }

    /// Finish the page and serialize the document
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.finalize_page();

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Finish the page and write the document to a file
    ///
    /// The bytes go to a temporary file next to `path` which is then renamed
    /// over it, so `path` never holds a partially written document.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| PdfError::SaveError(format!("{}: {e}", path.display())))?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(path)
            .map_err(|e| PdfError::SaveError(format!("{}: {}", path.display(), e.error)))?;

        debug!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Get or create the resource name for a font (e.g., "F1")
    fn get_or_create_font_ref(&mut self, font: StandardFont) -> String {
        let next = self.font_resources.len() + 1;
        self.font_resources
            .entry(font)
            .or_insert_with(|| format!("F{next}"))
            .clone()
    }

    /// Get or create the resource name for an image (e.g., "Im1")
    ///
    /// Images are deduplicated by hash of their encoded data.
    fn get_or_create_image_ref(&mut self, image: &ImageXObject) -> String {
        let mut hasher = DefaultHasher::new();
        image.data.hash(&mut hasher);
        let data_hash = hasher.finish();

        if let Some(name) = self.embedded_images.get(&data_hash) {
            return name.clone();
        }

        let object_id = self.inner.add_object(image.to_pdf_stream());
        let resource_name = format!("Im{}", self.image_resources.len() + 1);
        self.image_resources.insert(resource_name.clone(), object_id);
        self.embedded_images.insert(data_hash, resource_name.clone());

        resource_name
    }

    /// Write fonts, images and the buffered content stream into the page
    fn finalize_page(&mut self) {
        let mut font_dict = Dictionary::new();
        for (font, resource_name) in &self.font_resources {
            let font_id = self.inner.add_object(font.to_pdf_dictionary());
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }

        let mut xobject_dict = Dictionary::new();
        for (resource_name, object_id) in &self.image_resources {
            xobject_dict.set(resource_name.as_bytes(), Object::Reference(*object_id));
        }

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_dict));
        resources.set("XObject", Object::Dictionary(xobject_dict));

        let content = std::mem::take(&mut self.content);
        let contents_id = self
            .inner
            .add_object(Stream::new(Dictionary::new(), content));

        if let Ok(Object::Dictionary(page)) = self.inner.get_object_mut(self.page_id) {
            page.set("Resources", Object::Dictionary(resources));
            page.set("Contents", Object::Reference(contents_id));
        }
    }
}
