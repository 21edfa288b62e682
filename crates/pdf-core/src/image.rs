//! Raster images as PDF XObjects

use crate::{PdfError, Result};
use image::DynamicImage;
use lopdf::{dictionary, Stream};
use std::io::Write;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const BMP_MAGIC: &[u8] = b"BM";

/// Image file format, recognised by its signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
}

/// How an image fills the box it is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Fill the box exactly
    #[default]
    Stretch,
    /// Keep the aspect ratio and fit inside the box
    FitBox,
}

/// Device colour space of the decoded samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
        }
    }
}

/// Stream filter the image data is encoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFilter {
    /// JPEG data embedded unchanged
    Dct,
    /// Zlib-compressed 8-bit samples
    Flate,
}

impl ImageFilter {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ImageFilter::Dct => "DCTDecode",
            ImageFilter::Flate => "FlateDecode",
        }
    }
}

/// Size of an image drawn into a `target_width` x `target_height` box
///
/// Returns (width, height) in points.
pub fn calculate_scaled_dimensions(
    pixel_width: u32,
    pixel_height: u32,
    target_width: f64,
    target_height: f64,
    mode: ImageScaleMode,
) -> (f64, f64) {
    match mode {
        ImageScaleMode::Stretch => (target_width, target_height),
        ImageScaleMode::FitBox => {
            let (w, h) = (pixel_width as f64, pixel_height as f64);
            let scale = (target_width / w).min(target_height / h);
            (w * scale, h * scale)
        }
    }
}

/// Recognise JPEG, PNG and BMP data by their leading bytes
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.starts_with(JPEG_MAGIC) {
        Ok(ImageFormat::Jpeg)
    } else if data.starts_with(PNG_MAGIC) {
        Ok(ImageFormat::Png)
    } else if data.len() > 2 && data.starts_with(BMP_MAGIC) {
        Ok(ImageFormat::Bmp)
    } else {
        Err(PdfError::ImageError("Unknown image format".to_string()))
    }
}

/// Frame header of a JPEG file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JpegHeader {
    width: u32,
    height: u32,
    components: u8,
}

impl JpegHeader {
    /// Walk the marker segments up to the first start-of-frame
    fn parse(data: &[u8]) -> Option<Self> {
        let mut pos = 2;

        loop {
            let segment = data.get(pos..)?;
            if segment.first()? != &0xFF {
                pos += 1;
                continue;
            }

            let marker = *segment.get(1)?;
            let length = u16::from_be_bytes([*segment.get(2)?, *segment.get(3)?]) as usize;

            // SOF0..SOF15, except DHT, JPG and DAC
            if matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
                let frame = segment.get(4..10)?;
                return Some(Self {
                    height: u16::from_be_bytes([frame[1], frame[2]]) as u32,
                    width: u16::from_be_bytes([frame[3], frame[4]]) as u32,
                    components: frame[5],
                });
            }

            if length < 2 {
                return None;
            }
            pos += 2 + length;
        }
    }
}

/// An image ready to be embedded as a PDF XObject
#[derive(Debug, Clone, PartialEq)]
pub struct ImageXObject {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub color_space: ColorSpace,
    pub filter: ImageFilter,
    /// Encoded sample data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Decode a JPEG, PNG or BMP file
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let xobject = match detect_format(data)? {
            ImageFormat::Jpeg => Self::from_jpeg(data)?,
            ImageFormat::Png | ImageFormat::Bmp => Self::from_raster(data)?,
        };

        if xobject.width == 0 || xobject.height == 0 {
            return Err(PdfError::ImageError("Image has zero size".to_string()));
        }

        Ok(xobject)
    }

    /// Embed a gray or RGB JPEG unchanged
    ///
    /// The file is fully decoded once so a damaged JPEG is rejected here
    /// rather than by the PDF reader. CMYK and other layouts are re-encoded.
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        let header = JpegHeader::parse(data)
            .ok_or_else(|| PdfError::ImageError("Could not parse JPEG header".to_string()))?;

        let color_space = match header.components {
            1 => ColorSpace::DeviceGray,
            3 => ColorSpace::DeviceRgb,
            _ => return Self::from_raster(data),
        };

        image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)?;

        Ok(Self {
            width: header.width,
            height: header.height,
            color_space,
            filter: ImageFilter::Dct,
            data: data.to_vec(),
        })
    }

    /// Decode any supported raster image and store 8-bit samples with Flate
    ///
    /// Transparent pixels are composited onto white.
    pub fn from_raster(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        let (width, height) = (img.width(), img.height());
        let color = img.color();

        let (color_space, samples) = match (color.has_color(), color.has_alpha()) {
            (false, false) => (ColorSpace::DeviceGray, img.into_luma8().into_raw()),
            (false, true) => (ColorSpace::DeviceGray, flatten_gray_alpha(img)),
            (true, false) => (ColorSpace::DeviceRgb, img.into_rgb8().into_raw()),
            (true, true) => (ColorSpace::DeviceRgb, flatten_rgba(img)),
        };

        Ok(Self {
            width,
            height,
            color_space,
            filter: ImageFilter::Flate,
            data: deflate(&samples)?,
        })
    }

    /// Image XObject stream; the data is already encoded
    pub fn to_pdf_stream(&self) -> Stream {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => self.color_space.pdf_name(),
            "BitsPerComponent" => 8,
            "Filter" => self.filter.pdf_name(),
        };

        Stream::new(dict, self.data.clone()).with_compression(false)
    }
}

fn flatten_gray_alpha(img: DynamicImage) -> Vec<u8> {
    img.into_luma_alpha8()
        .pixels()
        .map(|p| over_white(p[0], p[1]))
        .collect()
}

fn flatten_rgba(img: DynamicImage) -> Vec<u8> {
    img.into_rgba8()
        .pixels()
        .flat_map(|p| {
            let alpha = p[3];
            [
                over_white(p[0], alpha),
                over_white(p[1], alpha),
                over_white(p[2], alpha),
            ]
        })
        .collect()
}

/// Composite one channel value onto white
fn over_white(value: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((value as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}

fn deflate(samples: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(samples)?;
    Ok(encoder.finish()?)
}

/// Operators that paint image resource `name` into a box
///
/// `x`, `y` is the lower-left corner in PDF coordinates.
pub fn generate_image_operators(name: &str, x: f64, y: f64, width: f64, height: f64) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{name} Do\nQ\n").into_bytes()
}
