//! Signature image loading

use crate::{CheckError, Result};
use log::{debug, warn};
use pdf_core::ImageXObject;
use std::path::{Path, PathBuf};

/// A decoded signature image
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    path: PathBuf,
    image: ImageXObject,
}

/// What to draw in the signature area
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureOutcome {
    /// Place the image in the signature box
    Image(Signature),
    /// Draw a plain signature line
    Line,
}

impl Signature {
    /// Read and decode a signature image (PNG, JPEG or BMP)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = std::fs::read(path).map_err(|e| {
            CheckError::Signature(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let image = ImageXObject::from_bytes(&data).map_err(|e| {
            CheckError::Signature(format!("Failed to decode {}: {}", path.display(), e))
        })?;

        debug!(
            "Loaded signature {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Load the signature if one is given, falling back to a line
    ///
    /// Never fails: an unreadable or undecodable image is logged and
    /// replaced by [`SignatureOutcome::Line`].
    pub fn resolve(path: Option<&Path>) -> SignatureOutcome {
        let Some(path) = path else {
            return SignatureOutcome::Line;
        };

        match Self::load(path) {
            Ok(signature) => SignatureOutcome::Image(signature),
            Err(e) => {
                warn!("{e}; drawing a signature line instead");
                SignatureOutcome::Line
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &ImageXObject {
        &self.image
    }
}

impl SignatureOutcome {
    pub fn is_image(&self) -> bool {
        matches!(self, SignatureOutcome::Image(_))
    }
}
