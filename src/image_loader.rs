//! Unified image loading for still-image analysis
//!
//! This module provides a single entry point for loading photos from disk
//! and handing them to the frame sampler as a packed RGBA buffer.
//!
//! ## Supported Formats
//!
//! Whatever the `image` crate can decode in this build, detected from the
//! file extension: JPEG, PNG, GIF, WebP, TIFF, BMP and the rest of its
//! default codecs.
//!
//! ## Design
//!
//! Every image is converted to 8-bit RGBA regardless of its source depth or
//! channel layout, so downstream sampling sees a single pixel format. EXIF
//! orientation is NOT applied: saliency maps are computed on the stored
//! pixel grid.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::frame::{PixelBufferView, PixelFormat};

/// Decodable format for a file, from its extension
pub fn detect_format(path: &Path) -> Option<ImageFormat> {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .filter(ImageFormat::reading_enabled)
}

/// Check if a file extension is a decodable format
pub fn is_supported_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext).is_some_and(|format| format.reading_enabled())
}

/// Decoded image as tightly packed 8-bit RGBA rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Sampling view over the pixel data
    ///
    /// # Errors
    ///
    /// Returns `InvalidBuffer` for an image with no pixels
    pub fn view(&self) -> Result<PixelBufferView<'_>> {
        PixelBufferView::packed(&self.data, self.width, self.height, PixelFormat::Rgba8)
    }
}

impl From<RgbaImage> for DecodedImage {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.into_raw(),
            width,
            height,
        }
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        image.to_rgba8().into()
    }
}

/// Load an image from disk as packed RGBA
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// The decoded pixels with their dimensions
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if:
/// - The extension is not a supported format
/// - File cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use chroma_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), chroma_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let format = detect_format(path).ok_or_else(|| AnalysisError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let file = File::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let image = ImageReader::with_format(BufReader::new(file), format)
        .decode()
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
        })?;

    debug!(
        "Loaded {:?} image {}x{} from {}",
        format,
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image.into())
}
