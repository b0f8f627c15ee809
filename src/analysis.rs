//! Still-image color identification
//!
//! A photo is analyzed once: a point of interest is chosen (the image
//! center, a tapped point, or the peak of a saliency map) and a wider window
//! than the live reticle is averaged around it. No smoothing is involved.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScanConfig;
use crate::frame::{sampler, FrameSampler, SaliencyMap, SamplePoint};
use crate::image_loader::{load_image, DecodedImage};
use crate::{describe, AnalysisError, NamedColor, Result};

/// Where in the image to sample
#[derive(Debug, Clone, Copy)]
pub enum PointOfInterest<'a> {
    /// Image center
    Center,
    /// Explicit pixel coordinates
    Point(SamplePoint),
    /// Most salient cell of an attention map, scaled to the image
    Saliency(&'a SaliencyMap),
}

/// Named color of a still image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub color: NamedColor,
    /// Center of the sampled window in image pixels
    pub point: SamplePoint,
    /// In-bounds pixels averaged
    pub pixel_count: usize,
}

/// Samples and names the color at a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAnalyzer {
    sampler: FrameSampler,
}

impl Default for ImageAnalyzer {
    fn default() -> Self {
        Self {
            sampler: FrameSampler::still(),
        }
    }
}

impl ImageAnalyzer {
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero-sized window
    pub fn new(window: u32) -> Result<Self> {
        Ok(Self {
            sampler: FrameSampler::new(window)?,
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(config.sampling.still_window)
    }

    pub fn window(&self) -> u32 {
        self.sampler.window()
    }

    /// Name the color around a point of interest
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a saliency map has no salient cell and
    /// `OutOfBounds` if the window misses the image
    pub fn analyze(
        &self,
        image: &DecodedImage,
        point: PointOfInterest<'_>,
    ) -> Result<AnalysisResult> {
        let view = image.view()?;
        let point = match point {
            PointOfInterest::Center => SamplePoint::center_of(image.width(), image.height()),
            PointOfInterest::Point(point) => point,
            PointOfInterest::Saliency(map) => map
                .salient_point(image.width(), image.height())
                .ok_or_else(|| {
                    AnalysisError::invalid_parameter("saliency_map", "no positive score")
                })?,
        };

        let window = sampler::sample(&view, point, self.sampler.window())?;
        let color = describe(window.color);
        debug!(
            "Sampled {} pixels at ({:.1}, {:.1}): {} {}",
            window.pixel_count, point.x, point.y, color.name, color.hex
        );

        Ok(AnalysisResult {
            color,
            point,
            pixel_count: window.pixel_count,
        })
    }
}

/// Load an image file and name the color at a point of interest
///
/// Uses the default still-image window.
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `point` - Where to sample
///
/// # Errors
///
/// Returns `ImageLoadError` if the file cannot be decoded, otherwise the
/// errors of [`ImageAnalyzer::analyze`]
pub fn analyze_image(path: &Path, point: PointOfInterest<'_>) -> Result<AnalysisResult> {
    let image = load_image(path)?;
    ImageAnalyzer::default().analyze(&image, point)
}
