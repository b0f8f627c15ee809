//! # Chroma Scan
//!
//! A Rust crate for naming the color a camera is pointed at, built for
//! people who cannot reliably tell colors apart.
//!
//! This library turns pixels into a short descriptive name by:
//! - Averaging a small window of pixels around the reticle or a point of interest
//! - Smoothing recent samples so live readings do not flicker
//! - Naming the color from its hue, saturation and brightness ("Dark Vivid Blue")
//! - Deriving a `#RRGGBB` hex code and the closest standard reference color
//!
//! ## Example
//!
//! ```rust,no_run
//! use chroma_scan::{analyze_image, PointOfInterest};
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("photo.jpg"), PointOfInterest::Center)?;
//! println!("{} ({})", result.color.name, result.color.hex);
//! # Ok::<(), chroma_scan::AnalysisError>(())
//! ```
//!
//! Live scanning runs on a worker thread:
//!
//! ```rust,no_run
//! use chroma_scan::{LiveScanner, ScanConfig};
//!
//! let scanner = LiveScanner::spawn(&ScanConfig::default())?;
//! # let (bytes, width, height, stride) = (vec![0u8; 64 * 64 * 4], 64, 64, 256);
//! scanner.submit_bytes(bytes, width, height, stride);
//! println!("{}", scanner.latest_or_placeholder().name);
//! scanner.shutdown()?;
//! # Ok::<(), chroma_scan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod image_loader;
pub mod logger;
pub mod scan;

pub use analysis::{analyze_image, AnalysisResult, ImageAnalyzer, PointOfInterest};
pub use color::{ColorNamer, ColorSample, Hsb};
pub use config::ScanConfig;
pub use error::{AnalysisError, Result};
pub use frame::{Frame, FrameSampler, PixelBufferView, PixelFormat, SaliencyMap, SamplePoint};
pub use scan::{LatestReading, LiveScanner, ScanPipeline, ScanReading, TemporalSmoother, Throttle};

/// Descriptive name and hex code of a color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Human-readable name, e.g. "Light Vivid Green"
    pub name: String,
    /// `#RRGGBB`, or the placeholder before anything was read
    pub hex: String,
    /// The color that was named
    pub color: ColorSample,
}

impl NamedColor {
    /// Reading shown before the first sample arrives
    pub fn placeholder() -> Self {
        Self {
            name: constants::placeholder::NAME.to_string(),
            hex: constants::placeholder::HEX.to_string(),
            color: ColorSample::new(0.0, 0.0, 0.0),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.hex == constants::placeholder::HEX
    }
}

/// Name a color and derive its hex code
pub fn describe(color: ColorSample) -> NamedColor {
    NamedColor {
        name: ColorNamer::new().name(color),
        hex: color.to_hex(),
        color,
    }
}
