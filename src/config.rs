//! Configuration structures for the chroma_scan pipeline.
//!
//! This module defines the tunable parameters for live scanning and still
//! image analysis, organized into groups for sampling, smoothing and the
//! background worker.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chroma_scan::ScanConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScanConfig::from_json_file(Path::new("scan.json"))?;
//!
//! // Or use defaults
//! let config = ScanConfig::default();
//! # Ok::<(), chroma_scan::AnalysisError>(())
//! ```
//!
//! Every field has a default, so a partial file such as
//! `{"smoothing": {"history_length": 8}}` is valid.
//!
//! # Configuration Sections
//!
//! - [`SamplingConfig`]: window sizes and camera pixel format
//! - [`SmoothingConfig`]: history length and update interval
//! - [`WorkerConfig`]: live worker queue depth

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{sampling, smoothing};
use crate::frame::PixelFormat;
use crate::{AnalysisError, Result};

/// Complete scanning configuration.
///
/// Can be serialized to/from JSON so a device profile can be shipped
/// alongside the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Window sampling configuration
    pub sampling: SamplingConfig,

    /// Temporal smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Live worker configuration
    pub worker: WorkerConfig,
}

/// Window sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Side of the square window sampled at the live reticle (pixels)
    pub live_window: u32,

    /// Side of the window sampled around a still-image point of interest
    pub still_window: u32,

    /// Channel layout of frames delivered by the camera
    pub pixel_format: PixelFormat,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            live_window: sampling::LIVE_WINDOW,
            still_window: sampling::STILL_WINDOW,
            pixel_format: PixelFormat::Bgra8,
        }
    }
}

/// Temporal smoothing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Number of recent samples averaged together
    pub history_length: usize,

    /// Minimum spacing between smoother updates in milliseconds
    pub update_interval_ms: u64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            history_length: smoothing::HISTORY_LENGTH,
            update_interval_ms: smoothing::UPDATE_INTERVAL.as_millis() as u64,
        }
    }
}

impl SmoothingConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

/// Live worker parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Frames queued for the worker before new frames are dropped
    pub frame_queue: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            frame_queue: smoothing::FRAME_QUEUE,
        }
    }
}

impl ScanConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.sampling.live_window == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.live_window",
                self.sampling.live_window,
            ));
        }
        if self.sampling.still_window == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.still_window",
                self.sampling.still_window,
            ));
        }
        if self.smoothing.history_length == 0 {
            return Err(AnalysisError::invalid_parameter(
                "smoothing.history_length",
                self.smoothing.history_length,
            ));
        }
        if self.worker.frame_queue == 0 {
            return Err(AnalysisError::invalid_parameter(
                "worker.frame_queue",
                self.worker.frame_queue,
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, and
    /// `InvalidParameter` if a value fails validation
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("cannot read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("cannot parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("cannot write {}", path.display()), e)
        })?;
        Ok(())
    }
}
