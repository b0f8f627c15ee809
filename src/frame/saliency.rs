//! Point of interest from an attention map
//!
//! Saliency maps are produced elsewhere (typically a platform vision
//! framework) at a lower resolution than the image they describe. This
//! module only finds the strongest cell and scales it back to image pixels.

use super::SamplePoint;
use crate::{AnalysisError, Result};

/// Row-major grid of saliency scores
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyMap {
    values: Vec<f32>,
    width: u32,
    height: u32,
}

impl SaliencyMap {
    /// # Errors
    ///
    /// Returns `InvalidBuffer` if `values` does not hold exactly
    /// `width * height` scores
    pub fn new(values: Vec<f32>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || values.len() != expected {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!(
                    "saliency map {}x{} needs {} scores, got {}",
                    width,
                    height,
                    expected,
                    values.len()
                ),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Read a map of native-endian `f32` scores with a row stride in bytes
    pub fn from_bytes(data: &[u8], width: u32, height: u32, bytes_per_row: usize) -> Result<Self> {
        const CELL: usize = std::mem::size_of::<f32>();
        let row_bytes = width as usize * CELL;
        if bytes_per_row < row_bytes {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!(
                    "saliency row stride {} is smaller than {} bytes",
                    bytes_per_row, row_bytes
                ),
            });
        }
        if height == 0 || data.len() < (height as usize - 1) * bytes_per_row + row_bytes {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!("saliency buffer of {} bytes is too short", data.len()),
            });
        }

        let values = (0..height as usize)
            .flat_map(move |row| {
                let start = row * bytes_per_row;
                data[start..start + row_bytes].chunks_exact(CELL)
            })
            .map(|cell| f32::from_ne_bytes([cell[0], cell[1], cell[2], cell[3]]))
            .collect();

        Self::new(values, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell with the highest positive score
    ///
    /// Scanning is row-major and only a strictly higher score replaces the
    /// current best, so ties resolve to the first cell. A map without any
    /// positive score has no salient point.
    pub fn most_salient(&self) -> Option<(u32, u32)> {
        let mut best = 0.0f32;
        let mut found = None;
        for (index, &value) in self.values.iter().enumerate() {
            if value > best {
                best = value;
                found = Some(index);
            }
        }
        found.map(|index| {
            let width = self.width as usize;
            ((index % width) as u32, (index / width) as u32)
        })
    }

    /// Most salient cell scaled to a `image_width × image_height` image
    pub fn salient_point(&self, image_width: u32, image_height: u32) -> Option<SamplePoint> {
        self.most_salient()
            .map(|cell| self.to_image_point(cell, image_width, image_height))
    }

    /// Scale a map cell to image coordinates
    pub fn to_image_point(&self, (x, y): (u32, u32), image_width: u32, image_height: u32) -> SamplePoint {
        SamplePoint::new(
            x as f64 / self.width as f64 * image_width as f64,
            y as f64 / self.height as f64 * image_height as f64,
        )
    }
}
