//! Raw frame access and window sampling
//!
//! Camera pipelines hand over row-major pixel buffers whose rows may be
//! padded and whose channel order depends on the capture format. This module
//! wraps such a buffer in a validated, stride-aware view and samples small
//! pixel windows from it.

pub mod saliency;
pub mod sampler;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

pub use saliency::SaliencyMap;
pub use sampler::FrameSampler;

/// Byte layout of one pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 32-bit blue, green, red, alpha (default camera output)
    #[default]
    Bgra8,
    Rgba8,
    Argb8,
    Abgr8,
    Rgb8,
    Bgr8,
    /// Any other packed layout, given as byte offsets within one pixel
    Custom {
        bytes_per_pixel: u8,
        red: u8,
        green: u8,
        blue: u8,
    },
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Bgra8 | PixelFormat::Rgba8 | PixelFormat::Argb8 | PixelFormat::Abgr8 => 4,
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => 3,
            PixelFormat::Custom { bytes_per_pixel, .. } => *bytes_per_pixel as usize,
        }
    }

    /// Byte offsets of red, green and blue within one pixel
    pub fn channel_offsets(&self) -> [usize; 3] {
        match self {
            PixelFormat::Bgra8 => [2, 1, 0],
            PixelFormat::Rgba8 => [0, 1, 2],
            PixelFormat::Argb8 => [1, 2, 3],
            PixelFormat::Abgr8 => [3, 2, 1],
            PixelFormat::Rgb8 => [0, 1, 2],
            PixelFormat::Bgr8 => [2, 1, 0],
            PixelFormat::Custom {
                red, green, blue, ..
            } => [*red as usize, *green as usize, *blue as usize],
        }
    }

    fn validate(&self) -> Result<()> {
        let bpp = self.bytes_per_pixel();
        if bpp == 0 || self.channel_offsets().iter().any(|&offset| offset >= bpp) {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!("pixel format {:?} has channel offsets outside the pixel", self),
            });
        }
        Ok(())
    }
}

/// Pixel coordinates of a sampling target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a frame, rounded down to whole pixels
    pub fn center_of(width: u32, height: u32) -> Self {
        Self::new((width / 2) as f64, (height / 2) as f64)
    }
}

/// Borrowed, validated view over a row-major pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct PixelBufferView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    bytes_per_row: usize,
    format: PixelFormat,
}

impl<'a> PixelBufferView<'a> {
    /// Wrap a buffer after checking that its metadata fits its length
    ///
    /// # Errors
    ///
    /// Returns `InvalidBuffer` if a dimension is zero, a row stride is
    /// narrower than one row of pixels, or the buffer is too short for the
    /// last row.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        bytes_per_row: usize,
        format: PixelFormat,
    ) -> Result<Self> {
        format.validate()?;

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!("empty frame ({}x{})", width, height),
            });
        }

        let row_bytes = width as usize * format.bytes_per_pixel();
        if bytes_per_row < row_bytes {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!(
                    "row stride {} is smaller than {} bytes of pixel data",
                    bytes_per_row, row_bytes
                ),
            });
        }

        let required = (height as usize - 1) * bytes_per_row + row_bytes;
        if data.len() < required {
            return Err(AnalysisError::InvalidBuffer {
                reason: format!(
                    "buffer holds {} bytes, {}x{} frame needs {}",
                    data.len(),
                    width,
                    height,
                    required
                ),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            bytes_per_row,
            format,
        })
    }

    /// View over a tightly packed buffer (no row padding)
    pub fn packed(data: &'a [u8], width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        Self::new(data, width, height, width as usize * format.bytes_per_pixel(), format)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Red, green and blue of one pixel, or `None` outside the frame
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.rgb_unchecked(x as usize, y as usize))
    }

    /// Caller guarantees `x < width` and `y < height`
    pub(crate) fn rgb_unchecked(&self, x: usize, y: usize) -> [u8; 3] {
        let base = y * self.bytes_per_row + x * self.format.bytes_per_pixel();
        let [r, g, b] = self.format.channel_offsets();
        [self.data[base + r], self.data[base + g], self.data[base + b]]
    }
}

/// Owned frame handed from a capture callback to a scanning worker
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub bytes_per_row: usize,
    pub format: PixelFormat,
    pub captured_at: Instant,
}

impl Frame {
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        bytes_per_row: usize,
        format: PixelFormat,
    ) -> Self {
        Self {
            data,
            width,
            height,
            bytes_per_row,
            format,
            captured_at: Instant::now(),
        }
    }

    /// Frame filled with a single color, tightly packed
    pub fn solid(width: u32, height: u32, format: PixelFormat, rgb: [u8; 3]) -> Self {
        let bpp = format.bytes_per_pixel();
        let mut pixel = vec![0xFF; bpp];
        for (offset, value) in format.channel_offsets().into_iter().zip(rgb) {
            if offset < bpp {
                pixel[offset] = value;
            }
        }
        let data = pixel.repeat(width as usize * height as usize);
        Self::new(data, width, height, width as usize * bpp, format)
    }

    pub fn view(&self) -> Result<PixelBufferView<'_>> {
        PixelBufferView::new(
            &self.data,
            self.width,
            self.height,
            self.bytes_per_row,
            self.format,
        )
    }
}
