//! Pixel window averaging
//!
//! Averages a small square window of pixels around a target point. Only the
//! window is touched, which keeps per-frame cost constant regardless of the
//! frame resolution.

use super::{PixelBufferView, SamplePoint};
use crate::color::ColorSample;
use crate::constants::sampling;
use crate::{AnalysisError, Result};

/// Samples the average color of a square pixel window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSampler {
    window: u32,
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::live()
    }
}

impl FrameSampler {
    /// Create a sampler with a custom window side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero-sized window
    pub fn new(window: u32) -> Result<Self> {
        if window == 0 {
            return Err(AnalysisError::invalid_parameter("window_size", window));
        }
        Ok(Self { window })
    }

    /// Sampler for the live camera reticle
    pub fn live() -> Self {
        Self {
            window: sampling::LIVE_WINDOW,
        }
    }

    /// Sampler for still images anchored on a point of interest
    pub fn still() -> Self {
        Self {
            window: sampling::STILL_WINDOW,
        }
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// Average color of the window centered on `center`
    pub fn sample(&self, view: &PixelBufferView<'_>, center: SamplePoint) -> Result<ColorSample> {
        sample(view, center, self.window).map(|window| window.color)
    }

    /// Average color of the window at the frame center
    pub fn sample_center(&self, view: &PixelBufferView<'_>) -> Result<ColorSample> {
        self.sample(view, SamplePoint::center_of(view.width(), view.height()))
    }
}

/// Average of one sampled window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSample {
    pub color: ColorSample,
    /// In-bounds pixels that contributed to the average
    pub pixel_count: usize,
}

/// Average the `window × window` pixels around `center`
///
/// The window origin is `floor(center) - window / 2`. Pixels that fall
/// outside the frame are skipped, not clamped, so a window at the edge
/// averages only the pixels it actually covers.
///
/// # Errors
///
/// Returns `OutOfBounds` if no pixel of the window lies inside the frame
pub fn sample(view: &PixelBufferView<'_>, center: SamplePoint, window: u32) -> Result<WindowSample> {
    if window == 0 {
        return Err(AnalysisError::invalid_parameter("window_size", window));
    }

    // Casts saturate, so far-away points stay far away
    let cx = center.x.floor() as i64;
    let cy = center.y.floor() as i64;
    let half = (window / 2) as i64;
    let origin_x = cx.saturating_sub(half);
    let origin_y = cy.saturating_sub(half);

    let x_start = origin_x.max(0);
    let x_end = origin_x.saturating_add(window as i64).min(view.width() as i64);
    let y_start = origin_y.max(0);
    let y_end = origin_y.saturating_add(window as i64).min(view.height() as i64);

    let finite = center.x.is_finite() && center.y.is_finite();
    if !finite || x_start >= x_end || y_start >= y_end {
        return Err(AnalysisError::OutOfBounds {
            x: cx,
            y: cy,
            window,
            width: view.width(),
            height: view.height(),
        });
    }

    let mut totals = [0u64; 3];
    for y in y_start as usize..y_end as usize {
        for x in x_start as usize..x_end as usize {
            let rgb = view.rgb_unchecked(x, y);
            for (total, value) in totals.iter_mut().zip(rgb) {
                *total += value as u64;
            }
        }
    }

    let pixel_count = ((x_end - x_start) * (y_end - y_start)) as usize;
    let mean = |total: u64| (total as f64 / pixel_count as f64 / 255.0) as f32;

    Ok(WindowSample {
        color: ColorSample::new(mean(totals[0]), mean(totals[1]), mean(totals[2])),
        pixel_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Frame, PixelFormat};

    /// 4x4 RGB gradient: red = 10 * x, green = 10 * y, blue = 100
    fn gradient() -> Vec<u8> {
        let mut data = Vec::new();
        for y in 0..4u8 {
            for x in 0..4u8 {
                data.extend_from_slice(&[10 * x, 10 * y, 100]);
            }
        }
        data
    }

    fn assert_channel(actual: f32, expected_u8: f64) {
        let expected = (expected_u8 / 255.0) as f32;
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_uniform_window() {
        let frame = Frame::solid(64, 48, PixelFormat::Bgra8, [200, 100, 50]);
        let view = frame.view().unwrap();
        let color = FrameSampler::live().sample_center(&view).unwrap();
        assert_eq!(color, ColorSample::from_u8(200, 100, 50));
    }

    #[test]
    fn test_window_mean_is_unweighted() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        // Window 2 at (2, 2) covers x, y in 1..3
        let result = sample(&view, SamplePoint::new(2.0, 2.0), 2).unwrap();
        assert_eq!(result.pixel_count, 4);
        assert_channel(result.color.red, 15.0);
        assert_channel(result.color.green, 15.0);
        assert_channel(result.color.blue, 100.0);
    }

    #[test]
    fn test_edge_window_skips_outside_pixels() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        // Window 4 at (0, 0) covers -2..2 on both axes: only 2x2 pixels inside
        let result = sample(&view, SamplePoint::new(0.0, 0.0), 4).unwrap();
        assert_eq!(result.pixel_count, 4);
        assert_channel(result.color.red, 5.0);
        assert_channel(result.color.green, 5.0);
    }

    #[test]
    fn test_window_larger_than_frame() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        let result = sample(&view, SamplePoint::new(2.0, 2.0), 20).unwrap();
        assert_eq!(result.pixel_count, 16);
        assert_channel(result.color.red, 15.0);
        assert_channel(result.color.green, 15.0);
    }

    #[test]
    fn test_fractional_center_floors() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        let a = sample(&view, SamplePoint::new(2.9, 2.1), 2).unwrap();
        let b = sample(&view, SamplePoint::new(2.0, 2.0), 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_bounds() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        let err = sample(&view, SamplePoint::new(50.0, 50.0), 10).unwrap_err();
        assert!(matches!(err, AnalysisError::OutOfBounds { x: 50, y: 50, .. }));

        let err = sample(&view, SamplePoint::new(-6.0, 1.0), 10).unwrap_err();
        assert!(err.is_recoverable());

        // Window reaching exactly to the edge but not past it
        assert!(sample(&view, SamplePoint::new(-5.0, 1.0), 10).is_err());
        assert!(sample(&view, SamplePoint::new(-4.0, 1.0), 10).is_ok());
    }

    #[test]
    fn test_distant_points_are_out_of_bounds() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();

        for point in [
            SamplePoint::new(1e30, 0.0),
            SamplePoint::new(-1e30, 0.0),
            SamplePoint::new(0.0, 1e30),
            SamplePoint::new(0.0, -1e30),
            SamplePoint::new(f64::INFINITY, 0.0),
            SamplePoint::new(0.0, f64::NEG_INFINITY),
            SamplePoint::new(f64::NAN, 1.0),
        ] {
            let result = sample(&view, point, 10);
            assert!(
                matches!(result, Err(AnalysisError::OutOfBounds { .. })),
                "{point:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_padded_stride() {
        // 3x2 BGRA frame with 8 bytes of row padding filled with noise
        let width = 3;
        let stride = width * 4 + 8;
        let mut data = vec![0xAB; stride * 2];
        for y in 0..2 {
            for x in 0..width {
                let base = y * stride + x * 4;
                data[base..base + 4].copy_from_slice(&[30, 60, 90, 255]);
            }
        }
        let view = PixelBufferView::new(&data, 3, 2, stride, PixelFormat::Bgra8).unwrap();
        let result = sample(&view, SamplePoint::new(1.0, 1.0), 10).unwrap();
        assert_eq!(result.pixel_count, 6);
        assert_eq!(result.color, ColorSample::from_u8(90, 60, 30));
    }

    #[test]
    fn test_channel_order_honored() {
        for format in [
            PixelFormat::Bgra8,
            PixelFormat::Rgba8,
            PixelFormat::Argb8,
            PixelFormat::Abgr8,
            PixelFormat::Rgb8,
            PixelFormat::Bgr8,
        ] {
            let frame = Frame::solid(8, 8, format, [255, 128, 0]);
            let view = frame.view().unwrap();
            let color = FrameSampler::live().sample_center(&view).unwrap();
            assert_eq!(color, ColorSample::from_u8(255, 128, 0), "{format:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();
        let sampler = FrameSampler::new(3).unwrap();
        let point = SamplePoint::new(1.0, 2.0);
        assert_eq!(sampler.sample(&view, point).unwrap(), sampler.sample(&view, point).unwrap());
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(FrameSampler::new(0).is_err());
        let data = gradient();
        let view = PixelBufferView::packed(&data, 4, 4, PixelFormat::Rgb8).unwrap();
        assert!(matches!(
            sample(&view, SamplePoint::new(1.0, 1.0), 0),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_default_windows() {
        assert_eq!(FrameSampler::default().window(), 10);
        assert_eq!(FrameSampler::still().window(), 20);
    }
}
