//! Color space conversion utilities
//!
//! Provides conversions between the representations the scanner needs:
//! - RGB to HSB and back
//! - Hex color representation and parsing
//! - RGB to CIE Lab and ΔE76 color difference

use palette::{FromColor, Hsv, Lab, Srgb};

use super::sample::{ColorSample, Hsb};
use crate::{AnalysisError, Result};

/// Convert RGB to hue/saturation/brightness
///
/// Goes through `palette`'s HSV model: brightness is the largest channel,
/// saturation the channel spread relative to brightness, hue the angle on
/// the color wheel as a fraction of a full turn. Achromatic colors get hue 0.
///
/// # Arguments
///
/// * `sample` - RGB color with components in [0, 1]
///
/// # Returns
///
/// HSB color with hue in [0, 1)
pub fn rgb_to_hsb(sample: ColorSample) -> Hsb {
    let hsv = Hsv::from_color(Srgb::from(sample));
    let mut hue = hsv.hue.into_positive_degrees() / 360.0;

    // Rounding can land exactly on a full turn
    if hue >= 1.0 {
        hue -= 1.0;
    }

    Hsb::new(hue, hsv.saturation, hsv.value)
}

/// Convert hue/saturation/brightness back to RGB
pub fn hsb_to_rgb(hsb: Hsb) -> ColorSample {
    let hsv = Hsv::new(hsb.hue * 360.0, hsb.saturation, hsb.brightness);
    Srgb::from_color(hsv).into()
}

/// Scale a normalized channel to 0-255, rounding to the nearest integer
pub fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a sample to a hexadecimal color string
///
/// Each channel is rounded to the nearest 8-bit value; alpha is not encoded.
///
/// # Returns
///
/// Hex color string (e.g., "#FF0000")
pub fn to_hex(sample: ColorSample) -> String {
    let [r, g, b] = sample.to_u8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse hexadecimal color string to a sample
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#FF0000" or "FF0000")
///
/// # Errors
///
/// Returns `ColorConversionError` if the string is not six hex digits
pub fn parse_hex(hex: &str) -> Result<ColorSample> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(AnalysisError::ColorConversionError {
            message: format!("Invalid hex color '{}': expected 6 hex digits", hex),
        });
    }

    let channel = |range: std::ops::Range<usize>, label: &str| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| AnalysisError::ColorConversionError {
            message: format!("Invalid {} value in '{}': {}", label, hex, e),
        })
    };

    Ok(ColorSample::from_u8(
        channel(0..2, "red")?,
        channel(2..4, "green")?,
        channel(4..6, "blue")?,
    ))
}

/// Convert a sample to CIE Lab (D65)
pub fn to_lab(sample: ColorSample) -> Lab {
    Lab::from_color(Srgb::from(sample))
}

/// Compute Delta E (color difference) between two Lab colors
///
/// Uses simple Euclidean distance (ΔE76)
pub fn delta_e(lab1: Lab, lab2: Lab) -> f32 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rgb_to_hsb_primaries() {
        let red = rgb_to_hsb(ColorSample::new(1.0, 0.0, 0.0));
        assert_eq!(red, Hsb::new(0.0, 1.0, 1.0));

        let green = rgb_to_hsb(ColorSample::new(0.0, 1.0, 0.0));
        assert_close(green.hue, 1.0 / 3.0);

        let blue = rgb_to_hsb(ColorSample::new(0.0, 0.0, 1.0));
        assert_close(blue.hue, 2.0 / 3.0);
    }

    #[test]
    fn test_rgb_to_hsb_gray_has_no_hue() {
        let gray = rgb_to_hsb(ColorSample::new(0.5, 0.5, 0.5));
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert_eq!(gray.brightness, 0.5);

        let black = rgb_to_hsb(ColorSample::new(0.0, 0.0, 0.0));
        assert_eq!(black, Hsb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_to_hsb_wraps_below_red() {
        // Magenta-red: blue slightly above green puts the hue near 1.0
        let hsb = rgb_to_hsb(ColorSample::new(1.0, 0.0, 0.1));
        assert!(hsb.hue > 0.98 && hsb.hue < 1.0);
    }

    #[test]
    fn test_dark_orange_hsb() {
        let hsb = rgb_to_hsb(ColorSample::new(0.2, 0.15, 0.1));
        assert_close(hsb.brightness, 0.2);
        assert_close(hsb.saturation, 0.5);
        assert_close(hsb.hue, 1.0 / 12.0);
    }

    #[test]
    fn test_magenta_hue_lands_in_magenta_arc() {
        let hsb = rgb_to_hsb(ColorSample::new(1.0, 0.0, 1.0));
        assert_close(hsb.hue, 5.0 / 6.0);
    }

    #[test]
    fn test_hsb_round_trip() {
        let original = ColorSample::new(0.3, 0.6, 0.9);
        let back = hsb_to_rgb(rgb_to_hsb(original));
        assert_close(back.red, original.red);
        assert_close(back.green, original.green);
        assert_close(back.blue, original.blue);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(ColorSample::new(1.0, 0.0, 0.0)), "#FF0000");
        assert_eq!(to_hex(ColorSample::new(0.0, 0.0, 0.0)), "#000000");
        assert_eq!(to_hex(ColorSample::new(0.0, 0.0, 1.0)), "#0000FF");
    }

    #[test]
    fn test_to_hex_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds up, 0.498 * 255 = 126.99 rounds up to 127
        assert_eq!(to_hex(ColorSample::new(0.5, 0.498, 0.0)), "#807F00");
    }

    #[test]
    fn test_parse_hex() {
        let red = parse_hex("#FF0000").unwrap();
        assert_eq!(red, ColorSample::new(1.0, 0.0, 0.0));

        let green = parse_hex("00ff00").unwrap();
        assert_eq!(green, ColorSample::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("#FF").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
        assert!(parse_hex("#------").is_err());
        assert!(parse_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_delta_e() {
        let white = to_lab(ColorSample::new(1.0, 1.0, 1.0));
        assert!(white.l > 99.0);
        assert!(delta_e(white, white) < 0.001);

        let black = to_lab(ColorSample::new(0.0, 0.0, 0.0));
        assert!(delta_e(white, black) > 90.0);
    }
}
