//! Color value types
//!
//! [`ColorSample`] is the plain RGB value passed between the sampler, the
//! smoother and the namer. [`Hsb`] is the derived hue/saturation/brightness
//! view the namer decides on.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::conversion;

/// Normalized RGB color with an implicit alpha of 1.0
///
/// Components are clamped to [0, 1] on construction and on deserialization.
/// Two samples with equal components are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChannels")]
pub struct ColorSample {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ColorSample {
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
        }
    }

    /// Build a sample from 8-bit channel values
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
        )
    }

    /// Alpha is always opaque
    pub fn alpha(&self) -> f32 {
        1.0
    }

    /// Hue/saturation/brightness view of this sample
    pub fn to_hsb(&self) -> Hsb {
        conversion::rgb_to_hsb(*self)
    }

    /// `#RRGGBB` representation, see [`conversion::to_hex`]
    pub fn to_hex(&self) -> String {
        conversion::to_hex(*self)
    }

    /// Channel values rounded to 8 bits
    pub fn to_u8(&self) -> [u8; 3] {
        [
            conversion::channel_to_u8(self.red),
            conversion::channel_to_u8(self.green),
            conversion::channel_to_u8(self.blue),
        ]
    }
}

#[derive(Deserialize)]
struct RawChannels {
    red: f32,
    green: f32,
    blue: f32,
}

impl From<RawChannels> for ColorSample {
    fn from(raw: RawChannels) -> Self {
        ColorSample::new(raw.red, raw.green, raw.blue)
    }
}

impl From<ColorSample> for Srgb {
    fn from(sample: ColorSample) -> Self {
        Srgb::new(sample.red, sample.green, sample.blue)
    }
}

impl From<Srgb> for ColorSample {
    fn from(srgb: Srgb) -> Self {
        ColorSample::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// Hue/saturation/brightness coordinates
///
/// Hue is a fraction of the full circle in [0, 1); saturation and brightness
/// are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert back to RGB
    pub fn to_rgb(&self) -> ColorSample {
        conversion::hsb_to_rgb(*self)
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
