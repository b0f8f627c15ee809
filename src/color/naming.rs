//! Descriptive color naming
//!
//! Maps a color to an English name with an ordered decision table over HSB:
//! - Grayscale gate (black, whites and grays)
//! - Hue family from nine contiguous arcs
//! - Brown and pink overrides for specific families
//! - Generic brightness and saturation modifiers
//!
//! Every branch is evaluated top to bottom and the first match wins, so
//! every point of the HSB cube maps to exactly one name.

use std::fmt;

use super::sample::{ColorSample, Hsb};
use crate::constants::{brown, grayscale, hue, modifiers, pink};

/// Base color family selected by hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Red,
    Orange,
    Yellow,
    LimeGreen,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
}

impl ColorFamily {
    /// Pick the family for a hue in [0, 1)
    ///
    /// Red covers both ends of the circle. A hue of exactly
    /// [`hue::RED_WRAP`] closes the circle as red.
    pub fn from_hue(h: f32) -> Self {
        if h < hue::RED_MAX || h > hue::RED_WRAP {
            ColorFamily::Red
        } else if h < hue::ORANGE_MAX {
            ColorFamily::Orange
        } else if h < hue::YELLOW_MAX {
            ColorFamily::Yellow
        } else if h < hue::LIME_GREEN_MAX {
            ColorFamily::LimeGreen
        } else if h < hue::GREEN_MAX {
            ColorFamily::Green
        } else if h < hue::CYAN_MAX {
            ColorFamily::Cyan
        } else if h < hue::BLUE_MAX {
            ColorFamily::Blue
        } else if h < hue::PURPLE_MAX {
            ColorFamily::Purple
        } else if h < hue::MAGENTA_MAX {
            ColorFamily::Magenta
        } else {
            ColorFamily::Red
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorFamily::Red => "Red",
            ColorFamily::Orange => "Orange",
            ColorFamily::Yellow => "Yellow",
            ColorFamily::LimeGreen => "Lime Green",
            ColorFamily::Green => "Green",
            ColorFamily::Cyan => "Cyan",
            ColorFamily::Blue => "Blue",
            ColorFamily::Purple => "Purple",
            ColorFamily::Magenta => "Magenta",
        }
    }

    fn has_brown_override(&self) -> bool {
        matches!(
            self,
            ColorFamily::Orange | ColorFamily::Red | ColorFamily::Yellow
        )
    }

    fn has_pink_override(&self) -> bool {
        matches!(self, ColorFamily::Red | ColorFamily::Magenta)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless color namer
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorNamer;

impl ColorNamer {
    pub fn new() -> Self {
        Self
    }

    /// Generate a descriptive name for an RGB sample
    pub fn name(&self, sample: ColorSample) -> String {
        self.name_hsb(sample.to_hsb())
    }

    /// Generate a descriptive name from HSB coordinates
    pub fn name_hsb(&self, hsb: Hsb) -> String {
        let Hsb {
            hue,
            saturation,
            brightness,
        } = hsb;

        if let Some(gray) = grayscale_name(saturation, brightness) {
            return gray.to_string();
        }

        let family = ColorFamily::from_hue(hue);

        if let Some(special) = family_override(family, saturation, brightness) {
            return special.to_string();
        }

        let mut parts: Vec<&str> = Vec::with_capacity(3);
        parts.extend(brightness_modifier(brightness));
        parts.extend(saturation_modifier(saturation, brightness));
        parts.push(family.name());
        parts.join(" ")
    }

    /// Hue family for a sample, or `None` if it is named as a gray
    pub fn family(&self, sample: ColorSample) -> Option<ColorFamily> {
        let hsb = sample.to_hsb();
        match grayscale_name(hsb.saturation, hsb.brightness) {
            Some(_) => None,
            None => Some(ColorFamily::from_hue(hsb.hue)),
        }
    }
}

fn grayscale_name(saturation: f32, brightness: f32) -> Option<&'static str> {
    if brightness < grayscale::BLACK_MAX_BRIGHTNESS {
        return Some("Black");
    }
    if saturation >= grayscale::MAX_SATURATION {
        return None;
    }

    let name = if brightness > grayscale::WHITE_MIN_BRIGHTNESS {
        "White"
    } else if brightness > grayscale::OFF_WHITE_MIN_BRIGHTNESS {
        "Off-White"
    } else if brightness > grayscale::LIGHT_GRAY_MIN_BRIGHTNESS {
        "Light Gray"
    } else if brightness < grayscale::DARK_GRAY_MAX_BRIGHTNESS {
        "Dark Gray"
    } else {
        "Gray"
    };
    Some(name)
}

/// Brown is checked before pink; both replace the generic modifiers
fn family_override(family: ColorFamily, saturation: f32, brightness: f32) -> Option<&'static str> {
    if family.has_brown_override()
        && brightness < brown::MAX_BRIGHTNESS
        && saturation > brown::MIN_SATURATION
    {
        let name = if saturation < brown::DULL_MAX_SATURATION {
            "Dull Brown"
        } else if brightness < brown::DARK_MAX_BRIGHTNESS {
            "Dark Brown"
        } else {
            "Brown"
        };
        return Some(name);
    }

    if family.has_pink_override()
        && brightness > pink::MIN_BRIGHTNESS
        && saturation > pink::MIN_SATURATION
        && saturation < pink::MAX_SATURATION
    {
        let name = if brightness > pink::LIGHT_MIN_BRIGHTNESS {
            "Light Pink"
        } else if saturation < pink::PALE_MAX_SATURATION {
            "Pale Pink"
        } else {
            "Pink"
        };
        return Some(name);
    }

    None
}

fn brightness_modifier(brightness: f32) -> Option<&'static str> {
    if brightness > modifiers::VERY_LIGHT_MIN_BRIGHTNESS {
        Some("Very Light")
    } else if brightness > modifiers::LIGHT_MIN_BRIGHTNESS {
        Some("Light")
    } else if brightness < modifiers::VERY_DARK_MAX_BRIGHTNESS {
        Some("Very Dark")
    } else if brightness < modifiers::DARK_MAX_BRIGHTNESS {
        Some("Dark")
    } else if brightness < modifiers::DEEP_MAX_BRIGHTNESS {
        Some("Deep")
    } else {
        None
    }
}

fn saturation_modifier(saturation: f32, brightness: f32) -> Option<&'static str> {
    let lit = brightness > modifiers::SATURATED_MIN_BRIGHTNESS;
    if saturation < modifiers::MUTED_MAX_SATURATION {
        Some("Muted")
    } else if saturation < modifiers::DULL_MAX_SATURATION {
        Some("Dull")
    } else if saturation > modifiers::VIVID_MIN_SATURATION && lit {
        Some("Vivid")
    } else if saturation > modifiers::BRIGHT_MIN_SATURATION && lit {
        Some("Bright")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(hue: f32, saturation: f32, brightness: f32) -> String {
        ColorNamer::new().name_hsb(Hsb::new(hue, saturation, brightness))
    }

    // Mid-range saturation and brightness: no override, no modifier
    const PLAIN_S: f32 = 0.5;
    const PLAIN_B: f32 = 0.7;

    #[test]
    fn test_black_boundary() {
        assert_eq!(name(0.3, 1.0, 0.09), "Black");
        assert_eq!(name(0.3, 0.0, 0.099), "Black");
        // 0.1 is not below the cutoff
        assert_eq!(name(0.3, 0.0, 0.1), "Dark Gray");
        assert_eq!(name(0.3, 0.0, 0.11), "Dark Gray");
    }

    #[test]
    fn test_grayscale_saturation_gate() {
        assert_eq!(name(0.0, 0.09, 0.5), "Gray");
        assert_eq!(name(0.0, 0.099, 0.5), "Gray");
        // At 0.1 the hue decides
        assert_eq!(name(0.3, 0.1, 0.5), "Muted Green");
        assert_eq!(name(0.3, 0.11, 0.5), "Muted Green");
    }

    #[test]
    fn test_white_boundary() {
        assert_eq!(name(0.0, 0.0, 0.97), "White");
        assert_eq!(name(0.0, 0.0, 0.951), "White");
        assert_eq!(name(0.0, 0.0, 0.95), "Off-White");
        assert_eq!(name(0.0, 0.0, 0.949), "Off-White");
    }

    #[test]
    fn test_off_white_boundary() {
        assert_eq!(name(0.0, 0.0, 0.801), "Off-White");
        assert_eq!(name(0.0, 0.0, 0.8), "Light Gray");
        assert_eq!(name(0.0, 0.0, 0.799), "Light Gray");
    }

    #[test]
    fn test_light_gray_boundary() {
        assert_eq!(name(0.0, 0.0, 0.601), "Light Gray");
        assert_eq!(name(0.0, 0.0, 0.6), "Gray");
        assert_eq!(name(0.0, 0.0, 0.599), "Gray");
    }

    #[test]
    fn test_dark_gray_boundary() {
        assert_eq!(name(0.0, 0.0, 0.301), "Gray");
        assert_eq!(name(0.0, 0.0, 0.3), "Gray");
        assert_eq!(name(0.0, 0.0, 0.299), "Dark Gray");
    }

    #[test]
    fn test_red_orange_boundary() {
        assert_eq!(ColorFamily::from_hue(0.039), ColorFamily::Red);
        assert_eq!(ColorFamily::from_hue(0.04), ColorFamily::Orange);
        assert_eq!(ColorFamily::from_hue(0.041), ColorFamily::Orange);
        assert_eq!(name(0.039, PLAIN_S, PLAIN_B), "Red");
        assert_eq!(name(0.041, PLAIN_S, PLAIN_B), "Orange");
    }

    #[test]
    fn test_hue_arc_boundaries() {
        let cases = [
            (0.125, ColorFamily::Orange, ColorFamily::Yellow),
            (0.208, ColorFamily::Yellow, ColorFamily::LimeGreen),
            (0.264, ColorFamily::LimeGreen, ColorFamily::Green),
            (0.458, ColorFamily::Green, ColorFamily::Cyan),
            (0.556, ColorFamily::Cyan, ColorFamily::Blue),
            (0.736, ColorFamily::Blue, ColorFamily::Purple),
            (0.833, ColorFamily::Purple, ColorFamily::Magenta),
        ];
        for (bound, below, at_or_above) in cases {
            assert_eq!(ColorFamily::from_hue(bound - 0.001), below, "below {bound}");
            assert_eq!(ColorFamily::from_hue(bound), at_or_above, "at {bound}");
            assert_eq!(ColorFamily::from_hue(bound + 0.001), at_or_above, "above {bound}");
        }
    }

    #[test]
    fn test_magenta_red_wrap() {
        assert_eq!(ColorFamily::from_hue(0.959), ColorFamily::Magenta);
        assert_eq!(ColorFamily::from_hue(0.96), ColorFamily::Red);
        assert_eq!(ColorFamily::from_hue(0.961), ColorFamily::Red);
        assert_eq!(ColorFamily::from_hue(0.0), ColorFamily::Red);
        assert_eq!(ColorFamily::from_hue(0.999), ColorFamily::Red);
    }

    #[test]
    fn test_family_names() {
        assert_eq!(name(0.1, PLAIN_S, PLAIN_B), "Orange");
        assert_eq!(name(0.17, PLAIN_S, PLAIN_B), "Yellow");
        assert_eq!(name(0.23, PLAIN_S, PLAIN_B), "Lime Green");
        assert_eq!(name(0.33, PLAIN_S, PLAIN_B), "Green");
        assert_eq!(name(0.5, PLAIN_S, PLAIN_B), "Cyan");
        assert_eq!(name(0.66, PLAIN_S, PLAIN_B), "Blue");
        assert_eq!(name(0.78, PLAIN_S, PLAIN_B), "Purple");
        assert_eq!(name(0.9, PLAIN_S, PLAIN_B), "Magenta");
        assert_eq!(ColorFamily::LimeGreen.to_string(), "Lime Green");
    }

    #[test]
    fn test_dark_brown_from_rgb() {
        let namer = ColorNamer::new();
        assert_eq!(namer.name(ColorSample::new(0.2, 0.15, 0.1)), "Dark Brown");
    }

    #[test]
    fn test_brown_brightness_gate() {
        assert_eq!(name(0.1, 0.5, 0.599), "Brown");
        // Not below 0.6: generic modifiers apply
        assert_eq!(name(0.1, 0.5, 0.6), "Orange");
        assert_eq!(name(0.1, 0.5, 0.601), "Orange");
    }

    #[test]
    fn test_brown_saturation_gate() {
        assert_eq!(name(0.1, 0.201, 0.45), "Dull Brown");
        // Not above 0.2: falls through to modifiers
        assert_eq!(name(0.1, 0.2, 0.45), "Deep Dull Orange");
        assert_eq!(name(0.1, 0.199, 0.45), "Deep Muted Orange");
    }

    #[test]
    fn test_brown_variants() {
        assert_eq!(name(0.1, 0.399, 0.45), "Dull Brown");
        assert_eq!(name(0.1, 0.4, 0.45), "Brown");
        assert_eq!(name(0.1, 0.401, 0.45), "Brown");

        assert_eq!(name(0.1, 0.5, 0.299), "Dark Brown");
        assert_eq!(name(0.1, 0.5, 0.3), "Brown");
        assert_eq!(name(0.1, 0.5, 0.301), "Brown");
    }

    #[test]
    fn test_brown_families_only() {
        assert_eq!(name(0.0, 0.5, 0.45), "Brown");
        assert_eq!(name(0.17, 0.5, 0.45), "Brown");
        assert_eq!(name(0.23, 0.5, 0.45), "Deep Lime Green");
        assert_eq!(name(0.66, 0.5, 0.45), "Deep Blue");
    }

    #[test]
    fn test_pink_brightness_gate() {
        assert_eq!(name(0.9, 0.5, 0.701), "Pink");
        assert_eq!(name(0.9, 0.5, 0.7), "Magenta");
        assert_eq!(name(0.9, 0.5, 0.699), "Magenta");
    }

    #[test]
    fn test_pink_saturation_gates() {
        assert_eq!(name(0.0, 0.201, 0.75), "Pale Pink");
        assert_eq!(name(0.0, 0.2, 0.75), "Dull Red");
        assert_eq!(name(0.0, 0.199, 0.75), "Muted Red");

        assert_eq!(name(0.0, 0.799, 0.75), "Pink");
        assert_eq!(name(0.0, 0.8, 0.75), "Bright Red");
        assert_eq!(name(0.0, 0.801, 0.75), "Vivid Red");
    }

    #[test]
    fn test_pink_variants() {
        assert_eq!(name(0.0, 0.5, 0.901), "Light Pink");
        assert_eq!(name(0.0, 0.5, 0.9), "Pink");
        assert_eq!(name(0.0, 0.5, 0.899), "Pink");

        assert_eq!(name(0.9, 0.399, 0.85), "Pale Pink");
        assert_eq!(name(0.9, 0.4, 0.85), "Pink");
        assert_eq!(name(0.9, 0.401, 0.85), "Pink");
    }

    #[test]
    fn test_pink_families_only() {
        assert_eq!(name(0.78, 0.5, 0.85), "Light Purple");
        assert_eq!(name(0.1, 0.5, 0.85), "Light Orange");
    }

    #[test]
    fn test_brightness_modifier_boundaries() {
        // Blue never triggers an override
        let h = 0.66;
        assert_eq!(name(h, PLAIN_S, 0.901), "Very Light Blue");
        assert_eq!(name(h, PLAIN_S, 0.9), "Light Blue");
        assert_eq!(name(h, PLAIN_S, 0.899), "Light Blue");
        assert_eq!(name(h, PLAIN_S, 0.801), "Light Blue");
        assert_eq!(name(h, PLAIN_S, 0.8), "Blue");
        assert_eq!(name(h, PLAIN_S, 0.799), "Blue");
        assert_eq!(name(h, PLAIN_S, 0.501), "Blue");
        assert_eq!(name(h, PLAIN_S, 0.5), "Blue");
        assert_eq!(name(h, PLAIN_S, 0.499), "Deep Blue");
        assert_eq!(name(h, PLAIN_S, 0.401), "Deep Blue");
        assert_eq!(name(h, PLAIN_S, 0.4), "Deep Blue");
        assert_eq!(name(h, PLAIN_S, 0.399), "Dark Blue");
        assert_eq!(name(h, PLAIN_S, 0.201), "Dark Blue");
        assert_eq!(name(h, PLAIN_S, 0.2), "Dark Blue");
        assert_eq!(name(h, PLAIN_S, 0.199), "Very Dark Blue");
    }

    #[test]
    fn test_saturation_modifier_boundaries() {
        let h = 0.66;
        assert_eq!(name(h, 0.199, PLAIN_B), "Muted Blue");
        assert_eq!(name(h, 0.2, PLAIN_B), "Dull Blue");
        assert_eq!(name(h, 0.201, PLAIN_B), "Dull Blue");
        assert_eq!(name(h, 0.399, PLAIN_B), "Dull Blue");
        assert_eq!(name(h, 0.4, PLAIN_B), "Blue");
        assert_eq!(name(h, 0.401, PLAIN_B), "Blue");
        assert_eq!(name(h, 0.599, PLAIN_B), "Blue");
        assert_eq!(name(h, 0.6, PLAIN_B), "Blue");
        assert_eq!(name(h, 0.601, PLAIN_B), "Bright Blue");
        assert_eq!(name(h, 0.799, PLAIN_B), "Bright Blue");
        assert_eq!(name(h, 0.8, PLAIN_B), "Bright Blue");
        assert_eq!(name(h, 0.801, PLAIN_B), "Vivid Blue");
    }

    #[test]
    fn test_saturated_requires_brightness() {
        let h = 0.66;
        assert_eq!(name(h, 0.9, 0.501), "Vivid Blue");
        assert_eq!(name(h, 0.9, 0.5), "Blue");
        assert_eq!(name(h, 0.7, 0.501), "Bright Blue");
        assert_eq!(name(h, 0.7, 0.5), "Blue");
        assert_eq!(name(h, 0.9, 0.45), "Deep Blue");
    }

    #[test]
    fn test_combined_modifiers() {
        assert_eq!(name(0.33, 1.0, 1.0), "Very Light Vivid Green");
        assert_eq!(name(0.33, 0.3, 0.15), "Very Dark Dull Green");
        assert_eq!(name(0.5, 0.15, 0.85), "Light Muted Cyan");
    }

    #[test]
    fn test_primaries_from_rgb() {
        let namer = ColorNamer::new();
        assert_eq!(namer.name(ColorSample::new(0.0, 0.0, 0.0)), "Black");
        assert_eq!(namer.name(ColorSample::new(1.0, 1.0, 1.0)), "White");
        assert_eq!(namer.name(ColorSample::new(0.0, 0.0, 1.0)), "Very Light Vivid Blue");
        assert_eq!(namer.name(ColorSample::new(1.0, 0.0, 0.0)), "Very Light Vivid Red");
    }

    #[test]
    fn test_family_skips_grays() {
        let namer = ColorNamer::new();
        assert_eq!(namer.family(ColorSample::new(0.5, 0.5, 0.5)), None);
        assert_eq!(
            namer.family(ColorSample::new(0.0, 0.8, 0.0)),
            Some(ColorFamily::Green)
        );
    }
}
