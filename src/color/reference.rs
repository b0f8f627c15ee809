//! Standard reference colors
//!
//! A fixed catalog of everyday color names grouped into sections, used to
//! show users what a named color looks like and to find the closest
//! well-known color to a scanned sample.

use palette::Lab;
use serde::Serialize;

use super::conversion::{delta_e, to_hex, to_lab};
use super::sample::ColorSample;

/// A named catalog color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardColor {
    pub name: &'static str,
    pub color: ColorSample,
}

impl StandardColor {
    const fn rgb(name: &'static str, red: f32, green: f32, blue: f32) -> Self {
        Self {
            name,
            color: ColorSample { red, green, blue },
        }
    }

    pub fn hex(&self) -> String {
        to_hex(self.color)
    }
}

/// A titled group of catalog colors
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorSection {
    pub name: &'static str,
    pub colors: &'static [StandardColor],
}

/// Closest catalog color to a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceMatch {
    pub color: StandardColor,
    pub section: &'static str,
    /// CIE76 distance from the sample
    pub delta_e: f32,
}

const REDS_AND_PINKS: &[StandardColor] = &[
    StandardColor::rgb("Red", 1.00, 0.23, 0.19),
    StandardColor::rgb("Pink", 1.00, 0.18, 0.33),
    StandardColor::rgb("Crimson", 0.86, 0.08, 0.24),
    StandardColor::rgb("Maroon", 0.50, 0.00, 0.00),
    StandardColor::rgb("Salmon", 0.98, 0.50, 0.45),
    StandardColor::rgb("Rose", 1.00, 0.41, 0.71),
    StandardColor::rgb("Cherry", 0.86, 0.18, 0.18),
    StandardColor::rgb("Burgundy", 0.50, 0.00, 0.13),
    StandardColor::rgb("Scarlet", 1.00, 0.14, 0.00),
    StandardColor::rgb("Candy Pink", 1.00, 0.49, 0.70),
    StandardColor::rgb("Coral", 1.00, 0.50, 0.31),
];

const ORANGES_AND_YELLOWS: &[StandardColor] = &[
    StandardColor::rgb("Orange", 1.00, 0.58, 0.00),
    StandardColor::rgb("Yellow", 1.00, 0.80, 0.00),
    StandardColor::rgb("Gold", 1.00, 0.84, 0.00),
    StandardColor::rgb("Amber", 1.00, 0.75, 0.00),
    StandardColor::rgb("Peach", 1.00, 0.80, 0.65),
    StandardColor::rgb("Mustard", 0.81, 0.67, 0.13),
    StandardColor::rgb("Tangerine", 0.97, 0.56, 0.14),
    StandardColor::rgb("Cantaloupe", 1.00, 0.76, 0.42),
    StandardColor::rgb("Lemon", 1.00, 1.00, 0.00),
    StandardColor::rgb("Saffron", 0.96, 0.86, 0.26),
];

const GREENS: &[StandardColor] = &[
    StandardColor::rgb("Green", 0.20, 0.78, 0.35),
    StandardColor::rgb("Lime", 0.00, 1.00, 0.00),
    StandardColor::rgb("Teal", 0.19, 0.69, 0.78),
    StandardColor::rgb("Olive", 0.50, 0.50, 0.00),
    StandardColor::rgb("Mint", 0.60, 1.00, 0.80),
    StandardColor::rgb("Forest", 0.13, 0.55, 0.13),
    StandardColor::rgb("Chartreuse", 0.50, 1.00, 0.00),
    StandardColor::rgb("Emerald", 0.31, 0.78, 0.47),
    StandardColor::rgb("Pistachio", 0.75, 0.60, 0.42),
    StandardColor::rgb("Seafoam", 0.68, 1.00, 0.76),
];

const BLUES_AND_PURPLES: &[StandardColor] = &[
    StandardColor::rgb("Blue", 0.00, 0.48, 1.00),
    StandardColor::rgb("Indigo", 0.35, 0.34, 0.84),
    StandardColor::rgb("Purple", 0.69, 0.32, 0.87),
    StandardColor::rgb("Navy", 0.00, 0.00, 0.50),
    StandardColor::rgb("Sky Blue", 0.53, 0.81, 0.98),
    StandardColor::rgb("Lavender", 0.90, 0.90, 0.98),
    StandardColor::rgb("Plum", 0.53, 0.13, 0.38),
    StandardColor::rgb("Turquoise", 0.25, 0.88, 0.82),
    StandardColor::rgb("Teal Blue", 0.00, 0.50, 0.60),
    StandardColor::rgb("Violet", 0.93, 0.51, 0.93),
    StandardColor::rgb("Electric Blue", 0.00, 0.53, 1.00),
];

const BROWNS_AND_GRAYS: &[StandardColor] = &[
    StandardColor::rgb("Brown", 0.60, 0.40, 0.20),
    StandardColor::rgb("Gray", 0.56, 0.56, 0.58),
    StandardColor::rgb("Black", 0.00, 0.00, 0.00),
    StandardColor::rgb("White", 1.00, 1.00, 1.00),
    StandardColor::rgb("Tan", 0.82, 0.70, 0.55),
    StandardColor::rgb("Beige", 0.96, 0.96, 0.86),
    StandardColor::rgb("Charcoal", 0.25, 0.25, 0.25),
    StandardColor::rgb("Slate", 0.44, 0.50, 0.56),
    StandardColor::rgb("Coffee", 0.39, 0.26, 0.13),
    StandardColor::rgb("Ash Gray", 0.60, 0.60, 0.60),
    StandardColor::rgb("Copper", 0.72, 0.45, 0.20),
    StandardColor::rgb("Mocha", 0.60, 0.30, 0.20),
];

const PINKS_AND_PURPLES: &[StandardColor] = &[
    StandardColor::rgb("Fuchsia", 0.80, 0.00, 0.80),
    StandardColor::rgb("Magenta", 1.00, 0.00, 1.00),
    StandardColor::rgb("Lavender Blush", 1.00, 0.94, 0.96),
    StandardColor::rgb("Mauve", 0.87, 0.60, 0.69),
    StandardColor::rgb("Orchid", 0.85, 0.44, 0.84),
    StandardColor::rgb("Blush", 1.00, 0.85, 0.87),
    StandardColor::rgb("Lavender Pink", 0.98, 0.68, 0.82),
    StandardColor::rgb("Amethyst", 0.60, 0.40, 0.80),
    StandardColor::rgb("Periwinkle", 0.80, 0.80, 1.00),
];

const LIGHT_AND_DARK: &[StandardColor] = &[
    StandardColor::rgb("Light Gray", 0.83, 0.83, 0.83),
    StandardColor::rgb("Dark Gray", 0.38, 0.38, 0.38),
    StandardColor::rgb("Light Blue", 0.68, 0.85, 0.90),
    StandardColor::rgb("Dark Blue", 0.00, 0.00, 0.55),
    StandardColor::rgb("Light Green", 0.68, 1.00, 0.49),
    StandardColor::rgb("Dark Teal", 0.00, 0.35, 0.30),
    StandardColor::rgb("Light Pink", 1.00, 0.75, 0.80),
    StandardColor::rgb("Charcoal Gray", 0.23, 0.23, 0.23),
];

const SECTIONS: &[ColorSection] = &[
    ColorSection { name: "Reds & Pinks", colors: REDS_AND_PINKS },
    ColorSection { name: "Oranges & Yellows", colors: ORANGES_AND_YELLOWS },
    ColorSection { name: "Greens", colors: GREENS },
    ColorSection { name: "Blues & Purples", colors: BLUES_AND_PURPLES },
    ColorSection { name: "Browns & Grays", colors: BROWNS_AND_GRAYS },
    ColorSection { name: "Pink & Purples", colors: PINKS_AND_PURPLES },
    ColorSection { name: "Light & Dark", colors: LIGHT_AND_DARK },
];

/// All catalog sections in display order
pub fn sections() -> &'static [ColorSection] {
    SECTIONS
}

/// Look up a catalog color by name, ignoring case
pub fn find(name: &str) -> Option<StandardColor> {
    SECTIONS
        .iter()
        .flat_map(|section| section.colors.iter())
        .find(|color| color.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// Find the catalog color perceptually closest to a sample
///
/// Distance is CIE76 ΔE in Lab space. Ties keep the first color in catalog
/// order.
pub fn nearest(sample: ColorSample) -> ReferenceMatch {
    let target: Lab = to_lab(sample);
    let score = |section: &'static str, color: &StandardColor| ReferenceMatch {
        color: *color,
        section,
        delta_e: delta_e(target, to_lab(color.color)),
    };

    let first = score(SECTIONS[0].name, &SECTIONS[0].colors[0]);
    SECTIONS
        .iter()
        .flat_map(|section| section.colors.iter().map(move |color| (section.name, color)))
        .map(|(section, color)| score(section, color))
        .fold(first, |best, candidate| {
            if candidate.delta_e < best.delta_e {
                candidate
            } else {
                best
            }
        })
}
