//! Color values, conversion and naming
//!
//! This module holds the plain RGB sample type, its HSB view, hex and Lab
//! conversions, the descriptive color namer and the standard color catalog.

pub mod conversion;
pub mod naming;
pub mod reference;
pub mod sample;

pub use naming::{ColorFamily, ColorNamer};
pub use reference::{ColorSection, ReferenceMatch, StandardColor};
pub use sample::{ColorSample, Hsb};
