//! Naming thresholds, sampling defaults and smoothing parameters
//!
//! The naming thresholds are hand-tuned cutoffs on the HSB cube. They are
//! kept exactly as shipped: changing any of them changes the names users see.

/// Grayscale gate, applied before any hue is considered
pub mod grayscale {
    /// Below this brightness every color is "Black"
    pub const BLACK_MAX_BRIGHTNESS: f32 = 0.1;

    /// Below this saturation a color is named by brightness alone
    pub const MAX_SATURATION: f32 = 0.1;

    pub const WHITE_MIN_BRIGHTNESS: f32 = 0.95;
    pub const OFF_WHITE_MIN_BRIGHTNESS: f32 = 0.8;
    pub const LIGHT_GRAY_MIN_BRIGHTNESS: f32 = 0.6;
    pub const DARK_GRAY_MAX_BRIGHTNESS: f32 = 0.3;
}

/// Exclusive upper bounds of the hue arcs, as fractions of 360°
pub mod hue {
    /// Red wraps around zero: below this bound or above [`RED_WRAP`]
    pub const RED_MAX: f32 = 0.04;
    pub const ORANGE_MAX: f32 = 0.125;
    pub const YELLOW_MAX: f32 = 0.208;
    pub const LIME_GREEN_MAX: f32 = 0.264;
    pub const GREEN_MAX: f32 = 0.458;
    pub const CYAN_MAX: f32 = 0.556;
    pub const BLUE_MAX: f32 = 0.736;
    pub const PURPLE_MAX: f32 = 0.833;
    pub const MAGENTA_MAX: f32 = 0.96;

    /// Start of the red arc at the top of the hue circle
    pub const RED_WRAP: f32 = 0.96;
}

/// Brown override for dark, saturated reds, oranges and yellows
pub mod brown {
    pub const MAX_BRIGHTNESS: f32 = 0.6;
    pub const MIN_SATURATION: f32 = 0.2;
    pub const DULL_MAX_SATURATION: f32 = 0.4;
    pub const DARK_MAX_BRIGHTNESS: f32 = 0.3;
}

/// Pink override for light, partly saturated reds and magentas
pub mod pink {
    pub const MIN_BRIGHTNESS: f32 = 0.7;
    pub const MIN_SATURATION: f32 = 0.2;
    pub const MAX_SATURATION: f32 = 0.8;
    pub const LIGHT_MIN_BRIGHTNESS: f32 = 0.9;
    pub const PALE_MAX_SATURATION: f32 = 0.4;
}

/// Generic brightness and saturation modifiers
pub mod modifiers {
    pub const VERY_LIGHT_MIN_BRIGHTNESS: f32 = 0.9;
    pub const LIGHT_MIN_BRIGHTNESS: f32 = 0.8;
    pub const VERY_DARK_MAX_BRIGHTNESS: f32 = 0.2;
    pub const DARK_MAX_BRIGHTNESS: f32 = 0.4;
    pub const DEEP_MAX_BRIGHTNESS: f32 = 0.5;

    pub const MUTED_MAX_SATURATION: f32 = 0.2;
    pub const DULL_MAX_SATURATION: f32 = 0.4;
    pub const VIVID_MIN_SATURATION: f32 = 0.8;
    pub const BRIGHT_MIN_SATURATION: f32 = 0.6;

    /// Vivid and Bright both require at least this brightness
    pub const SATURATED_MIN_BRIGHTNESS: f32 = 0.5;
}

/// Pixel window sizes
pub mod sampling {
    /// Window side for the live camera reticle
    pub const LIVE_WINDOW: u32 = 10;

    /// Window side for still images anchored on a saliency point
    pub const STILL_WINDOW: u32 = 20;
}

/// Temporal smoothing and throttling
pub mod smoothing {
    use std::time::Duration;

    /// Frames averaged by the temporal smoother
    pub const HISTORY_LENGTH: usize = 5;

    /// Recommended minimum spacing between smoother updates (~10 per second)
    pub const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

    /// Frames the live worker accepts while busy before dropping new ones
    pub const FRAME_QUEUE: usize = 1;
}

/// Text shown before any color has been read
pub mod placeholder {
    pub const NAME: &str = "Point at an object";
    pub const HEX: &str = "#------";
}
