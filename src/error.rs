//! Error types for the chroma_scan library

use thiserror::Error;

/// Result type alias for chroma_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for sampling, analysis and scanning operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Sampling window has no in-bounds pixels
    #[error("Sampling window of {window}px at ({x}, {y}) lies entirely outside the {width}x{height} frame")]
    OutOfBounds {
        x: i64,
        y: i64,
        window: u32,
        width: u32,
        height: u32,
    },

    /// Pixel buffer geometry does not match its metadata
    #[error("Invalid pixel buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Color parsing or conversion error
    #[error("Color conversion error: {message}")]
    ColorConversionError { message: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Live scanning worker is unavailable
    #[error("Scan worker error: {reason}")]
    WorkerError { reason: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error only means "no color this frame"
    ///
    /// Live scanning skips the frame on recoverable errors instead of
    /// surfacing them.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::OutOfBounds { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::OutOfBounds { .. } => {
                "Point the camera at an object to identify its color.".to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::InvalidBuffer { .. } => {
                "The camera delivered an unreadable frame. Please try again.".to_string()
            }
            AnalysisError::WorkerError { .. } => {
                "Live scanning stopped. Please restart the scan.".to_string()
            }
            _ => "Color identification failed. Please try again.".to_string(),
        }
    }
}
