//! Error types for the dominant_colors library

use thiserror::Error;

/// Result type alias for dominant_colors operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for histogram construction and color extraction
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pixel data does not form a valid decoded bitmap
    #[error("Invalid bitmap: {reason}")]
    InvalidBitmapError { reason: String },

    /// Background color outside the packed 24-bit range
    #[error("\"{value}\" does not represent a valid background color")]
    InvalidBackgroundError { value: u32 },
}

impl ExtractionError {
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

    /// Create an invalid-bitmap error
    pub fn invalid_bitmap(reason: impl Into<String>) -> Self {
        Self::InvalidBitmapError {
            reason: reason.into(),
        }
    }
}
