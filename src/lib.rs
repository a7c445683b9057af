//! # Dominant Colors
//!
//! A Rust crate for extracting the visually dominant colors of a raster
//! image.
//!
//! Extraction runs in two steps over pixel data decoded elsewhere:
//! - Building a frequency [`Histogram`] over a decoded [`Bitmap`], optionally
//!   compositing translucent pixels against a background color
//! - Reducing the histogram with a [`DominantColorExtractor`] to an ordered
//!   palette of mutually distinguishable colors
//!
//! All color math happens in raw RGB on packed 24-bit values; the
//! [`color`] module converts between packed colors, hex strings and RGB
//! components.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_colors::{color, extract_dominant_colors};
//! use std::path::Path;
//!
//! let colors = extract_dominant_colors(Path::new("photo.jpg"), 3)?;
//! for c in &colors {
//!     println!("{}", color::to_hex(*c, true));
//! }
//! # Ok::<(), dominant_colors::ExtractionError>(())
//! ```

use std::path::Path;

pub mod bitmap;
pub mod color;
pub mod constants;
pub mod error;
pub mod extract;
pub mod histogram;
pub mod image_loader;

pub use bitmap::{Bitmap, ColorComponents};
pub use error::{ExtractionError, Result};
pub use extract::DominantColorExtractor;
pub use histogram::{ColorCount, Histogram};

/// Extract the dominant colors of an image file
///
/// This is the single-call entry point: it decodes the file, builds the
/// color histogram without a background color, and reduces it with the
/// default extractor.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
/// * `count` - Maximum number of colors to return
///
/// # Returns
///
/// Up to `count` packed colors, most dominant first
///
/// # Errors
///
/// Returns `ExtractionError` if the image cannot be loaded or decoded
pub fn extract_dominant_colors(image_path: &Path, count: usize) -> Result<Vec<u32>> {
    let bitmap = image_loader::load_bitmap(image_path)?;
    let histogram = Histogram::from_bitmap(&bitmap, None)?;

    Ok(DominantColorExtractor::new().extract(&histogram, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_count_serialization() {
        let entry = ColorCount {
            color: 0xFF8080,
            count: 42,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ColorCount = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_extract_dominant_colors_missing_file() {
        let result = extract_dominant_colors(Path::new("nonexistent_file.jpg"), 1);

        assert!(matches!(
            result,
            Err(ExtractionError::ImageLoadError { .. })
        ));
    }
}
