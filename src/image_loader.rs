//! Decode boundary between encoded images and the canonical bitmap handle
//!
//! This module is the only place the crate touches the `image` decoder. It
//! turns a file path or an in-memory encoded buffer into a [`Bitmap`];
//! decode failures are surfaced to the caller with the underlying decoder
//! error attached as the source, uninterpreted.

use std::path::Path;

use image::ImageReader;
use log::debug;

use crate::bitmap::Bitmap;
use crate::error::{ExtractionError, Result};

/// Load and decode an image file into a [`Bitmap`]
///
/// # Arguments
///
/// * `path` - Path to an image file in any format the `image` crate decodes
///
/// # Errors
///
/// Returns `ExtractionError::ImageLoadError` if the file cannot be opened or
/// its bytes cannot be decoded.
///
/// # Example
///
/// ```rust,no_run
/// use dominant_colors::image_loader::load_bitmap;
/// use std::path::Path;
///
/// let bitmap = load_bitmap(Path::new("photo.jpg"))?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok::<(), dominant_colors::ExtractionError>(())
/// ```
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let reader = ImageReader::open(path).map_err(|e| {
        ExtractionError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let image = reader.decode().map_err(|e| {
        ExtractionError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(Bitmap::from_image(&image))
}

/// Decode an in-memory encoded image buffer into a [`Bitmap`]
///
/// # Errors
///
/// Returns `ExtractionError::ImageLoadError` if the buffer does not hold a
/// decodable image.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ExtractionError::image_load("Failed to decode image buffer", e))?;

    Ok(Bitmap::from_image(&image))
}
