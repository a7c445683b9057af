//! Color frequency histogram of a decoded bitmap
//!
//! The histogram is built once over a [`Bitmap`], optionally compositing
//! translucent pixels against a background color, and is read-only
//! afterwards. Entries are held in descending-count order; equal counts keep
//! the order in which the colors were first encountered during the scan.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use log::debug;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::bitmap::{Bitmap, ColorComponents};
use crate::color::codec;
use crate::constants::{alpha, color::COLOR_MAX};
use crate::error::{ExtractionError, Result};
use crate::image_loader;

/// One histogram entry: a packed color and how many pixels resolved to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    /// Packed 24-bit color
    pub color: u32,
    /// Number of pixels that resolved to this color, always >= 1
    pub count: u64,
}

/// Frequency-sorted color histogram of a decoded image
///
/// Built through one of the factories below; immutable once built and safe
/// to share read-only across threads.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Entries sorted by descending count, first-encounter order on ties
    entries: Vec<ColorCount>,
    /// Count lookup by color
    lookup: HashMap<u32, u64>,
}

impl Histogram {
    /// Build the histogram of a decoded bitmap
    ///
    /// Fully transparent and translucent pixels contribute nothing unless a
    /// background color is supplied, in which case they are composited
    /// against it channel by channel.
    ///
    /// # Arguments
    ///
    /// * `bitmap` - Decoded pixel grid
    /// * `background` - Optional packed background color in [0, 0xFFFFFF]
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidBackgroundError` if `background`
    /// exceeds 0xFFFFFF.
    pub fn from_bitmap(bitmap: &Bitmap, background: Option<u32>) -> Result<Self> {
        let background = match background {
            Some(value) if value > COLOR_MAX => {
                return Err(ExtractionError::InvalidBackgroundError { value });
            }
            Some(value) => Some(codec::to_rgb(value)),
            None => None,
        };

        let mut counts: HashMap<u32, (u64, u32)> = HashMap::new();
        let mut next_rank = 0u32;

        // Column-major scan; the tie-break order of the sort below depends
        // on it and is frozen.
        for x in 0..bitmap.width() {
            for y in 0..bitmap.height() {
                let pixel = bitmap.components_at(x, y);

                let packed = if pixel.alpha > alpha::OPAQUE {
                    match &background {
                        None => continue,
                        Some(bg) => composite(&pixel, bg),
                    }
                } else {
                    codec::from_rgb(Srgb::new(pixel.red, pixel.green, pixel.blue))
                };

                match counts.entry(packed) {
                    Entry::Occupied(mut entry) => entry.get_mut().0 += 1,
                    Entry::Vacant(entry) => {
                        entry.insert((1, next_rank));
                        next_rank += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<(u32, u64, u32)> = counts
            .into_iter()
            .map(|(color, (count, rank))| (color, count, rank))
            .collect();
        ranked.sort_by_key(|&(_, count, rank)| (Reverse(count), rank));

        let entries: Vec<ColorCount> = ranked
            .into_iter()
            .map(|(color, count, _)| ColorCount { color, count })
            .collect();
        let lookup = entries.iter().map(|e| (e.color, e.count)).collect();

        debug!(
            "histogram built: {} distinct colors from a {}x{} bitmap",
            entries.len(),
            bitmap.width(),
            bitmap.height()
        );

        Ok(Self { entries, lookup })
    }

    /// Build the histogram of an image file
    ///
    /// Decoding is delegated to the external codec; decode failures
    /// propagate unchanged as the error source.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dominant_colors::Histogram;
    /// use std::path::Path;
    ///
    /// let histogram = Histogram::from_file(Path::new("photo.jpg"), None)?;
    /// println!("{} distinct colors", histogram.len());
    /// # Ok::<(), dominant_colors::ExtractionError>(())
    /// ```
    pub fn from_file(path: &Path, background: Option<u32>) -> Result<Self> {
        let bitmap = image_loader::load_bitmap(path)?;
        Self::from_bitmap(&bitmap, background)
    }

    /// Build the histogram of an in-memory encoded image buffer
    pub fn from_bytes(bytes: &[u8], background: Option<u32>) -> Result<Self> {
        let bitmap = image_loader::decode_bitmap(bytes)?;
        Self::from_bitmap(&bitmap, background)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the histogram holds no colors at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count of a specific color, `None` if absent
    pub fn color_count(&self, color: u32) -> Option<u64> {
        self.lookup.get(&color).copied()
    }

    /// The first `limit` entries in sorted order, all of them when `None`
    ///
    /// The returned slice is always a prefix of the full sorted order.
    pub fn most_used(&self, limit: Option<usize>) -> &[ColorCount] {
        let end = limit.unwrap_or(self.entries.len()).min(self.entries.len());
        &self.entries[..end]
    }

    /// Iterate entries in descending-count order
    pub fn iter(&self) -> std::slice::Iter<'_, ColorCount> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a ColorCount;
    type IntoIter = std::slice::Iter<'a, ColorCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Composite a translucent pixel against the background color
///
/// Each channel is blended and truncated independently before the channels
/// are recombined; truncating the summed value instead would change results
/// and break the published fixtures.
fn composite(pixel: &ColorComponents, background: &Srgb<u8>) -> u32 {
    let a = pixel.alpha as f64 / alpha::TRANSPARENT as f64;
    let blend =
        |channel: u8, bg: u8| (channel as f64 * (1.0 - a) + bg as f64 * a) as u32;

    blend(pixel.red, background.red) * 65_536
        + blend(pixel.green, background.green) * 256
        + blend(pixel.blue, background.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truecolor(width: u32, height: u32, pixels: Vec<u32>) -> Bitmap {
        Bitmap::true_color(width, height, pixels).unwrap()
    }

    #[test]
    fn test_counts_and_sort_order() {
        // 2 blue, 3 red, 1 green, all opaque
        let bitmap = truecolor(
            6,
            1,
            vec![0x0000FF, 0xFF0000, 0x0000FF, 0xFF0000, 0x00FF00, 0xFF0000],
        );
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        assert_eq!(histogram.len(), 3);
        let entries: Vec<(u32, u64)> = histogram.iter().map(|e| (e.color, e.count)).collect();
        assert_eq!(entries, vec![(0xFF0000, 3), (0x0000FF, 2), (0x00FF00, 1)]);
    }

    #[test]
    fn test_tie_break_keeps_first_encountered_order() {
        // Column-major scan over a 2x2 grid visits (0,0), (0,1), (1,0), (1,1).
        // Blue is encountered before red; both end with count 2.
        let bitmap = truecolor(2, 2, vec![0x0000FF, 0xFF0000, 0xFF0000, 0x0000FF]);
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        let colors: Vec<u32> = histogram.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![0x0000FF, 0xFF0000]);
    }

    #[test]
    fn test_translucent_pixels_discarded_without_background() {
        let bitmap = truecolor(2, 1, vec![0x40FF0000, 0x7F00FF00]);
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        assert!(histogram.is_empty());
        assert_eq!(histogram.len(), 0);
    }

    #[test]
    fn test_half_transparent_red_over_white() {
        let bitmap = truecolor(1, 1, vec![0x40FF0000]);
        let histogram = Histogram::from_bitmap(&bitmap, Some(0xFFFFFF)).unwrap();

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.color_count(0xFF8080), Some(1));
    }

    #[test]
    fn test_half_transparent_red_over_black() {
        let bitmap = truecolor(1, 1, vec![0x40FF0000]);
        let histogram = Histogram::from_bitmap(&bitmap, Some(0x000000)).unwrap();

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.color_count(0x7E0000), Some(1));
    }

    #[test]
    fn test_opaque_pixels_ignore_background() {
        let bitmap = truecolor(1, 1, vec![0x00123456]);
        let histogram = Histogram::from_bitmap(&bitmap, Some(0xFFFFFF)).unwrap();

        assert_eq!(histogram.color_count(0x123456), Some(1));
    }

    #[test]
    fn test_background_out_of_range_rejected() {
        let bitmap = truecolor(1, 1, vec![0x00FF0000]);
        let result = Histogram::from_bitmap(&bitmap, Some(0x1000000));

        assert!(matches!(
            result,
            Err(ExtractionError::InvalidBackgroundError { value: 0x1000000 })
        ));
    }

    #[test]
    fn test_background_upper_bound_accepted() {
        let bitmap = truecolor(1, 1, vec![0x00FF0000]);
        assert!(Histogram::from_bitmap(&bitmap, Some(0xFFFFFF)).is_ok());
    }

    #[test]
    fn test_indexed_bitmap_resolution() {
        let table = vec![
            ColorComponents {
                alpha: 0,
                red: 0xD6,
                green: 0,
                blue: 0,
            },
            ColorComponents {
                alpha: 127,
                red: 0,
                green: 0xFF,
                blue: 0,
            },
        ];
        let bitmap = Bitmap::indexed(3, 1, vec![0, 1, 0], table).unwrap();
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        // The fully transparent entry contributes nothing
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.color_count(0xD60000), Some(2));
    }

    #[test]
    fn test_color_count_absent_color() {
        let bitmap = truecolor(1, 1, vec![0x00FF0000]);
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        assert_eq!(histogram.color_count(0x00FF00), None);
    }

    #[test]
    fn test_most_used_is_a_prefix_of_full_order() {
        let bitmap = truecolor(
            6,
            1,
            vec![0x0000FF, 0xFF0000, 0x0000FF, 0xFF0000, 0x00FF00, 0xFF0000],
        );
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        let full = histogram.most_used(None);
        for k in 0..=histogram.len() {
            assert_eq!(histogram.most_used(Some(k)), &full[..k]);
        }
        // Limits beyond the histogram size clamp to the full order
        assert_eq!(histogram.most_used(Some(100)), full);
    }

    #[test]
    fn test_empty_bitmap_yields_empty_histogram() {
        let bitmap = truecolor(0, 0, vec![]);
        let histogram = Histogram::from_bitmap(&bitmap, None).unwrap();

        assert!(histogram.is_empty());
        assert_eq!(histogram.most_used(None), &[]);
    }

    #[test]
    fn test_composite_truncates_per_channel() {
        let pixel = ColorComponents {
            alpha: 64,
            red: 0xFF,
            green: 0,
            blue: 0,
        };
        assert_eq!(composite(&pixel, &Srgb::new(255, 255, 255)), 0xFF8080);
        assert_eq!(composite(&pixel, &Srgb::new(0, 0, 0)), 0x7E0000);
    }
}
