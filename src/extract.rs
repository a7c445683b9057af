//! Dominant-color selection over a frequency histogram
//!
//! Selects up to N colors greedily by frequency while suppressing candidates
//! that sit too close to an already-accepted color in RGB space, so that
//! near-identical shades (compression artifacts, anti-aliasing fringes) are
//! not reported as distinct dominant colors.

use std::collections::VecDeque;

use log::debug;

use crate::color::codec;
use crate::constants::SIMILARITY_THRESHOLD;
use crate::histogram::Histogram;

/// Greedy dominant-color selector with diversity suppression
pub struct DominantColorExtractor {
    similarity_threshold: f32,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    /// Create an extractor with the calibrated similarity threshold
    pub fn new() -> Self {
        Self {
            similarity_threshold: SIMILARITY_THRESHOLD,
        }
    }

    /// Create an extractor with a custom suppression threshold
    ///
    /// Candidates closer than `similarity_threshold` (RGB-space Euclidean
    /// distance) to an accepted color are dropped from consideration.
    pub fn with_threshold(similarity_threshold: f32) -> Self {
        Self {
            similarity_threshold,
        }
    }

    /// Extract up to `limit` mutually distinguishable colors
    ///
    /// Works through the histogram in descending-count order: each accepted
    /// color suppresses every remaining candidate within the similarity
    /// threshold, and suppressed candidates are never re-considered.
    ///
    /// # Arguments
    ///
    /// * `histogram` - Frequency-sorted histogram to select from
    /// * `limit` - Maximum number of colors to return
    ///
    /// # Returns
    ///
    /// Packed colors ordered most frequent first, with no duplicates. A
    /// `limit` at or above the histogram size returns the whole histogram
    /// deduplicated by suppression; a zero `limit` or an empty histogram
    /// returns an empty vector. Never an error.
    pub fn extract(&self, histogram: &Histogram, limit: usize) -> Vec<u32> {
        let mut remaining: VecDeque<u32> = histogram.iter().map(|entry| entry.color).collect();
        let mut accepted = Vec::with_capacity(limit.min(remaining.len()));
        let threshold_squared = self.similarity_threshold * self.similarity_threshold;

        while accepted.len() < limit {
            let Some(candidate) = remaining.pop_front() else {
                break;
            };
            accepted.push(candidate);
            remaining.retain(|&other| distance_squared(candidate, other) >= threshold_squared);
        }

        debug!(
            "accepted {} of {} candidate colors (limit {})",
            accepted.len(),
            histogram.len(),
            limit
        );

        accepted
    }
}

/// Squared Euclidean distance between two packed colors in RGB space
fn distance_squared(a: u32, b: u32) -> f32 {
    let a = codec::to_rgb(a);
    let b = codec::to_rgb(b);
    let dr = a.red as f32 - b.red as f32;
    let dg = a.green as f32 - b.green as f32;
    let db = a.blue as f32 - b.blue as f32;

    dr * dr + dg * dg + db * db
}
