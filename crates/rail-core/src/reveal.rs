//! Word-by-word reveal driven by how close a section heading sits to the
//! viewport center.

use crate::constants::{
    REVEAL_BIAS, REVEAL_MIN_THRESHOLD_PX, REVEAL_MIN_TOLERANCE_PX, REVEAL_TOLERANCE_RATIO,
};
use crate::geometry::clamp01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Added to the falloff before clamping. Makes a far-away heading still
    /// show `ceil(bias * words)` words.
    pub bias: f64,
    pub min_threshold: f64,
    pub min_tolerance: f64,
    pub tolerance_ratio: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            bias: REVEAL_BIAS,
            min_threshold: REVEAL_MIN_THRESHOLD_PX,
            min_tolerance: REVEAL_MIN_TOLERANCE_PX,
            tolerance_ratio: REVEAL_TOLERANCE_RATIO,
        }
    }
}

impl RevealConfig {
    /// Fraction of the section's words to reveal, in \[0, 1\].
    ///
    /// Within `tolerance` of the center the heading is fully revealed; beyond
    /// that the fraction falls off linearly over `threshold` pixels.
    pub fn progress_for(
        &self,
        heading_center: f64,
        viewport_center: f64,
        heading_width: f64,
        viewport_width: f64,
    ) -> f64 {
        let heading_half = heading_width.max(0.0) * 0.5;
        let threshold = (viewport_width * 0.5)
            .min(self.min_threshold.max(heading_half))
            .max(1.0);
        let tolerance = self
            .min_tolerance
            .max(heading_width.max(0.0) * self.tolerance_ratio);
        let dist = (heading_center - viewport_center).abs();
        let raw = if dist <= tolerance {
            1.0
        } else {
            1.0 - ((dist - tolerance) / threshold).min(1.0)
        };
        clamp01(raw + self.bias)
    }
}

/// Number of leading words revealed at `fraction`.
#[inline]
pub fn filled_count(fraction: f64, word_count: usize) -> usize {
    if word_count == 0 {
        return 0;
    }
    let filled = (clamp01(fraction) * word_count as f64).ceil() as usize;
    filled.min(word_count)
}

/// Reveal flag per word, in document order. Always a prefix of `true`s.
pub fn reveal_mask(fraction: f64, word_count: usize) -> impl Iterator<Item = bool> {
    let filled = filled_count(fraction, word_count);
    (0..word_count).map(move |i| i < filled)
}

/// Remembers the last filled count per block so unchanged blocks skip the
/// class writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealCursor {
    last: Option<usize>,
}

impl RevealCursor {
    /// Returns the new filled count if it differs from the previous frame.
    pub fn advance(&mut self, fraction: f64, word_count: usize) -> Option<usize> {
        let filled = filled_count(fraction, word_count);
        if self.last == Some(filled) {
            return None;
        }
        self.last = Some(filled);
        Some(filled)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
