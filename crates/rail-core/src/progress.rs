//! Scroll-progress engine: proxy scroll offset to a normalized fraction, and the
//! rail translation and progress-bar width derived from it.

use crate::geometry::clamp01;

/// Normalized scroll progress of the proxy, in \[0, 1\].
///
/// Pure function of its inputs. A proxy no taller than the viewport has nothing
/// to scroll and reports 0; non-finite inputs also report 0.
pub fn compute_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_offset = max_scroll_offset(scroll_height, viewport_height);
    if max_offset > 0.0 {
        clamp01(scroll_top / max_offset)
    } else {
        0.0
    }
}

#[inline]
pub fn max_scroll_offset(scroll_height: f64, viewport_height: f64) -> f64 {
    let m = scroll_height - viewport_height;
    if m.is_finite() {
        m.max(0.0)
    } else {
        0.0
    }
}

/// Per-frame snapshot of the proxy. Recomputed from scratch, never patched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f64,
    pub max_offset: f64,
    pub progress: f64,
}

impl ScrollState {
    pub fn measure(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            raw_offset: scroll_top,
            max_offset: max_scroll_offset(scroll_height, viewport_height),
            progress: compute_progress(scroll_top, scroll_height, viewport_height),
        }
    }

    /// Proxy offset that corresponds to `progress`.
    pub fn offset_for(&self, progress: f64) -> f64 {
        clamp01(progress) * self.max_offset
    }
}

/// What the rail adapter writes each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RailFrame {
    /// Horizontal translation of the rail, always <= 0.
    pub translate_x: f64,
    /// Progress bar width in percent.
    pub bar_percent: f64,
}

/// Horizontal distance the rail can travel before its right edge meets the viewport's.
#[inline]
pub fn rail_travel(rail_width: f64, viewport_width: f64) -> f64 {
    (rail_width - viewport_width).max(0.0)
}

pub fn rail_frame(progress: f64, rail_width: f64, viewport_width: f64) -> RailFrame {
    let p = clamp01(progress);
    let tx = -(p * rail_travel(rail_width, viewport_width));
    RailFrame {
        // avoid writing "-0.00px"
        translate_x: if tx == 0.0 { 0.0 } else { tx },
        bar_percent: p * 100.0,
    }
}

/// Proxy spacer height that gives every panel one viewport of scroll plus one
/// viewport of slack. Zero panels count as one.
pub fn required_proxy_height(panels: usize, viewport_height: f64) -> f64 {
    (panels.max(1) + 1) as f64 * viewport_height.max(0.0)
}

/// New spacer height when the current one is too short. The spacer only
/// grows; a taller stylesheet height is left alone.
pub fn proxy_growth(panels: usize, viewport_height: f64, current: f64) -> Option<f64> {
    let required = required_proxy_height(panels, viewport_height);
    let current = if current.is_finite() { current } else { 0.0 };
    (required > current).then_some(required)
}
