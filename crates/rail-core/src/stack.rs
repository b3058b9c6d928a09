//! Services stack: cards drop in from above the container one after another
//! and settle bottom-up, driven by where the container sits on the rail.
//!
//! Layout is a pure function of the sweep value `g`; the only state is which
//! card is active (hover, initial override) and which media URL is showing.

use crate::constants::{
    STACK_BOTTOM_PAD_PX, STACK_EARLY_OFFSET_PX, STACK_GAP_PX, STACK_ROW_HEIGHT_PX,
    STACK_SAFETY_MARGIN_PX, STACK_SLIDE_X_PX, STACK_SPEED, STACK_START_OFFSET_PX,
};
use crate::geometry::{clamp01, Rect, Transform, Viewport};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    pub row_height: f64,
    pub gap: f64,
    pub safety_margin: f64,
    pub bottom_pad: f64,
    /// Cards start one row plus this far above the container top.
    pub start_offset: f64,
    /// Horizontal slide-in distance; cards start this far to the left.
    pub slide_x: f64,
    pub early_offset: f64,
    pub speed: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            row_height: STACK_ROW_HEIGHT_PX,
            gap: STACK_GAP_PX,
            safety_margin: STACK_SAFETY_MARGIN_PX,
            bottom_pad: STACK_BOTTOM_PAD_PX,
            start_offset: STACK_START_OFFSET_PX,
            slide_x: STACK_SLIDE_X_PX,
            early_offset: STACK_EARLY_OFFSET_PX,
            speed: STACK_SPEED,
        }
    }
}

/// One card of the services list, in DOM order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackItem {
    pub index: usize,
    pub image_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub index: usize,
    /// Local completion `p_i`.
    pub progress: f64,
    pub eased: f64,
    pub transform: Transform,
}

pub type StackFrame = SmallVec<[CardLayout; 8]>;

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - clamp01(t);
    1.0 - inv * inv * inv
}

/// Local completion of card `i` of `n` at sweep `g`.
///
/// `p_i <= p_{i-1}` for every `g`, so cards always finish in order.
#[inline]
pub fn local_completion(g: f64, i: usize, n: usize) -> f64 {
    let n = n.max(1) as f64;
    clamp01(g * n - i as f64)
}

impl StackConfig {
    #[inline]
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.gap + self.safety_margin
    }

    /// Sweep value from the container's horizontal position.
    ///
    /// Zero while the container is far right of the viewport, reaching 1 once
    /// its center has travelled roughly half a viewport in from the right edge.
    pub fn sweep(&self, container: &Rect, viewport: &Viewport) -> f64 {
        let viewport_right = viewport.right();
        let half = (viewport.width * 0.5).max(1.0);
        let travelled = viewport_right - container.center().x + self.early_offset;
        clamp01(travelled * self.speed / half)
    }

    /// Resting offset of card `i`, measured from the container top.
    pub fn target_y(&self, i: usize, container_height: f64) -> f64 {
        (container_height - self.bottom_pad - self.row_stride() * (i as f64 + 1.0) + self.gap)
            .max(0.0)
    }

    /// Fixed off-screen start, independent of the container height.
    #[inline]
    pub fn start_y(&self) -> f64 {
        -self.row_height - self.start_offset
    }

    pub fn layout(&self, g: f64, n: usize, container_height: f64) -> StackFrame {
        let count = n.max(1);
        let start = self.start_y();
        (0..n)
            .map(|i| {
                let p = local_completion(g, i, n);
                let eased = ease_out_cubic(p);
                let target = self.target_y(i, container_height);
                CardLayout {
                    index: i,
                    progress: p,
                    eased,
                    transform: Transform {
                        translate_x: (eased - 1.0) * self.slide_x,
                        translate_y: start + (target - start) * eased,
                        opacity: p,
                        z_index: Some((count - i) as i32),
                        ..Transform::default()
                    },
                }
            })
            .collect()
    }
}

/// Index of the most recently completed card at sweep `g`.
///
/// The card whose completion is closest to 1 wins; ties go to the higher
/// index. With nothing started yet the first card is active.
pub fn computed_active(g: f64, n: usize) -> usize {
    let mut best = 0usize;
    let mut best_p = 0.0f64;
    for i in 0..n {
        let p = local_completion(g, i, n);
        if p > 0.0 && p >= best_p {
            best = i;
            best_p = p;
        }
    }
    best
}

/// Remembers which media URL is showing so identical swaps are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaSlot {
    current: Option<String>,
}

impl MediaSlot {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns true when `url` differs from what is showing and was taken.
    pub fn swap(&mut self, url: &str) -> bool {
        if self.current.as_deref() == Some(url) {
            return false;
        }
        self.current = Some(url.to_string());
        true
    }
}

/// Per-page stack state threaded through every frame.
#[derive(Clone, Debug, Default)]
pub struct StackState {
    pub items: Vec<StackItem>,
    hover_index: Option<usize>,
    forced_index: Option<usize>,
    pub media: MediaSlot,
}

impl StackState {
    pub fn new(items: Vec<StackItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Starts with `index` shown until [`StackState::release_forced`].
    pub fn with_forced(mut self, index: usize) -> Self {
        self.forced_index = (index < self.items.len()).then_some(index);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn forced_index(&self) -> Option<usize> {
        self.forced_index
    }

    pub fn enter(&mut self, index: usize) {
        if index < self.items.len() {
            self.hover_index = Some(index);
        }
    }

    pub fn leave(&mut self) {
        self.hover_index = None;
    }

    /// Drops the initial override once the user reaches the list. Returns
    /// true if an override was in effect.
    pub fn release_forced(&mut self) -> bool {
        self.forced_index.take().is_some()
    }

    /// Active card at sweep `g`: hover, then the initial override, then the
    /// computed one.
    pub fn resolve_active(&self, g: f64) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(
            self.hover_index
                .or(self.forced_index)
                .unwrap_or_else(|| computed_active(g, self.items.len())),
        )
    }

    /// Media URL to load for the active card, or None if already showing.
    pub fn media_for(&mut self, active: usize) -> Option<&str> {
        let url = self.items.get(active)?.image_url.as_str();
        if url.is_empty() || !self.media.swap(url) {
            return None;
        }
        self.media.current()
    }
}
