//! Frame geometry and the transform descriptor produced by the interpolators.
//!
//! Everything here is measured in CSS pixels relative to the layout viewport,
//! the same space `getBoundingClientRect` reports in. Values are re-read every
//! frame; nothing in this module caches geometry across frames.

use glam::DVec2;

/// Bounding box of a tracked element for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// True when the rect overlaps `other` grown by `margin` on every side.
    pub fn intersects_expanded(&self, other: &Rect, margin: f64) -> bool {
        self.intersects_expanded_xy(other, margin, margin)
    }

    /// Like [`Rect::intersects_expanded`] with separate horizontal and
    /// vertical margins.
    pub fn intersects_expanded_xy(&self, other: &Rect, margin_x: f64, margin_y: f64) -> bool {
        self.right() >= other.left - margin_x
            && self.left <= other.right() + margin_x
            && self.bottom() >= other.top - margin_y
            && self.top <= other.bottom() + margin_y
    }
}

/// Visible area the effects are laid out against.
///
/// `left`/`top` place it in the same client space as element rects, so a
/// viewport that does not start at the window's edge still compares correctly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the window origin.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    pub const fn at(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_rect(r: &Rect) -> Self {
        Self::at(r.left, r.top, r.width, r.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    #[inline]
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Style values an interpolator wants written to one element.
///
/// Fields left at their identity value are still written; the adapter keeps
/// the style string stable so repeated frames produce identical CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: Option<i32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            z_index: None,
        }
    }
}

impl Transform {
    pub fn scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// CSS `transform` value for this descriptor.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
