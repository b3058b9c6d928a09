//! Proximity scaling: elements grow as they approach the horizontal center of
//! the viewport.

use crate::constants::{MAX_SCALE, MIN_SCALE, PROXIMITY_ROOT_MARGIN};
use crate::geometry::{clamp01, Rect, Transform, Viewport};
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Horizontal margin added on each side of the viewport when deciding which
    /// elements to update, as a fraction of the viewport width.
    pub root_margin: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            root_margin: PROXIMITY_ROOT_MARGIN,
        }
    }
}

/// Distance of `element_cx` from `viewport_cx` as a fraction of half the
/// viewport width, clamped to \[0, 1\]. A degenerate viewport reports 1.
#[inline]
pub fn proximity_norm(element_cx: f64, viewport_cx: f64, half_width: f64) -> f64 {
    if !(half_width > 0.0) {
        return 1.0;
    }
    let n = (element_cx - viewport_cx).abs() / half_width;
    if n.is_nan() {
        1.0
    } else {
        n.clamp(0.0, 1.0)
    }
}

impl ProximityConfig {
    #[inline]
    pub fn scale_for_norm(&self, norm: f64) -> f64 {
        self.min_scale + (1.0 - clamp01(norm)) * (self.max_scale - self.min_scale)
    }

    pub fn scale_for(&self, element: &Rect, viewport: &Viewport) -> f64 {
        let norm = proximity_norm(
            element.center().x,
            viewport.center().x,
            viewport.half_width(),
        );
        self.scale_for_norm(norm)
    }

    pub fn transform_for(&self, element: &Rect, viewport: &Viewport) -> Transform {
        Transform::scale(self.scale_for(element, viewport))
    }

    /// Host-side stand-in for the browser's intersection observer.
    pub fn in_expanded_viewport(&self, element: &Rect, viewport: &Viewport) -> bool {
        element.intersects_expanded_xy(&viewport.as_rect(), self.root_margin_px(viewport), 0.0)
    }

    #[inline]
    pub fn root_margin_px(&self, viewport: &Viewport) -> f64 {
        self.root_margin * viewport.width
    }

    /// `rootMargin` string for the browser's intersection observer.
    pub fn observer_root_margin(&self) -> String {
        let pct = self.root_margin * 100.0;
        format!("0px {pct:.1}% 0px {pct:.1}%")
    }
}

/// Indices of scalable elements currently near the viewport.
///
/// Fed by intersection notifications; the frame only recomputes scales for the
/// members of this set. Membership never changes the computed scale itself.
#[derive(Debug, Default)]
pub struct ProximityTracker {
    visible: FnvHashSet<usize>,
}

impl ProximityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_intersecting(&mut self, index: usize, intersecting: bool) {
        if intersecting {
            self.visible.insert(index);
        } else {
            self.visible.remove(&index);
        }
    }

    pub fn is_tracked(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Tracked indices in ascending order, so style writes follow DOM order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.visible.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
