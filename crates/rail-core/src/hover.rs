//! Hover state for elements that sit under the scroll-proxy overlay.
//!
//! The overlay swallows native `:hover`, so the page tracks the hovered element
//! itself and mirrors it into a class. [`HoverSlot`] holds at most one element
//! and reports transitions; [`tilt_for`] computes the case-card tilt.

use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_SCALE};
use crate::geometry::Rect;
use glam::DVec2;

/// Transition reported by [`HoverSlot::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct HoverChange<T> {
    pub left: Option<T>,
    pub entered: Option<T>,
}

/// The single currently hovered element of one kind.
#[derive(Clone, Debug)]
pub struct HoverSlot<T> {
    current: Option<T>,
}

impl<T> Default for HoverSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: PartialEq + Clone> HoverSlot<T> {
    /// Moves the hover to `next`; `None` when nothing changed.
    pub fn update(&mut self, next: Option<T>) -> Option<HoverChange<T>> {
        if self.current == next {
            return None;
        }
        let left = std::mem::replace(&mut self.current, next.clone());
        Some(HoverChange {
            left,
            entered: next,
        })
    }

    pub fn clear(&mut self) -> Option<T> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Keys that activate the link of a hovered card.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// 3D tilt of a card face, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateY({:.3}deg) rotateX({:.3}deg) scale3d({s}, {s}, {s})",
            self.rotate_y,
            self.rotate_x,
            s = self.scale
        )
    }
}

/// Tilt toward `pointer` over `rect`: the card leans up to [`TILT_MAX_DEG`]
/// at its edges. A collapsed rect rests.
pub fn tilt_for(pointer: DVec2, rect: &Rect) -> Tilt {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Tilt::REST;
    }
    let x = (pointer.x - rect.left) / rect.width - 0.5;
    let y = (pointer.y - rect.top) / rect.height - 0.5;
    Tilt {
        rotate_x: -y * TILT_MAX_DEG,
        rotate_y: x * TILT_MAX_DEG,
        scale: TILT_SCALE,
    }
}
