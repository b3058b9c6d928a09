//! Small guards for the page lifecycle: frame coalescing, fire-once overlays,
//! and the mobile/desktop breakpoint.

use crate::constants::MOBILE_BREAKPOINT_PX;
use std::cell::Cell;

/// At most one animation frame in flight.
///
/// Events that arrive while a frame is pending are dropped; the pending frame
/// reads fresh geometry, so the latest state always wins.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller should request a frame now.
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called at the start of the frame callback.
    pub fn complete(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Fires once; later calls are no-ops. Used for the loader overlay (hidden by
/// whichever of `transitionend` or the fallback timer comes first) and the
/// touch hint (dismissed by the first touch or its timer).
#[derive(Debug, Default)]
pub struct FireOnce {
    fired: Cell<bool>,
}

impl FireOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn for_width_default(width: f64) -> Self {
        Self::for_width(width, MOBILE_BREAKPOINT_PX)
    }
}

/// Whether a resize from `before` to `after` switches layout mode. The page
/// reloads in that case instead of re-laying out live.
pub fn crosses_breakpoint(before: f64, after: f64, breakpoint: f64) -> bool {
    LayoutMode::for_width(before, breakpoint) != LayoutMode::for_width(after, breakpoint)
}
