//! Gesture-to-scroll mapping: wheel and touch input on the overlay are turned
//! into proxy scroll deltas, and finished touches are classified as swipes.

use crate::constants::{
    SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX, TOUCH_DEAD_ZONE_PX, TOUCH_SCROLL_GAIN,
    WHEEL_LINE_PX,
};
use glam::DVec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub line_px: f64,
    pub touch_gain: f64,
    /// Sideways travel a drag must exceed before it scrolls.
    pub touch_dead_zone: f64,
    pub swipe_min_distance: f64,
    pub swipe_max_duration: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            line_px: WHEEL_LINE_PX,
            touch_gain: TOUCH_SCROLL_GAIN,
            touch_dead_zone: TOUCH_DEAD_ZONE_PX,
            swipe_min_distance: SWIPE_MIN_DISTANCE_PX,
            swipe_max_duration: Duration::from_millis(SWIPE_MAX_DURATION_MS),
        }
    }
}

/// `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// True when `delta` moves more sideways than up or down.
#[inline]
pub fn is_horizontal(delta: DVec2) -> bool {
    delta.x.abs() > delta.y.abs()
}

/// Larger-magnitude component of `delta`; vertical wins ties.
#[inline]
pub fn dominant_axis(delta: DVec2) -> f64 {
    if is_horizontal(delta) {
        delta.x
    } else {
        delta.y
    }
}

impl GestureConfig {
    /// Proxy scroll delta (px) for one wheel event.
    pub fn wheel_delta(&self, delta: DVec2, mode: DeltaMode, viewport_height: f64) -> f64 {
        let unit = match mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => self.line_px,
            DeltaMode::Page => viewport_height,
        };
        let d = dominant_axis(delta) * unit;
        if d.is_finite() {
            d
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

/// One touch sequence on the overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(DVec2, Instant)>,
    /// Where the last forwarded drag step ended.
    anchor: DVec2,
    last: DVec2,
}

impl SwipeTracker {
    pub fn begin(&mut self, at: DVec2, now: Instant) {
        self.start = Some((at, now));
        self.anchor = at;
        self.last = at;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Proxy scroll delta for a move to `at`.
    ///
    /// Only sideways drags are mapped: dragging left scrolls forward, like a
    /// native horizontal list. Travel is measured from the last forwarded
    /// point and must clear the dead zone; smaller or vertical moves report 0
    /// and keep accumulating. Vertical drags scroll the proxy natively.
    pub fn move_to(&mut self, at: DVec2, cfg: &GestureConfig) -> f64 {
        if self.start.is_none() {
            return 0.0;
        }
        self.last = at;
        let d = at - self.anchor;
        if !is_horizontal(d) || d.x.abs() <= cfg.touch_dead_zone {
            return 0.0;
        }
        self.anchor = at;
        -d.x * cfg.touch_gain
    }

    /// Ends the sequence; returns the swipe if the travel qualifies.
    pub fn end(&mut self, now: Instant, cfg: &GestureConfig) -> Option<Swipe> {
        let (origin, started) = self.start.take()?;
        let d = self.last - origin;
        if now < started || now.duration_since(started) > cfg.swipe_max_duration {
            return None;
        }
        classify_swipe(d, cfg.swipe_min_distance)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

pub fn classify_swipe(d: DVec2, min_distance: f64) -> Option<Swipe> {
    if d.x.abs() >= d.y.abs() {
        if d.x.abs() < min_distance {
            return None;
        }
        Some(if d.x < 0.0 { Swipe::Left } else { Swipe::Right })
    } else {
        if d.y.abs() < min_distance {
            return None;
        }
        Some(if d.y < 0.0 { Swipe::Up } else { Swipe::Down })
    }
}
