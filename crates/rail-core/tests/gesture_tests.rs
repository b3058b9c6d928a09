// Wheel and touch mapping onto the scroll proxy.

use glam::DVec2;
use instant::Instant;
use rail_core::*;
use std::time::Duration;

#[test]
fn wheel_units() {
    let cfg = GestureConfig::default();
    let sideways = DVec2::new(30.0, 5.0);
    assert_eq!(cfg.wheel_delta(sideways, DeltaMode::Pixel, 900.0), 30.0);
    assert_eq!(cfg.wheel_delta(sideways, DeltaMode::Line, 900.0), 30.0 * WHEEL_LINE_PX);
    assert_eq!(cfg.wheel_delta(DVec2::new(0.0, 2.0), DeltaMode::Page, 900.0), 1800.0);
}

#[test]
fn delta_mode_from_dom() {
    assert_eq!(DeltaMode::from_dom(0), DeltaMode::Pixel);
    assert_eq!(DeltaMode::from_dom(1), DeltaMode::Line);
    assert_eq!(DeltaMode::from_dom(2), DeltaMode::Page);
    assert_eq!(DeltaMode::from_dom(7), DeltaMode::Pixel);
}

#[test]
fn vertical_wins_ties() {
    assert!(!is_horizontal(DVec2::new(10.0, 10.0)));
    assert!(!is_horizontal(DVec2::new(-10.0, 10.0)));
    assert!(is_horizontal(DVec2::new(-11.0, 10.0)));
    assert_eq!(dominant_axis(DVec2::new(4.0, -4.0)), -4.0);
    assert_eq!(dominant_axis(DVec2::new(-6.0, 4.0)), -6.0);
}

#[test]
fn non_finite_wheel_is_ignored() {
    let cfg = GestureConfig::default();
    let d = cfg.wheel_delta(DVec2::new(f64::INFINITY, 0.0), DeltaMode::Pixel, 900.0);
    assert_eq!(d, 0.0);
    let d = cfg.wheel_delta(DVec2::new(0.0, 1.0), DeltaMode::Page, f64::NAN);
    assert_eq!(d, 0.0);
}

#[test]
fn sideways_drag_scrolls_forward() {
    let cfg = GestureConfig::default();
    let mut t = SwipeTracker::default();
    assert_eq!(t.move_to(DVec2::new(10.0, 0.0), &cfg), 0.0);

    t.begin(DVec2::new(100.0, 100.0), Instant::now());
    assert!(t.is_active());
    // dragging left scrolls forward, amplified
    assert_eq!(t.move_to(DVec2::new(80.0, 102.0), &cfg), 20.0 * TOUCH_SCROLL_GAIN);
    // vertical steps are left to native scrolling
    assert_eq!(t.move_to(DVec2::new(80.0, 150.0), &cfg), 0.0);
}

#[test]
fn small_drags_accumulate_past_the_dead_zone() {
    let cfg = GestureConfig::default();
    let mut t = SwipeTracker::default();
    t.begin(DVec2::new(100.0, 0.0), Instant::now());

    assert_eq!(t.move_to(DVec2::new(95.0, 0.0), &cfg), 0.0);
    assert_eq!(t.move_to(DVec2::new(90.0, 0.0), &cfg), 0.0);
    // 12px from the start point: forwarded in one step
    assert_eq!(t.move_to(DVec2::new(88.0, 0.0), &cfg), 12.0 * TOUCH_SCROLL_GAIN);
    // measured from the last forwarded point again
    assert_eq!(t.move_to(DVec2::new(80.0, 0.0), &cfg), 0.0);
    assert_eq!(t.move_to(DVec2::new(99.0, 0.0), &cfg), -11.0 * TOUCH_SCROLL_GAIN);
}

#[test]
fn swipe_classification() {
    let cfg = GestureConfig::default();
    let t0 = Instant::now();

    let mut t = SwipeTracker::default();
    t.begin(DVec2::new(200.0, 0.0), t0);
    t.move_to(DVec2::new(100.0, 10.0), &cfg);
    assert_eq!(t.end(t0 + Duration::from_millis(200), &cfg), Some(Swipe::Left));
    assert!(!t.is_active());
    assert_eq!(t.end(t0 + Duration::from_millis(250), &cfg), None);

    t.begin(DVec2::new(100.0, 100.0), t0);
    t.move_to(DVec2::new(80.0, 150.0), &cfg);
    assert_eq!(t.end(t0 + Duration::from_millis(100), &cfg), Some(Swipe::Down));
}

#[test]
fn slow_or_short_touches_are_not_swipes() {
    let cfg = GestureConfig::default();
    let t0 = Instant::now();
    let mut t = SwipeTracker::default();

    t.begin(DVec2::new(0.0, 0.0), t0);
    t.move_to(DVec2::new(-300.0, 0.0), &cfg);
    assert_eq!(t.end(t0 + Duration::from_secs(1), &cfg), None);

    t.begin(DVec2::new(0.0, 0.0), t0);
    t.move_to(DVec2::new(-20.0, 0.0), &cfg);
    assert_eq!(t.end(t0 + Duration::from_millis(50), &cfg), None);

    t.begin(DVec2::new(0.0, 0.0), t0);
    t.cancel();
    assert_eq!(t.end(t0, &cfg), None);
}

#[test]
fn classify_swipe_directions() {
    assert_eq!(classify_swipe(DVec2::new(50.0, 0.0), 40.0), Some(Swipe::Right));
    assert_eq!(classify_swipe(DVec2::new(0.0, -50.0), 40.0), Some(Swipe::Up));
    assert_eq!(classify_swipe(DVec2::new(30.0, 20.0), 40.0), None);
}
