// Proximity scaling around the viewport center.

use rail_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn centered_element_gets_max_scale() {
    let cfg = ProximityConfig::default();
    assert!(approx(cfg.scale_for_norm(0.0), MAX_SCALE));
    let vp = Viewport::new(1440.0, 900.0);
    let el = Rect::new(620.0, 300.0, 200.0, 200.0);
    assert!(approx(cfg.scale_for(&el, &vp), MAX_SCALE));
}

#[test]
fn element_half_a_viewport_away_gets_min_scale() {
    let cfg = ProximityConfig::default();
    assert!(approx(cfg.scale_for_norm(1.0), MIN_SCALE));
    let vp = Viewport::new(1440.0, 900.0);
    // center at x = 0, exactly half a viewport left of center
    let el = Rect::new(-100.0, 0.0, 200.0, 200.0);
    assert!(approx(cfg.scale_for(&el, &vp), MIN_SCALE));
    // far off-screen right still clamps to the minimum
    let far = Rect::new(5000.0, 0.0, 200.0, 200.0);
    assert!(approx(cfg.scale_for(&far, &vp), MIN_SCALE));
}

#[test]
fn scale_falls_linearly_between_bounds() {
    let cfg = ProximityConfig::default();
    let mid = cfg.scale_for_norm(0.5);
    assert!(approx(mid, (MIN_SCALE + MAX_SCALE) / 2.0));
    assert!(approx(proximity_norm(1080.0, 720.0, 720.0), 0.5));
    assert!(approx(proximity_norm(360.0, 720.0, 720.0), 0.5));
}

#[test]
fn zero_width_viewport_reports_min_scale() {
    assert_eq!(proximity_norm(10.0, 0.0, 0.0), 1.0);
    let cfg = ProximityConfig::default();
    let el = Rect::new(0.0, 0.0, 0.0, 0.0);
    assert!(approx(cfg.scale_for(&el, &Viewport::default()), MIN_SCALE));
}

#[test]
fn transform_descriptor_only_sets_scale() {
    let cfg = ProximityConfig::default();
    let vp = Viewport::new(1000.0, 800.0);
    let t = cfg.transform_for(&Rect::new(450.0, 0.0, 100.0, 100.0), &vp);
    assert!(approx(t.scale, MAX_SCALE));
    assert_eq!(t.translate_x, 0.0);
    assert_eq!(t.translate_y, 0.0);
    assert_eq!(t.opacity, 1.0);
    assert_eq!(t.z_index, None);
}

#[test]
fn expanded_viewport_includes_elements_within_margin() {
    let cfg = ProximityConfig::default();
    let vp = Viewport::new(1000.0, 800.0);
    // 40% of the viewport width on each side
    assert!(approx(cfg.root_margin_px(&vp), 400.0));
    let just_inside = Rect::new(1399.0, 0.0, 100.0, 100.0);
    let beyond = Rect::new(1401.0, 0.0, 100.0, 100.0);
    let left_inside = Rect::new(-499.0, 0.0, 100.0, 100.0);
    assert!(cfg.in_expanded_viewport(&just_inside, &vp));
    assert!(!cfg.in_expanded_viewport(&beyond, &vp));
    assert!(cfg.in_expanded_viewport(&left_inside, &vp));
    // the margin is horizontal only
    let below = Rect::new(400.0, 801.0, 100.0, 100.0);
    assert!(!cfg.in_expanded_viewport(&below, &vp));
}

#[test]
fn observer_margin_is_horizontal_percent() {
    let cfg = ProximityConfig::default();
    assert_eq!(cfg.observer_root_margin(), "0px 40.0% 0px 40.0%");
}

#[test]
fn offset_viewport_is_measured_in_client_space() {
    let cfg = ProximityConfig::default();
    // viewport starts 240px into the window
    let vp = Viewport::at(240.0, 0.0, 960.0, 900.0);
    assert_eq!(vp.center().x, 720.0);
    assert_eq!(vp.right(), 1200.0);

    let centered = Rect::new(620.0, 0.0, 200.0, 200.0);
    assert!(approx(cfg.scale_for(&centered, &vp), MAX_SCALE));
    // at the viewport's left edge: half a viewport from its center
    let at_left_edge = Rect::new(140.0, 0.0, 200.0, 200.0);
    assert!(approx(cfg.scale_for(&at_left_edge, &vp), MIN_SCALE));

    // margin 384px beyond the right edge at 1200
    assert!(cfg.in_expanded_viewport(&Rect::new(1583.0, 0.0, 10.0, 10.0), &vp));
    assert!(!cfg.in_expanded_viewport(&Rect::new(1585.0, 0.0, 10.0, 10.0), &vp));
    assert_eq!(Viewport::from_rect(&vp.as_rect()), vp);
}

#[test]
fn tracker_narrows_the_set_without_changing_scales() {
    let cfg = ProximityConfig::default();
    let vp = Viewport::new(1000.0, 800.0);
    let rects: Vec<Rect> = (0..6)
        .map(|i| Rect::new(-1500.0 + 600.0 * i as f64, 0.0, 300.0, 300.0))
        .collect();

    let mut tracker = ProximityTracker::new();
    for (i, r) in rects.iter().enumerate() {
        tracker.set_intersecting(i, cfg.in_expanded_viewport(r, &vp));
    }
    assert!(!tracker.is_empty());
    assert!(tracker.len() < rects.len());
    for i in tracker.sorted() {
        let full = cfg.scale_for(&rects[i], &vp);
        let tracked = cfg.transform_for(&rects[i], &vp).scale;
        assert_eq!(full, tracked);
    }

    tracker.set_intersecting(3, false);
    assert!(!tracker.is_tracked(3));
    let sorted = tracker.sorted();
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
}
