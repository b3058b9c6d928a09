// Scroll-progress engine and rail translation.

use rail_core::*;

const H: f64 = 5400.0;
const V: f64 = 900.0;

#[test]
fn progress_is_zero_at_top_and_one_at_bottom() {
    assert_eq!(compute_progress(0.0, H, V), 0.0);
    assert_eq!(compute_progress(H - V, H, V), 1.0);
}

#[test]
fn progress_is_bounded_and_non_decreasing() {
    let max = H - V;
    let mut prev = -1.0;
    for step in 0..=450 {
        let top = max * step as f64 / 450.0;
        let p = compute_progress(top, H, V);
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range at {top}");
        assert!(p >= prev, "progress decreased at {top}");
        prev = p;
    }
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(compute_progress(-120.0, H, V), 0.0);
    assert_eq!(compute_progress(H, H, V), 1.0);
}

#[test]
fn progress_never_divides_by_zero() {
    // proxy shorter than or equal to the viewport
    assert_eq!(compute_progress(0.0, V, V), 0.0);
    assert_eq!(compute_progress(50.0, 300.0, V), 0.0);
    assert_eq!(compute_progress(10.0, 0.0, 0.0), 0.0);
    assert_eq!(compute_progress(f64::NAN, H, V), 0.0);
    assert_eq!(compute_progress(10.0, f64::INFINITY, V), 0.0);
}

#[test]
fn scroll_state_is_measured_from_scratch() {
    let s = ScrollState::measure(2250.0, H, V);
    assert_eq!(s.raw_offset, 2250.0);
    assert_eq!(s.max_offset, 4500.0);
    assert!((s.progress - 0.5).abs() < 1e-12);
    assert_eq!(s.offset_for(0.25), 1125.0);
    assert_eq!(s.offset_for(3.0), 4500.0);
}

#[test]
fn rail_frame_translates_left_by_progress_share_of_travel() {
    let f = rail_frame(0.5, 8640.0, 1440.0);
    assert_eq!(f.translate_x, -3600.0);
    assert_eq!(f.bar_percent, 50.0);

    let start = rail_frame(0.0, 8640.0, 1440.0);
    assert_eq!(start.translate_x, 0.0);
    assert!(start.translate_x.is_sign_positive());
    assert_eq!(start.bar_percent, 0.0);

    let end = rail_frame(1.0, 8640.0, 1440.0);
    assert_eq!(end.translate_x, -7200.0);
    assert_eq!(end.bar_percent, 100.0);
}

#[test]
fn rail_narrower_than_viewport_does_not_move() {
    let f = rail_frame(0.7, 1000.0, 1440.0);
    assert_eq!(f.translate_x, 0.0);
    assert!((f.bar_percent - 70.0).abs() < 1e-9);
    assert_eq!(rail_travel(1000.0, 1440.0), 0.0);
}

#[test]
fn proxy_spacer_covers_every_panel() {
    assert_eq!(required_proxy_height(5, V), 5400.0);
    assert_eq!(required_proxy_height(0, V), 1800.0);

    assert_eq!(proxy_growth(5, V, 3000.0), Some(5400.0));
    // never shrinks a taller stylesheet height
    assert_eq!(proxy_growth(5, V, 8000.0), None);
    assert_eq!(proxy_growth(5, V, 5400.0), None);
    assert_eq!(proxy_growth(2, V, f64::NAN), Some(2700.0));
}
