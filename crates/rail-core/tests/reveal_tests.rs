// Word reveal fraction and prefix marking.

use rail_core::*;

const VIEWPORT_W: f64 = 1440.0;
const CENTER: f64 = 720.0;
const HEADING_W: f64 = 600.0;

fn fraction_at(dist: f64) -> f64 {
    RevealConfig::default().progress_for(CENTER + dist, CENTER, HEADING_W, VIEWPORT_W)
}

#[test]
fn heading_within_tolerance_is_fully_revealed() {
    // tolerance = max(12, 600 * 0.04) = 24
    assert_eq!(fraction_at(0.0), 1.0);
    assert_eq!(fraction_at(24.0), 1.0);
    assert_eq!(fraction_at(-24.0), 1.0);
}

#[test]
fn fraction_falls_off_linearly_past_tolerance() {
    // threshold = min(720, max(160, 300)) = 300
    let f = fraction_at(24.0 + 150.0);
    assert!((f - (0.5 + REVEAL_BIAS)).abs() < 1e-12, "got {f}");
    assert!(fraction_at(100.0) > fraction_at(200.0));
}

#[test]
fn threshold_never_exceeds_half_the_viewport() {
    let cfg = RevealConfig::default();
    // heading wider than the viewport: threshold is capped at 200 (half of 400)
    let f = cfg.progress_for(200.0 + 40.0 + 100.0, 200.0, 1000.0, 400.0);
    assert!((f - (0.5 + REVEAL_BIAS)).abs() < 1e-12, "got {f}");
}

#[test]
fn small_heading_uses_minimum_threshold_and_tolerance() {
    let cfg = RevealConfig::default();
    // tolerance 12, threshold 160
    let f = cfg.progress_for(CENTER + 12.0 + 80.0, CENTER, 100.0, VIEWPORT_W);
    assert!((f - (0.5 + REVEAL_BIAS)).abs() < 1e-12, "got {f}");
}

#[test]
fn far_heading_keeps_the_bias_floor() {
    let f = fraction_at(5000.0);
    assert_eq!(f, REVEAL_BIAS);
    // The bias is intentional: a section far from center still shows its
    // first ceil(0.05 * N) words.
    for n in [1usize, 7, 20, 33, 40, 120] {
        let expected = (REVEAL_BIAS * n as f64).ceil() as usize;
        assert_eq!(filled_count(f, n), expected, "n={n}");
        assert!(filled_count(f, n) >= 1);
    }
}

#[test]
fn degenerate_viewport_does_not_produce_nan() {
    let cfg = RevealConfig::default();
    let f = cfg.progress_for(500.0, 0.0, 0.0, 0.0);
    assert!(f.is_finite());
    assert!((0.0..=1.0).contains(&f));
}

#[test]
fn filled_count_is_monotonic_and_complete() {
    let n = 17;
    let mut prev = 0;
    for step in 0..=1000 {
        let f = step as f64 / 1000.0;
        let c = filled_count(f, n);
        assert!(c >= prev, "filled count decreased at {f}");
        assert!(c <= n);
        prev = c;
    }
    assert_eq!(filled_count(1.0, n), n);
    assert_eq!(filled_count(0.0, n), 0);
    assert_eq!(filled_count(0.5, 0), 0);
    assert_eq!(filled_count(1.7, 4), 4);
}

#[test]
fn reveal_mask_is_a_prefix_and_idempotent() {
    let a: Vec<bool> = reveal_mask(0.42, 12).collect();
    let b: Vec<bool> = reveal_mask(0.42, 12).collect();
    assert_eq!(a, b);
    let filled = filled_count(0.42, 12);
    assert_eq!(a.iter().filter(|r| **r).count(), filled);
    assert!(a[..filled].iter().all(|r| *r));
    assert!(a[filled..].iter().all(|r| !*r));
}

#[test]
fn cursor_reports_only_changes() {
    let mut cursor = RevealCursor::default();
    assert_eq!(cursor.advance(0.5, 10), Some(5));
    assert_eq!(cursor.advance(0.5, 10), None);
    assert_eq!(cursor.advance(0.52, 10), Some(6));
    assert_eq!(cursor.advance(0.55, 10), None);
    cursor.reset();
    assert_eq!(cursor.advance(0.55, 10), Some(6));
}
