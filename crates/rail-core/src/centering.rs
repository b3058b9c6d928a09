//! Section centering: which proxy offset brings a rail section to the middle
//! of the viewport.

use crate::geometry::{clamp01, Viewport};
use crate::progress::rail_travel;

/// Proxy scroll offset at which the section's center meets the viewport's.
///
/// `section_left` is measured from the rail's left edge (untranslated). The
/// result is clamped to what the rail can actually travel, so the first and
/// last sections settle against the rail ends instead.
pub fn center_offset_for(
    section_left: f64,
    section_width: f64,
    rail_width: f64,
    viewport_width: f64,
    proxy_max_offset: f64,
) -> f64 {
    let travel = rail_travel(rail_width, viewport_width);
    if travel <= 0.0 || proxy_max_offset <= 0.0 {
        return 0.0;
    }
    let wanted = section_left + section_width * 0.5 - viewport_width * 0.5;
    clamp01(wanted / travel) * proxy_max_offset
}

/// Section whose center is nearest the viewport center, given each section's
/// current client-space `(left, width)`.
pub fn nearest_section(sections: &[(f64, f64)], viewport: &Viewport) -> Option<usize> {
    let cx = viewport.center().x;
    sections
        .iter()
        .enumerate()
        .map(|(i, (left, width))| (i, (left + width * 0.5 - cx).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
