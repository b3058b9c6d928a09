use crate::constants::{stack_index_selector, CLICKABLE_SELECTOR, STACK_INDEX_ATTR};
use rail_core::{parse_stack_index, probe_through, HitTestTarget};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The scroll-proxy overlay seen as a hit-test target.
pub struct OverlayHitTest<'a>(pub &'a web::HtmlElement);

impl HitTestTarget for OverlayHitTest<'_> {
    fn pointer_events(&self) -> String {
        self.0
            .style()
            .get_property_value("pointer-events")
            .unwrap_or_default()
    }

    fn set_pointer_events(&self, value: &str) {
        let style = self.0.style();
        if value.is_empty() {
            _ = style.remove_property("pointer-events");
        } else {
            _ = style.set_property("pointer-events", value);
        }
    }
}

/// Element under `(x, y)` as if the overlay were not there.
pub fn element_beneath(
    document: &web::Document,
    overlay: &web::HtmlElement,
    x: f32,
    y: f32,
) -> Option<web::Element> {
    let hit = probe_through(&OverlayHitTest(overlay), || {
        document.element_from_point(x, y)
    })?;
    // the overlay can still come back if something else re-enabled it mid-probe
    (!hit.is_same_node(Some(overlay.unchecked_ref::<web::Node>()))).then_some(hit)
}

/// Stack card containing `el`, by ancestry.
pub fn stack_index_of(el: &web::Element, len: usize) -> Option<usize> {
    let card = el.closest(&stack_index_selector()).ok()??;
    parse_stack_index(card.get_attribute(STACK_INDEX_ATTR).as_deref(), len)
}

/// Nearest clickable ancestor (or self) of `el`.
pub fn clickable_of(el: &web::Element) -> Option<web::HtmlElement> {
    el.closest(CLICKABLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
}
