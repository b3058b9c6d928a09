use crate::constants::{SCALE_INDEX_ATTR, SCALE_SELECTOR};
use crate::dom;
use rail_core::{ProximityConfig, ProximityTracker, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Proximity scaling for `.rail-scale` elements.
///
/// An intersection observer keeps the set of elements near the viewport; only
/// those are measured and rescaled each frame.
pub struct ScaleEffect {
    elements: Vec<web::HtmlElement>,
    tracker: Rc<RefCell<ProximityTracker>>,
    _observer: Option<web::IntersectionObserver>,
}

impl ScaleEffect {
    pub fn from_document(
        document: &web::Document,
        cfg: &ProximityConfig,
        on_change: Rc<dyn Fn()>,
    ) -> Option<Self> {
        let elements = dom::document_query_all_html(document, SCALE_SELECTOR);
        if elements.is_empty() {
            log::debug!("[scale] no {SCALE_SELECTOR} elements");
            return None;
        }
        for (i, el) in elements.iter().enumerate() {
            _ = el.set_attribute(SCALE_INDEX_ATTR, &i.to_string());
        }
        let tracker = Rc::new(RefCell::new(ProximityTracker::new()));
        let observer = observe(&elements, cfg, tracker.clone(), on_change);
        if observer.is_none() {
            // no observer: track everything, the formula is the same
            let mut t = tracker.borrow_mut();
            for i in 0..elements.len() {
                t.set_intersecting(i, true);
            }
        }
        log::info!("[scale] elements={}", elements.len());
        Some(Self {
            elements,
            tracker,
            _observer: observer,
        })
    }

    pub fn update(&self, cfg: &ProximityConfig, viewport: &Viewport) {
        for i in self.tracker.borrow().sorted() {
            let Some(el) = self.elements.get(i) else {
                continue;
            };
            let t = cfg.transform_for(&dom::rect_of(el), viewport);
            dom::set_style(el, "transform", &format!("scale({:.4})", t.scale));
        }
    }
}

fn observe(
    elements: &[web::HtmlElement],
    cfg: &ProximityConfig,
    tracker: Rc<RefCell<ProximityTracker>>,
    on_change: Rc<dyn Fn()>,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        {
            let mut t = tracker.borrow_mut();
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let index = entry
                    .target()
                    .get_attribute(SCALE_INDEX_ATTR)
                    .and_then(|s| s.parse::<usize>().ok());
                if let Some(i) = index {
                    t.set_intersecting(i, entry.is_intersecting());
                }
            }
        }
        on_change();
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&cfg.observer_root_margin());
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[scale] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}
