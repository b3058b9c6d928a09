use crate::constants::*;
use crate::dom;
use rail_core::{FireOnce, LOADER_SLIDE_DELAY_MS, LOADER_START_DELAY_MS};
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for pages without the CSS class
    _ = el.remove_attribute("style");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.set_attribute("style", "display:none");
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    if el.class_list().contains(HIDDEN_CLASS) {
        return true;
    }
    el.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Runs the loader once: after the start delay the logo comes on, a moment
/// later the panel slides away, and it is hidden on `transitionend` or after
/// `fallback_ms` if the transition never reports.
pub fn run_loader(document: &web::Document, fallback_ms: i32) {
    let Some(loader) = document.get_element_by_id(LOADER_ID) else {
        return;
    };
    if is_hidden(&loader) {
        return;
    }
    let done = Rc::new(FireOnce::new());
    let hide_once = {
        let loader = loader.clone();
        move || {
            if done.fire() {
                hide(&loader);
                log::info!("[loader] hidden");
            }
        }
    };

    dom::set_timeout(LOADER_START_DELAY_MS, move || {
        _ = loader.class_list().add_1(LOADER_ON_CLASS);
        let sliding = loader.clone();
        dom::set_timeout(LOADER_SLIDE_DELAY_MS, move || {
            _ = sliding.class_list().add_1(LOADER_LEAVING_CLASS);
        });

        let on_end = hide_once.clone();
        dom::listen(&loader, "transitionend", move |ev: web::TransitionEvent| {
            // only the loader's own transition, not a child's
            if ev.target() == ev.current_target() {
                on_end();
            }
        });
        dom::set_timeout(fallback_ms, hide_once);
    });
}

/// Swipe hint for touch devices. Shown after a delay, hidden by its timer or
/// the first touch, whichever comes first.
pub struct TouchHint {
    el: Option<web::Element>,
    dismissed: FireOnce,
}

impl TouchHint {
    pub fn new(document: &web::Document) -> Rc<Self> {
        let el = document.get_element_by_id(TOUCH_HINT_ID);
        Rc::new(Self {
            el,
            dismissed: FireOnce::new(),
        })
    }

    pub fn schedule(self: &Rc<Self>, show_ms: i32, hide_ms: i32) {
        if self.el.is_none() || !dom::is_touch_device() {
            return;
        }
        let this = self.clone();
        dom::set_timeout(show_ms, move || this.show());
        let this = self.clone();
        dom::set_timeout(hide_ms, move || this.dismiss());
        if let Some(w) = web::window() {
            let this = self.clone();
            dom::listen(&w, "touchstart", move |_ev: web::TouchEvent| this.dismiss());
        }
    }

    fn show(&self) {
        if let (Some(el), false) = (&self.el, self.dismissed.has_fired()) {
            show(el);
            log::debug!("[hint] shown");
        }
    }

    pub fn dismiss(&self) {
        let Some(el) = &self.el else {
            return;
        };
        if self.dismissed.fire() {
            hide(el);
            log::debug!("[hint] dismissed");
        }
    }
}
