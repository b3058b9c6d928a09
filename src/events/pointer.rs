use crate::constants::*;
use crate::dom;
use crate::frame::FrameScheduler;
use crate::probe;
use glam::DVec2;
use rail_core::{is_activation_key, tilt_for, HoverSlot, Tilt, CASE_HOVER_TOUCH_CLEAR_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    /// The scroll proxy, when the page has one.
    pub overlay: Option<web::HtmlElement>,
    pub cards: Vec<web::HtmlElement>,
    /// Container of `cards`; entering it drops the preview card.
    pub list: Option<web::HtmlElement>,
    pub scheduler: Rc<FrameScheduler>,
}

/// Hover the overlay would otherwise swallow: case cards, hero buttons and
/// the tilted card face.
#[derive(Default)]
struct MirroredHover {
    case_card: HoverSlot<web::Element>,
    cta: HoverSlot<web::Element>,
    tilt: HoverSlot<web::HtmlElement>,
}

impl MirroredHover {
    fn route(&mut self, under: Option<&web::Element>, at: DVec2) {
        self.set_case_card(under.and_then(|el| closest(el, CASE_CARD_SELECTOR)));
        if let Some(change) = self.cta.update(under.and_then(|el| closest(el, CTA_BUTTON_SELECTOR))) {
            swap_class(change.left, change.entered, HOVER_CLASS);
        }

        let face = under
            .and_then(|el| closest(el, TILT_SELECTOR))
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(change) = self.tilt.update(face) {
            if let Some(left) = change.left {
                dom::set_style(&left, "transform", &Tilt::REST.to_css());
            }
        }
        if let Some(face) = self.tilt.current() {
            let tilt = tilt_for(at, &dom::rect_of(face));
            dom::set_style(face, "transform", &tilt.to_css());
        }
    }

    fn set_case_card(&mut self, card: Option<web::Element>) {
        if let Some(change) = self.case_card.update(card) {
            swap_class(change.left, change.entered, HOVER_CLASS);
        }
    }

    fn clear(&mut self) {
        self.set_case_card(None);
        if let Some(cta) = self.cta.clear() {
            dom::toggle_class(&cta, HOVER_CLASS, false);
        }
        if let Some(face) = self.tilt.clear() {
            dom::set_style(&face, "transform", &Tilt::REST.to_css());
        }
    }

    /// Link of the hovered case card, for keyboard activation.
    fn case_link(&self) -> Option<web::HtmlAnchorElement> {
        self.case_card
            .current()?
            .query_selector(CASE_LINK_SELECTOR)
            .ok()??
            .dyn_into::<web::HtmlAnchorElement>()
            .ok()
    }
}

#[inline]
fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

fn swap_class(left: Option<web::Element>, entered: Option<web::Element>, class: &str) {
    if let Some(el) = left {
        dom::toggle_class(&el, class, false);
    }
    if let Some(el) = entered {
        dom::toggle_class(&el, class, true);
    }
}

/// Element under a client point, looking through the overlay if there is one.
fn element_under(w: &PointerWiring, x: f32, y: f32) -> Option<web::Element> {
    match &w.overlay {
        Some(overlay) => probe::element_beneath(&w.document, overlay, x, y),
        None => w.document.element_from_point(x, y),
    }
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    let hover = Rc::new(RefCell::new(MirroredHover::default()));
    if let Some(overlay) = &w.overlay {
        wire_overlay_hover(&w, overlay, hover.clone());
        wire_overlay_leave(&w, overlay, hover.clone());
        wire_overlay_click(&w, overlay);
    }
    wire_direct_hover(&w, hover.clone());
    wire_touch_hover(&w, hover.clone());
    wire_case_keys(&w, hover);
    wire_card_hover(&w);
    wire_list_entry(&w);
}

fn stack_len(scheduler: &FrameScheduler) -> usize {
    scheduler
        .ctx()
        .borrow()
        .stack
        .as_ref()
        .map(|s| s.cards.len())
        .unwrap_or(0)
}

// Hover on elements the overlay covers: look beneath it on every move.
fn wire_overlay_hover(w: &PointerWiring, overlay: &web::HtmlElement, hover: Rc<RefCell<MirroredHover>>) {
    let w = w.clone();
    let target = overlay.clone();
    dom::listen(overlay, "pointermove", move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let beneath = probe::element_beneath(&w.document, &target, x, y);

        let cursor = match beneath.as_ref().and_then(probe::clickable_of) {
            Some(_) => "pointer",
            None => "",
        };
        dom::set_style(&target, "cursor", cursor);
        hover
            .borrow_mut()
            .route(beneath.as_ref(), DVec2::new(x as f64, y as f64));

        let len = stack_len(&w.scheduler);
        if len == 0 {
            return;
        }
        let index = beneath.and_then(|el| probe::stack_index_of(&el, len));
        w.scheduler.ctx().borrow_mut().set_stack_hover(index);
    });
}

fn wire_overlay_leave(w: &PointerWiring, overlay: &web::HtmlElement, hover: Rc<RefCell<MirroredHover>>) {
    let scheduler = w.scheduler.clone();
    dom::listen(overlay, "pointerleave", move |_ev: web::PointerEvent| {
        hover.borrow_mut().clear();
        scheduler.ctx().borrow_mut().set_stack_hover(None);
    });
}

// Clicks on the overlay go to whatever clickable sits beneath it.
fn wire_overlay_click(w: &PointerWiring, overlay: &web::HtmlElement) {
    let document = w.document.clone();
    let target = overlay.clone();
    dom::listen(overlay, "click", move |ev: web::MouseEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let Some(beneath) = probe::element_beneath(&document, &target, x, y) else {
            return;
        };
        if let Some(clickable) = probe::clickable_of(&beneath) {
            ev.prevent_default();
            log::debug!("[pointer] click routed to <{}>", clickable.tag_name());
            clickable.click();
        }
    });
}

// Moves that reach the page directly, e.g. where the overlay does not cover.
fn wire_direct_hover(w: &PointerWiring, hover: Rc<RefCell<MirroredHover>>) {
    let overlay = w.overlay.clone();
    dom::listen(&w.document, "pointermove", move |ev: web::PointerEvent| {
        if ev.pointer_type() == "touch" {
            return;
        }
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if let Some(o) = &overlay {
            // handled beneath the overlay
            if el.is_same_node(Some(o.unchecked_ref::<web::Node>())) {
                return;
            }
        }
        let at = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        hover.borrow_mut().route(Some(&el), at);
    });
}

// A tap reveals the tapped case card for a moment.
fn wire_touch_hover(w: &PointerWiring, hover: Rc<RefCell<MirroredHover>>) {
    let wiring = w.clone();
    let clear_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::listen(&w.document, "touchstart", move |ev: web::TouchEvent| {
        let Some(t) = ev.touches().item(0) else {
            return;
        };
        let under = element_under(&wiring, t.client_x() as f32, t.client_y() as f32);
        hover
            .borrow_mut()
            .set_case_card(under.and_then(|el| closest(&el, CASE_CARD_SELECTOR)));

        dom::clear_timeout(clear_timer.take());
        let hover = hover.clone();
        let done = clear_timer.clone();
        let handle = dom::set_timeout(CASE_HOVER_TOUCH_CLEAR_MS, move || {
            done.set(None);
            hover.borrow_mut().set_case_card(None);
        });
        clear_timer.set(handle);
    });
}

// Enter or Space opens the hovered case card's link.
fn wire_case_keys(w: &PointerWiring, hover: Rc<RefCell<MirroredHover>>) {
    dom::listen_active(&w.document, "keydown", move |ev: web::KeyboardEvent| {
        if !is_activation_key(&ev.key()) {
            return;
        }
        let Some(link) = hover.borrow().case_link() else {
            return;
        };
        let href = link.href();
        if href.is_empty() {
            return;
        }
        ev.prevent_default();
        log::debug!("[pointer] key activates {href}");
        if let Some(win) = web::window() {
            _ = win.location().assign(&href);
        }
    });
}

// Cards reachable directly (no overlay on top, e.g. the mobile layout), and
// keyboard focus.
fn wire_card_hover(w: &PointerWiring) {
    for (i, card) in w.cards.iter().enumerate() {
        let enter = w.scheduler.clone();
        dom::listen(card, "pointerenter", move |_ev: web::PointerEvent| {
            enter.ctx().borrow_mut().set_stack_hover(Some(i));
        });
        let leave = w.scheduler.clone();
        dom::listen(card, "pointerleave", move |_ev: web::PointerEvent| {
            leave.ctx().borrow_mut().set_stack_hover(None);
        });
        let focus = w.scheduler.clone();
        dom::listen(card, "focus", move |_ev: web::FocusEvent| {
            focus.ctx().borrow_mut().set_stack_hover(Some(i));
        });
        let blur = w.scheduler.clone();
        dom::listen(card, "blur", move |_ev: web::FocusEvent| {
            blur.ctx().borrow_mut().set_stack_hover(None);
        });
    }
}

// The first pointer or focus inside the list ends the preview card.
fn wire_list_entry(w: &PointerWiring) {
    let Some(list) = &w.list else {
        return;
    };
    let pointer = w.scheduler.clone();
    dom::listen(list, "pointerenter", move |_ev: web::PointerEvent| {
        pointer.ctx().borrow_mut().release_stack_forced();
    });
    let focus = w.scheduler.clone();
    dom::listen(list, "focusin", move |_ev: web::FocusEvent| {
        focus.ctx().borrow_mut().release_stack_forced();
    });
}
