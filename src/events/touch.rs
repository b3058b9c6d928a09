use crate::dom;
use crate::frame::FrameScheduler;
use crate::overlay::TouchHint;
use glam::DVec2;
use instant::Instant;
use rail_core::{is_horizontal, DeltaMode};
use std::rc::Rc;
use web_sys as web;

/// Wheel and touch on the overlay. Vertical input scrolls the proxy natively;
/// sideways input is forwarded to it here.
pub fn wire_gesture_handlers(
    overlay: &web::HtmlElement,
    scheduler: Rc<FrameScheduler>,
    hint: Rc<TouchHint>,
) {
    wire_wheel(overlay, scheduler.clone());
    wire_touch(overlay, scheduler, hint);
}

fn wire_wheel(overlay: &web::HtmlElement, scheduler: Rc<FrameScheduler>) {
    dom::listen_active(overlay, "wheel", move |ev: web::WheelEvent| {
        let delta = DVec2::new(ev.delta_x(), ev.delta_y());
        if !is_horizontal(delta) {
            return;
        }
        let ctx = scheduler.ctx().borrow();
        let Some(rail) = &ctx.rail else {
            return;
        };
        let d = ctx.cfg.gesture.wheel_delta(
            delta,
            DeltaMode::from_dom(ev.delta_mode()),
            ctx.viewport().height,
        );
        rail.scroll_by(d);
        ev.prevent_default();
    });
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<DVec2> {
    let t = ev.touches().item(0).or_else(|| ev.changed_touches().item(0))?;
    Some(DVec2::new(t.client_x() as f64, t.client_y() as f64))
}

fn wire_touch(overlay: &web::HtmlElement, scheduler: Rc<FrameScheduler>, hint: Rc<TouchHint>) {
    let start = scheduler.clone();
    dom::listen(overlay, "touchstart", move |ev: web::TouchEvent| {
        if ev.touches().length() != 1 {
            start.ctx().borrow_mut().swipe.cancel();
            return;
        }
        if let Some(at) = first_touch(&ev) {
            start.ctx().borrow_mut().swipe.begin(at, Instant::now());
        }
    });

    let moving = scheduler.clone();
    dom::listen_active(overlay, "touchmove", move |ev: web::TouchEvent| {
        let Some(at) = first_touch(&ev) else {
            return;
        };
        let mut ctx = moving.ctx().borrow_mut();
        let cfg = ctx.cfg.gesture;
        let delta = ctx.swipe.move_to(at, &cfg);
        if delta == 0.0 {
            return;
        }
        if let Some(rail) = &ctx.rail {
            rail.scroll_by(delta);
            ev.prevent_default();
        }
    });

    let ending = scheduler.clone();
    dom::listen(overlay, "touchend", move |_ev: web::TouchEvent| {
        let swipe = {
            let mut ctx = ending.ctx().borrow_mut();
            let cfg = ctx.cfg.gesture;
            ctx.swipe.end(Instant::now(), &cfg)
        };
        if let Some(s) = swipe {
            log::debug!("[touch] swipe {:?}", s);
            hint.dismiss();
        }
    });

    dom::listen(overlay, "touchcancel", move |_ev: web::TouchEvent| {
        scheduler.ctx().borrow_mut().swipe.cancel();
    });
}
