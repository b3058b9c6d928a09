use crate::constants::{NAV_LINK_SELECTOR, NAV_TARGET_ATTR};
use crate::dom;
use crate::frame::FrameScheduler;
use rail_core::crosses_breakpoint;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(proxy: &web::HtmlElement, scheduler: Rc<FrameScheduler>) {
    dom::listen(proxy, "scroll", move |_ev: web::Event| {
        scheduler.request();
    });
}

/// Debounced resize. Crossing the mobile/desktop breakpoint reloads the page;
/// any other resize re-centers the nearest section and schedules a frame.
pub fn wire_resize(scheduler: Rc<FrameScheduler>) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::listen(&window, "resize", move |_ev: web::Event| {
        dom::clear_timeout(pending.take());
        let debounce_ms = scheduler.ctx().borrow().cfg.resize_debounce_ms;
        let scheduler = scheduler.clone();
        let pending_done = pending.clone();
        let handle = dom::set_timeout(debounce_ms, move || {
            pending_done.set(None);
            on_resize_settled(&scheduler);
        });
        pending.set(handle);
    });
}

fn on_resize_settled(scheduler: &FrameScheduler) {
    let (before, breakpoint, nearest) = {
        let ctx = scheduler.ctx().borrow();
        let viewport = ctx.viewport();
        let nearest = ctx.rail.as_ref().and_then(|r| r.nearest_section(&viewport));
        (ctx.last_width, ctx.cfg.breakpoint, nearest)
    };
    let after = dom::viewport_of(None).width;
    if crosses_breakpoint(before, after, breakpoint) {
        log::info!("[resize] {before:.0}px -> {after:.0}px crosses {breakpoint:.0}px; reloading");
        if let Some(w) = web::window() {
            _ = w.location().reload();
        }
        return;
    }
    {
        let mut ctx = scheduler.ctx().borrow_mut();
        ctx.last_width = after;
        let viewport = ctx.viewport();
        if let Some(rail) = &ctx.rail {
            rail.size_proxy(dom::viewport_of(None).height);
            if let Some(i) = nearest {
                rail.center_section(i, &viewport);
            }
        }
    }
    scheduler.request();
}

/// `a[data-rail-target="section-id"]` scrolls the rail to that section.
pub fn wire_nav_links(document: &web::Document, scheduler: Rc<FrameScheduler>) {
    for link in dom::document_query_all_html(document, NAV_LINK_SELECTOR) {
        let Some(target) = link.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        let scheduler = scheduler.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let ctx = scheduler.ctx().borrow();
            let Some(rail) = &ctx.rail else {
                return;
            };
            let Some(i) = rail.section_index_by_id(&target) else {
                log::warn!("[nav] no rail section #{target}");
                return;
            };
            ev.prevent_default();
            rail.center_section(i, &ctx.viewport());
        });
    }
}
