use rail_core::{Rect, Transform, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all_html(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn document_query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    match document.document_element() {
        Some(root) => query_all_html(&root, selector),
        None => Vec::new(),
    }
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Layout viewport used by every effect: the rail viewport element when the
/// page has one, otherwise the window.
pub fn viewport_of(el: Option<&web::HtmlElement>) -> Viewport {
    if let Some(el) = el {
        let r = rect_of(el);
        if r.width > 0.0 && r.height > 0.0 {
            return Viewport::from_rect(&r);
        }
    }
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn apply_transform(el: &web::HtmlElement, t: &Transform) {
    let style = el.style();
    _ = style.set_property("transform", &t.to_css());
    _ = style.set_property("opacity", &format!("{:.3}", t.opacity));
    if let Some(z) = t.z_index {
        _ = style.set_property("z-index", &z.to_string());
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Page-lifetime listener; the closure is leaked.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], but non-passive so the handler may `prevent_default`.
pub fn listen_active<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// One-shot timer. Returns the handle for `clear_timeout`, or None if the
/// browser refused it.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) -> Option<i32> {
    let w = web::window()?;
    let closure = Closure::once(handler);
    let handle = w
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms.max(0),
        )
        .ok();
    closure.forget();
    handle
}

#[inline]
pub fn clear_timeout(handle: Option<i32>) {
    if let (Some(w), Some(h)) = (web::window(), handle) {
        w.clear_timeout_with_handle(h);
    }
}

pub fn is_touch_device() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}
