#![cfg(target_arch = "wasm32")]
use rail_core::{FxConfig, SwipeTracker, OVERRIDE_KEYS};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod overlay;
mod probe;

use constants::*;
use effects::{RailEffect, RevealEffect, ScaleEffect, StackEffect};
use frame::{FrameScheduler, FxContext};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rail-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Defaults, overridden by `data-fx-*` attributes on the rail viewport.
fn read_config(viewport_el: Option<&web::HtmlElement>) -> FxConfig {
    let Some(el) = viewport_el else {
        return FxConfig::default();
    };
    let pairs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| el.get_attribute(&config_attr(key)).map(|v| (*key, v)))
        .collect();
    let (cfg, errors) = FxConfig::default()
        .with_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[config] ignoring override: {e}");
    }
    if !pairs.is_empty() {
        log::info!("[config] {} override(s) applied", pairs.len());
    }
    cfg
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let viewport_el = dom::html_by_id(&document, VIEWPORT_ID);
    let cfg = read_config(viewport_el.as_ref());

    overlay::run_loader(&document, cfg.loader_fallback_ms);
    let hint = overlay::TouchHint::new(&document);
    hint.schedule(cfg.hint_show_ms, cfg.hint_hide_ms);

    // Tokenize and enumerate once; geometry is read fresh every frame.
    let rail = RailEffect::from_document(&document);
    let reveal = RevealEffect::from_document(&document);
    let stack = StackEffect::from_document(&document);
    let overlay_el = rail.as_ref().map(|r| r.proxy.clone());
    let cards = stack.as_ref().map(|s| s.cards.clone()).unwrap_or_default();
    let list = stack.as_ref().map(|s| s.container.clone());

    let ctx = Rc::new(RefCell::new(FxContext {
        cfg,
        last_width: dom::viewport_of(None).width,
        viewport_el,
        rail,
        scale: None,
        reveal,
        stack,
        swipe: SwipeTracker::default(),
    }));
    let scheduler = FrameScheduler::new(ctx.clone());

    // The observer reports asynchronously, so it can be wired after the
    // context exists and hand its updates to the scheduler.
    let on_change: Rc<dyn Fn()> = {
        let scheduler = scheduler.clone();
        Rc::new(move || scheduler.request())
    };
    let scale = ScaleEffect::from_document(&document, &cfg.proximity, on_change);
    ctx.borrow_mut().scale = scale;

    if let Some(overlay_el) = &overlay_el {
        events::wire_scroll(overlay_el, scheduler.clone());
        events::wire_gesture_handlers(overlay_el, scheduler.clone(), hint.clone());
    }
    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        overlay: overlay_el,
        cards,
        list,
        scheduler: scheduler.clone(),
    });
    events::wire_resize(scheduler.clone());
    events::wire_nav_links(&document, scheduler.clone());

    // First layout without waiting for input.
    scheduler.request();
    log::info!("[init] ready");
    Ok(())
}
