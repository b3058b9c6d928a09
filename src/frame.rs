use crate::dom;
use crate::effects::{RailEffect, RevealEffect, ScaleEffect, StackEffect};
use rail_core::{FrameGate, FxConfig, SwipeTracker, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame needs, built once at init and shared by the handlers.
pub struct FxContext {
    pub cfg: FxConfig,
    pub viewport_el: Option<web::HtmlElement>,
    pub rail: Option<RailEffect>,
    pub scale: Option<ScaleEffect>,
    pub reveal: Option<RevealEffect>,
    pub stack: Option<StackEffect>,
    pub swipe: SwipeTracker,
    pub last_width: f64,
}

impl FxContext {
    #[inline]
    pub fn viewport(&self) -> Viewport {
        dom::viewport_of(self.viewport_el.as_ref())
    }

    pub fn frame(&mut self) {
        let viewport = self.viewport();
        if let Some(rail) = &mut self.rail {
            rail.update(&viewport);
        }
        if let Some(scale) = &self.scale {
            scale.update(&self.cfg.proximity, &viewport);
        }
        if let Some(reveal) = &mut self.reveal {
            reveal.update(&self.cfg.reveal, &viewport);
        }
        if let Some(stack) = &mut self.stack {
            stack.update(&self.cfg.stack, &viewport);
        }
    }

    /// Applies a hover change immediately instead of waiting for a frame.
    pub fn set_stack_hover(&mut self, index: Option<usize>) {
        let viewport = self.viewport();
        let cfg = self.cfg.stack;
        let Some(stack) = &mut self.stack else {
            return;
        };
        if stack.state.hover_index() == index {
            return;
        }
        match index {
            Some(i) => {
                // a pointer on a card is inside the list
                stack.state.release_forced();
                stack.state.enter(i);
            }
            None => stack.state.leave(),
        }
        let g = stack.current_sweep(&cfg, &viewport);
        stack.refresh_active(g);
    }

    /// The pointer or focus entered the stack list: drop the preview card.
    pub fn release_stack_forced(&mut self) {
        let viewport = self.viewport();
        let cfg = self.cfg.stack;
        let Some(stack) = &mut self.stack else {
            return;
        };
        let g = stack.current_sweep(&cfg, &viewport);
        stack.release_forced(g);
    }
}

/// Coalesces update requests into at most one pending animation frame.
pub struct FrameScheduler {
    gate: FrameGate,
    ctx: Rc<RefCell<FxContext>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler {
    pub fn new(ctx: Rc<RefCell<FxContext>>) -> Rc<Self> {
        let scheduler = Rc::new(Self {
            gate: FrameGate::new(),
            ctx,
            tick: RefCell::new(None),
        });
        // The closure keeps the scheduler alive for the page's lifetime.
        let this = scheduler.clone();
        *scheduler.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            this.gate.complete();
            match this.ctx.try_borrow_mut() {
                Ok(mut ctx) => ctx.frame(),
                Err(_) => log::warn!("[frame] context busy; frame skipped"),
            }
        }) as Box<dyn FnMut()>));
        scheduler
    }

    pub fn ctx(&self) -> &Rc<RefCell<FxContext>> {
        &self.ctx
    }

    /// Requests a frame unless one is already pending.
    pub fn request(&self) {
        if !self.gate.try_schedule() {
            return;
        }
        let Some(w) = web::window() else {
            self.gate.complete();
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            self.gate.complete();
            return;
        };
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
            self.gate.complete();
        }
    }
}
