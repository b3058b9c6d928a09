use crate::constants::*;
use crate::dom;
use rail_core::{center_offset_for, nearest_section, proxy_growth, rail_frame, ScrollState, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rail translation and progress bar, driven by the scroll proxy.
pub struct RailEffect {
    pub proxy: web::HtmlElement,
    pub rail: web::HtmlElement,
    pub progress_bar: Option<web::HtmlElement>,
    pub sections: Vec<web::HtmlElement>,
    spacer: Option<web::HtmlElement>,
    last_tx: Option<f64>,
}

impl RailEffect {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let Some(proxy) = dom::html_by_id(document, PROXY_ID) else {
            log::warn!("[rail] missing #{PROXY_ID}; rail disabled");
            return None;
        };
        let Some(rail) = dom::html_by_id(document, RAIL_ID) else {
            log::warn!("[rail] missing #{RAIL_ID}; rail disabled");
            return None;
        };
        let progress_bar = dom::html_by_id(document, PROGRESS_BAR_ID);
        let sections = dom::document_query_all_html(document, RAIL_SECTION_SELECTOR);
        let spacer = proxy
            .query_selector(PROXY_SPACER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        log::info!("[rail] sections={}", sections.len());
        let effect = Self {
            proxy,
            rail,
            progress_bar,
            sections,
            spacer,
            last_tx: None,
        };
        effect.size_proxy(dom::viewport_of(None).height);
        Some(effect)
    }

    /// Grows the proxy spacer so every section gets a viewport of scroll.
    pub fn size_proxy(&self, viewport_height: f64) {
        let Some(spacer) = &self.spacer else {
            return;
        };
        let current = spacer.offset_height() as f64;
        if let Some(height) = proxy_growth(self.sections.len(), viewport_height, current) {
            log::debug!("[rail] proxy spacer {current:.0}px -> {height:.0}px");
            dom::set_style(spacer, "height", &format!("{height:.0}px"));
        }
    }

    pub fn measure(&self) -> ScrollState {
        ScrollState::measure(
            self.proxy.scroll_top() as f64,
            self.proxy.scroll_height() as f64,
            self.proxy.client_height() as f64,
        )
    }

    #[inline]
    fn rail_width(&self) -> f64 {
        self.rail.scroll_width() as f64
    }

    pub fn update(&mut self, viewport: &Viewport) -> ScrollState {
        let scroll = self.measure();
        let frame = rail_frame(scroll.progress, self.rail_width(), viewport.width);
        if self.last_tx != Some(frame.translate_x) {
            self.last_tx = Some(frame.translate_x);
            dom::set_style(
                &self.rail,
                "transform",
                &format!("translate3d({:.2}px, 0, 0)", frame.translate_x),
            );
        }
        dom::set_style(&self.rail, RAIL_X_VAR, &format!("{:.2}px", frame.translate_x));
        dom::set_style(
            &self.rail,
            RAIL_PROGRESS_VAR,
            &format!("{:.4}", scroll.progress),
        );
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.3}%", frame.bar_percent));
        }
        scroll
    }

    /// Scrolls the proxy so section `index` sits centered in the viewport.
    pub fn center_section(&self, index: usize, viewport: &Viewport) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        let scroll = self.measure();
        let offset = center_offset_for(
            section.offset_left() as f64,
            section.offset_width() as f64,
            self.rail_width(),
            viewport.width,
            scroll.max_offset,
        );
        log::info!("[rail] center section {index} -> offset {offset:.0}");
        self.proxy.set_scroll_top(offset.round() as i32);
    }

    pub fn section_index_by_id(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    /// Section currently nearest the viewport center.
    pub fn nearest_section(&self, viewport: &Viewport) -> Option<usize> {
        let spans: Vec<(f64, f64)> = self
            .sections
            .iter()
            .map(|s| {
                let r = dom::rect_of(s);
                (r.left, r.width)
            })
            .collect();
        nearest_section(&spans, viewport)
    }

    /// Adds `delta` pixels to the proxy's scroll offset.
    pub fn scroll_by(&self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        let scroll = self.measure();
        let next = (scroll.raw_offset + delta).clamp(0.0, scroll.max_offset);
        self.proxy.set_scroll_top(next.round() as i32);
    }
}
