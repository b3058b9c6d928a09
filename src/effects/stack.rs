use crate::constants::*;
use crate::dom;
use rail_core::{StackConfig, StackItem, StackState, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Services stack: card layout, active card and its media.
pub struct StackEffect {
    pub container: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    pub media: Option<web::HtmlImageElement>,
    pub state: StackState,
    last_active: Option<usize>,
    last_hover: Option<usize>,
}

impl StackEffect {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let container = dom::html_by_id(document, STACK_ID)?;
        let cards = dom::query_all_html(&container, STACK_ITEM_SELECTOR);
        let items = cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                _ = card.set_attribute(STACK_INDEX_ATTR, &index.to_string());
                StackItem {
                    index,
                    image_url: card.get_attribute(STACK_IMAGE_ATTR).unwrap_or_default(),
                }
            })
            .collect::<Vec<_>>();
        let media = document
            .get_element_by_id(STACK_MEDIA_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        if media.is_none() {
            log::debug!("[stack] no #{STACK_MEDIA_ID} image; media swap disabled");
        }
        log::info!("[stack] items={}", items.len());
        Some(Self {
            container,
            cards,
            media,
            state: StackState::new(items).with_forced(0),
            last_active: None,
            last_hover: None,
        })
    }

    pub fn update(&mut self, cfg: &StackConfig, viewport: &Viewport) {
        let rect = dom::rect_of(&self.container);
        let g = cfg.sweep(&rect, viewport);
        for card in cfg.layout(g, self.cards.len(), rect.height) {
            if let Some(el) = self.cards.get(card.index) {
                dom::apply_transform(el, &card.transform);
            }
        }
        self.refresh_active(g);
    }

    /// Drops the initial preview card. True if one was showing.
    pub fn release_forced(&mut self, g: f64) -> bool {
        if !self.state.release_forced() {
            return false;
        }
        log::debug!("[stack] forced preview released");
        self.refresh_active(g);
        true
    }

    /// Re-resolves the active card; also called directly on hover changes.
    pub fn refresh_active(&mut self, g: f64) {
        let hover = self.state.hover_index();
        if hover != self.last_hover {
            for (i, el) in self.cards.iter().enumerate() {
                dom::toggle_class(el, STACK_HOVER_CLASS, Some(i) == hover);
            }
            self.last_hover = hover;
        }
        let active = self.state.resolve_active(g);
        if active != self.last_active {
            for (i, el) in self.cards.iter().enumerate() {
                dom::toggle_class(el, STACK_ACTIVE_CLASS, Some(i) == active);
            }
            self.last_active = active;
        }
        let Some(active) = active else {
            return;
        };
        if let Some(img) = &self.media {
            if let Some(url) = self.state.media_for(active) {
                log::debug!("[stack] media -> {url}");
                img.set_src(url);
            }
        }
    }

    pub fn current_sweep(&self, cfg: &StackConfig, viewport: &Viewport) -> f64 {
        cfg.sweep(&dom::rect_of(&self.container), viewport)
    }
}
