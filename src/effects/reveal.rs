use crate::constants::*;
use crate::dom;
use rail_core::{has_class, split_words, Piece, RevealConfig, RevealCursor, Viewport, WORD_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

struct RevealBlock {
    heading: web::Element,
    words: Vec<web::Element>,
    cursor: RevealCursor,
}

/// Word-by-word reveal for every `[data-reveal]` section.
pub struct RevealEffect {
    blocks: Vec<RevealBlock>,
}

impl RevealEffect {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let sections = dom::document_query_all_html(document, REVEAL_SECTION_SELECTOR);
        let mut blocks = Vec::with_capacity(sections.len());
        for section in sections {
            for text in dom::query_all_html(&section, REVEAL_TEXT_SELECTOR) {
                tokenize_element(document, &text);
            }
            let heading: web::Element = match section.query_selector(REVEAL_HEADING_SELECTOR) {
                Ok(Some(h)) => h,
                _ => section.clone().into(),
            };
            let words: Vec<web::Element> =
                dom::query_all_html(&section, &format!(".{WORD_CLASS}"))
                    .into_iter()
                    .map(Into::into)
                    .collect();
            blocks.push(RevealBlock {
                heading,
                words,
                cursor: RevealCursor::default(),
            });
        }
        if blocks.is_empty() {
            log::debug!("[reveal] no {REVEAL_SECTION_SELECTOR} sections");
            return None;
        }
        log::info!(
            "[reveal] blocks={} words={}",
            blocks.len(),
            blocks.iter().map(|b| b.words.len()).sum::<usize>()
        );
        Some(Self { blocks })
    }

    pub fn update(&mut self, cfg: &RevealConfig, viewport: &Viewport) {
        for block in &mut self.blocks {
            let rect = dom::rect_of(&block.heading);
            let fraction =
                cfg.progress_for(rect.center().x, viewport.center().x, rect.width, viewport.width);
            if let Some(filled) = block.cursor.advance(fraction, block.words.len()) {
                for (i, w) in block.words.iter().enumerate() {
                    dom::toggle_class(w, WORD_REVEALED_CLASS, i < filled);
                }
            }
        }
    }
}

/// Wraps each word under `el` in a `span.fx-word`, keeping inline markup.
/// Already tokenized elements are skipped.
pub fn tokenize_element(document: &web::Document, el: &web::HtmlElement) -> usize {
    if el.has_attribute(WORDS_READY_ATTR) {
        return 0;
    }
    let mut texts = Vec::new();
    collect_text_nodes(el, &mut texts);
    let mut wrapped = 0;
    for text in texts {
        wrapped += wrap_text_node(document, &text);
    }
    _ = el.set_attribute(WORDS_READY_ATTR, "1");
    wrapped
}

fn collect_text_nodes(node: &web::Node, out: &mut Vec<web::Text>) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        match child.node_type() {
            web::Node::TEXT_NODE => {
                if let Ok(t) = child.dyn_into::<web::Text>() {
                    out.push(t);
                }
            }
            web::Node::ELEMENT_NODE => {
                let is_word = child
                    .dyn_ref::<web::Element>()
                    .map(|e| has_class(&e.class_name(), WORD_CLASS))
                    .unwrap_or(false);
                if !is_word {
                    collect_text_nodes(&child, out);
                }
            }
            _ => {}
        }
    }
}

fn wrap_text_node(document: &web::Document, text: &web::Text) -> usize {
    let Some(parent) = text.parent_node() else {
        return 0;
    };
    let content = text.data();
    let pieces = split_words(&content);
    if !pieces.iter().any(|p| matches!(p, Piece::Word(_))) {
        return 0;
    }
    let anchor: &web::Node = text.as_ref();
    let mut wrapped = 0;
    for p in pieces {
        let node: web::Node = match p {
            Piece::Word(w) => {
                let Ok(span) = document.create_element("span") else {
                    continue;
                };
                span.set_class_name(WORD_CLASS);
                span.set_text_content(Some(w));
                wrapped += 1;
                span.into()
            }
            Piece::Space(s) => document.create_text_node(s).into(),
        };
        _ = parent.insert_before(&node, Some(anchor));
    }
    _ = parent.remove_child(anchor);
    wrapped
}
