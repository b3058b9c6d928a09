// Element ids, selectors and class names the effects bind to. The host page
// provides the markup; anything missing disables the dependent effect.

// Scroll proxy and rail
pub const PROXY_ID: &str = "scroll-proxy";
pub const RAIL_ID: &str = "rail";
pub const VIEWPORT_ID: &str = "rail-viewport";
pub const PROGRESS_BAR_ID: &str = "rail-progress";
pub const RAIL_SECTION_SELECTOR: &str = "#rail > section";
pub const NAV_LINK_SELECTOR: &str = "a[data-rail-target]";
pub const NAV_TARGET_ATTR: &str = "data-rail-target";
// Spacer inside the proxy that gives it its scroll height
pub const PROXY_SPACER_SELECTOR: &str = ".scroll-height";

// CSS custom properties published every frame
pub const RAIL_X_VAR: &str = "--rail-x";
pub const RAIL_PROGRESS_VAR: &str = "--rail-progress";

// Proximity scaling
pub const SCALE_SELECTOR: &str = ".rail-scale";
pub const SCALE_INDEX_ATTR: &str = "data-fx-index";

// Word reveal
pub const REVEAL_SECTION_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_HEADING_SELECTOR: &str = ".reveal-heading";
pub const REVEAL_TEXT_SELECTOR: &str = ".reveal-heading, .reveal-body";
pub const WORDS_READY_ATTR: &str = "data-words-ready";
pub const WORD_REVEALED_CLASS: &str = "is-revealed";

// Services stack
pub const STACK_ID: &str = "stack";
pub const STACK_ITEM_SELECTOR: &str = ".stack-item";
pub const STACK_INDEX_ATTR: &str = "data-stack-index";
pub const STACK_IMAGE_ATTR: &str = "data-image";
pub const STACK_MEDIA_ID: &str = "stack-media";
pub const STACK_ACTIVE_CLASS: &str = "is-active";
pub const STACK_HOVER_CLASS: &str = "is-hover";

// Hover mirrored through the overlay
pub const HOVER_CLASS: &str = "is-hover";
pub const CASE_CARD_SELECTOR: &str = ".case-card";
pub const CASE_LINK_SELECTOR: &str = "a.case-card__link";
pub const TILT_SELECTOR: &str = ".case-card__top";
pub const CTA_BUTTON_SELECTOR: &str = ".hero__cta .btn";

// Overlay click routing
pub const CLICKABLE_SELECTOR: &str = "a, button, [data-click-through]";

// One-shot overlays
pub const LOADER_ID: &str = "loader";
pub const LOADER_ON_CLASS: &str = "is-on";
pub const LOADER_LEAVING_CLASS: &str = "is-leaving";
pub const TOUCH_HINT_ID: &str = "touch-hint";
pub const HIDDEN_CLASS: &str = "hidden";

// Config overrides are read from `data-fx-<key>` on the rail viewport.
pub const CONFIG_ATTR_PREFIX: &str = "data-fx-";

#[inline]
pub fn config_attr(key: &str) -> String {
    format!("{CONFIG_ATTR_PREFIX}{key}")
}

#[inline]
pub fn stack_index_selector() -> String {
    format!("[{STACK_INDEX_ATTR}]")
}
