//! Effect configuration.
//!
//! Defaults come from [`crate::constants`]. The page may override individual
//! values through `data-fx-*` attributes; each override is parsed and checked
//! on its own so one bad attribute does not discard the rest.

use crate::constants::{
    LOADER_FALLBACK_MS, MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS, TOUCH_HINT_HIDE_MS,
    TOUCH_HINT_SHOW_MS,
};
use crate::gesture::GestureConfig;
use crate::proximity::ProximityConfig;
use crate::reveal::RevealConfig;
use crate::stack::StackConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownKey(String),
    #[error("option `{key}`: cannot parse `{value}` as a number")]
    NotANumber { key: String, value: String },
    #[error("option `{key}` must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        expected: &'static str,
        value: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxConfig {
    pub proximity: ProximityConfig,
    pub reveal: RevealConfig,
    pub stack: StackConfig,
    pub gesture: GestureConfig,
    pub breakpoint: f64,
    pub resize_debounce_ms: i32,
    pub hint_show_ms: i32,
    pub hint_hide_ms: i32,
    pub loader_fallback_ms: i32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            proximity: ProximityConfig::default(),
            reveal: RevealConfig::default(),
            stack: StackConfig::default(),
            gesture: GestureConfig::default(),
            breakpoint: MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            hint_show_ms: TOUCH_HINT_SHOW_MS,
            hint_hide_ms: TOUCH_HINT_HIDE_MS,
            loader_fallback_ms: LOADER_FALLBACK_MS,
        }
    }
}

/// Option names accepted by [`FxConfig::apply_override`], without the
/// `data-fx-` prefix.
pub const OVERRIDE_KEYS: &[&str] = &[
    "min-scale",
    "max-scale",
    "root-margin",
    "reveal-bias",
    "stack-early-offset",
    "stack-speed",
    "stack-row-height",
    "stack-gap",
    "stack-bottom-pad",
    "stack-start-offset",
    "breakpoint",
    "resize-debounce",
    "hint-show",
    "hint-hide",
    "loader-fallback",
];

impl FxConfig {
    /// Applies one override; on error `self` is left unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if !OVERRIDE_KEYS.contains(&key) {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        let v: f64 = value
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ConfigError::NotANumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        let mut next = *self;
        match key {
            "min-scale" => next.proximity.min_scale = v,
            "max-scale" => next.proximity.max_scale = v,
            "root-margin" => next.proximity.root_margin = v,
            "reveal-bias" => next.reveal.bias = v,
            "stack-early-offset" => next.stack.early_offset = v,
            "stack-speed" => next.stack.speed = v,
            "stack-row-height" => next.stack.row_height = v,
            "stack-gap" => next.stack.gap = v,
            "stack-bottom-pad" => next.stack.bottom_pad = v,
            "stack-start-offset" => next.stack.start_offset = v,
            "breakpoint" => next.breakpoint = v,
            "resize-debounce" => next.resize_debounce_ms = v as i32,
            "hint-show" => next.hint_show_ms = v as i32,
            "hint-hide" => next.hint_hide_ms = v as i32,
            "loader-fallback" => next.loader_fallback_ms = v as i32,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.proximity;
        if !(p.min_scale > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "min-scale",
                expected: "positive",
                value: p.min_scale,
            });
        }
        if p.max_scale < p.min_scale {
            return Err(ConfigError::OutOfRange {
                key: "max-scale",
                expected: "at least min-scale",
                value: p.max_scale,
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.bias) {
            return Err(ConfigError::OutOfRange {
                key: "reveal-bias",
                expected: "within [0, 1]",
                value: self.reveal.bias,
            });
        }
        if !(self.stack.speed > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "stack-speed",
                expected: "positive",
                value: self.stack.speed,
            });
        }
        let non_negative = [
            ("root-margin", p.root_margin),
            ("stack-row-height", self.stack.row_height),
            ("stack-gap", self.stack.gap),
            ("stack-bottom-pad", self.stack.bottom_pad),
            ("breakpoint", self.breakpoint),
            ("resize-debounce", self.resize_debounce_ms as f64),
            ("hint-show", self.hint_show_ms as f64),
            ("hint-hide", self.hint_hide_ms as f64),
            ("loader-fallback", self.loader_fallback_ms as f64),
        ];
        for (key, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    key,
                    expected: "non-negative",
                    value,
                });
            }
        }
        Ok(())
    }

    /// Applies every `(key, value)` pair, collecting the ones that failed.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = Vec::new();
        for (k, v) in pairs {
            if let Err(e) = self.apply_override(k, v) {
                errors.push(e);
            }
        }
        (self, errors)
    }
}
