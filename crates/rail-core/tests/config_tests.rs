// Configuration defaults and data-attribute overrides.

use rail_core::*;

#[test]
fn defaults_are_valid() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.proximity.min_scale, MIN_SCALE);
    assert_eq!(cfg.proximity.max_scale, MAX_SCALE);
    assert_eq!(cfg.reveal.bias, REVEAL_BIAS);
    assert_eq!(cfg.stack.speed, STACK_SPEED);
    assert_eq!(cfg.breakpoint, MOBILE_BREAKPOINT_PX);
}

#[test]
fn every_advertised_key_is_accepted() {
    for key in OVERRIDE_KEYS {
        let mut cfg = FxConfig::default();
        // min-scale 1.0 stays below max-scale; everything else accepts 1
        assert_eq!(cfg.apply_override(key, "1"), Ok(()), "{key}");
    }
}

#[test]
fn override_applies() {
    let mut cfg = FxConfig::default();
    cfg.apply_override("stack-speed", " 1.5 ").unwrap();
    assert_eq!(cfg.stack.speed, 1.5);
    cfg.apply_override("resize-debounce", "100").unwrap();
    assert_eq!(cfg.resize_debounce_ms, 100);
}

#[test]
fn bad_overrides_leave_config_unchanged() {
    let base = FxConfig::default();
    let mut cfg = base;

    assert_eq!(
        cfg.apply_override("bogus", "1"),
        Err(ConfigError::UnknownKey("bogus".into()))
    );
    assert!(matches!(
        cfg.apply_override("stack-speed", "fast"),
        Err(ConfigError::NotANumber { .. })
    ));
    assert!(matches!(
        cfg.apply_override("stack-speed", "NaN"),
        Err(ConfigError::NotANumber { .. })
    ));
    assert!(matches!(
        cfg.apply_override("max-scale", "0.5"),
        Err(ConfigError::OutOfRange { key: "max-scale", .. })
    ));
    assert!(matches!(
        cfg.apply_override("stack-speed", "0"),
        Err(ConfigError::OutOfRange { key: "stack-speed", .. })
    ));
    assert!(matches!(
        cfg.apply_override("resize-debounce", "-5"),
        Err(ConfigError::OutOfRange { key: "resize-debounce", .. })
    ));
    assert_eq!(cfg, base);
}

#[test]
fn overrides_collect_errors_and_keep_good_values() {
    let (cfg, errors) = FxConfig::default().with_overrides([
        ("min-scale", "0.8"),
        ("bogus", "1"),
        ("reveal-bias", "2"),
    ]);
    assert_eq!(cfg.proximity.min_scale, 0.8);
    assert_eq!(cfg.reveal.bias, REVEAL_BIAS);
    assert_eq!(errors.len(), 2);
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::UnknownKey("bogus".into()).to_string(),
        "unknown option `bogus`"
    );
    let e = FxConfig::default()
        .apply_override("stack-gap", "wide")
        .unwrap_err();
    assert_eq!(e.to_string(), "option `stack-gap`: cannot parse `wide` as a number");
}
