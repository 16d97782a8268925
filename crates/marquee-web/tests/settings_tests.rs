// Host-side tests for data-attribute config overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod settings {
    include!("../src/settings.rs");
}

use marquee_core::MarqueeConfig;
use settings::*;

#[test]
fn numeric_overrides_apply() {
    let mut cfg = MarqueeConfig::default();
    apply_attribute(&mut cfg, "data-marquee-velocity", "1.25").unwrap();
    apply_attribute(&mut cfg, "data-marquee-range", " 320 ").unwrap();
    apply_attribute(&mut cfg, "data-marquee-preview-threshold", "24px").unwrap();
    assert_eq!(cfg.velocity, 1.25);
    assert_eq!(cfg.distortion_range, 320.0);
    assert_eq!(cfg.preview_threshold, 24.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn wheel_can_be_toggled_or_scaled() {
    let mut cfg = MarqueeConfig::default();
    apply_attribute(&mut cfg, "data-marquee-wheel", "off").unwrap();
    assert!(!cfg.wheel_enabled);
    apply_attribute(&mut cfg, "data-marquee-wheel", "0.8").unwrap();
    assert!(cfg.wheel_enabled);
    assert_eq!(cfg.wheel_factor, 0.8);
}

#[test]
fn bad_values_leave_config_untouched() {
    let mut cfg = MarqueeConfig::default();
    assert!(apply_attribute(&mut cfg, "data-marquee-ease", "fast").is_err());
    assert!(apply_attribute(&mut cfg, "data-marquee-drag", "NaN").is_err());
    assert!(apply_attribute(&mut cfg, "data-marquee-colour", "1").is_err());
    assert_eq!(cfg, MarqueeConfig::default());
}

#[test]
fn every_listed_attribute_is_understood() {
    for name in CONFIG_ATTRIBUTES {
        let mut cfg = MarqueeConfig::default();
        assert!(apply_attribute(&mut cfg, name, "1").is_ok(), "{}", name);
    }
}

#[test]
fn invalid_override_is_dropped_alone() {
    let mut cfg = MarqueeConfig::default();
    apply_validated(&mut cfg, "data-marquee-velocity", "1.25").unwrap();
    // Parses, but an ease above 1 fails validation.
    assert!(apply_validated(&mut cfg, "data-marquee-ease", "5").is_err());
    apply_validated(&mut cfg, "data-marquee-range", "320").unwrap();

    assert_eq!(cfg.velocity, 1.25);
    assert_eq!(cfg.scroll_ease, MarqueeConfig::default().scroll_ease);
    assert_eq!(cfg.distortion_range, 320.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn unparsable_override_reports_attribute() {
    let mut cfg = MarqueeConfig::default();
    let err = apply_validated(&mut cfg, "data-marquee-skew", "wide").unwrap_err();
    assert!(err.to_string().contains("data-marquee-skew"));
    assert_eq!(cfg, MarqueeConfig::default());
}
