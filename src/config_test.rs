#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = BehaviorConfig::default();
    assert_eq!(config.theme_storage_key, consts::THEME_STORAGE_KEY);
    assert_eq!(config.scroll_top_threshold_px, 300.0);
    assert_eq!(config.transition_delay_ms, 300);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.page_extension, ".html");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn partial_object_fills_rest_from_defaults() {
    let config = BehaviorConfig::from_json(r#"{ "scroll_top_threshold_px": 500, "log_level": "debug" }"#).unwrap();
    assert_eq!(config.scroll_top_threshold_px, 500.0);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.nav_toggle_id, consts::NAV_TOGGLE_ID);
    assert_eq!(config.transition_delay_ms, 300);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(BehaviorConfig::from_json("{}").unwrap(), BehaviorConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = BehaviorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = BehaviorConfig::from_json(r#"{ "transition_delay_ms": "soon" }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid config block"));
}

#[test]
fn out_of_range_values_are_clamped() {
    let config = BehaviorConfig::from_json(r#"{ "reveal_threshold": 4.0, "scroll_top_threshold_px": -10 }"#).unwrap();
    assert_eq!(config.reveal_threshold, 1.0);
    assert_eq!(config.scroll_top_threshold_px, 0.0);
}

#[test]
fn reveal_selector_joins_non_empty_entries() {
    let config = BehaviorConfig {
        reveal_selectors: vec![".card".into(), "  ".into(), ".info-box ".into()],
        ..Default::default()
    };
    assert_eq!(config.reveal_selector().as_deref(), Some(".card, .info-box"));
}

#[test]
fn reveal_selector_none_when_empty() {
    let config = BehaviorConfig { reveal_selectors: Vec::new(), ..Default::default() };
    assert_eq!(config.reveal_selector(), None);
}

#[test]
fn log_level_maps_to_log_crate() {
    assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    assert_eq!(log::Level::from(LogLevel::Trace), log::Level::Trace);
}
