use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn defaults_match_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.override_key, "userThemePreference");
    assert!((config.nav.scroll_offset - 100.0).abs() < f64::EPSILON);
    assert_eq!(config.motion.counter_steps, 50);
    assert_eq!(config.motion.counter_tick_ms, 40);
    assert_eq!(config.contact.recipient, "charles@example.com");
    assert_eq!(config.download.asset_path, "assets/portfolio.pdf");
    assert_eq!(config.observers.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let raw = r#"{
        "contact": { "recipient": "me@example.org" },
        "motion": { "counter_tick_ms": 20 },
        "log_level": "debug"
    }"#;
    let config = PageConfig::from_json(raw).expect("partial config should parse");
    assert_eq!(config.contact.recipient, "me@example.org");
    assert_eq!(config.contact.reset_delay_ms, 100);
    assert_eq!(config.motion.counter_tick_ms, 20);
    assert_eq!(config.motion.counter_steps, 50);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.as_level(), log::Level::Debug);
}

#[test]
fn partial_observer_sections_keep_their_own_defaults() {
    let raw = r#"{"observers": {"stats": {"root_margin": "10px"}, "reveal": {"threshold": 0.2}}}"#;
    let config = PageConfig::from_json(raw).expect("partial observer config should parse");
    assert!((config.observers.stats.threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.observers.stats.root_margin, "10px");
    assert!((config.observers.reveal.threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.observers.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.observers.skills, ObserverConfig::default().skills);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = PageConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_log_level_is_a_parse_error() {
    let err = PageConfig::from_json(r#"{ "log_level": "loud" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_above_one_is_rejected() {
    let raw = r#"{ "observers": { "stats": { "threshold": 1.5 } } }"#;
    let err = PageConfig::from_json(raw).expect_err("should fail");
    assert!(matches!(
        err,
        ConfigError::ThresholdOutOfRange { field: "observers.stats.threshold", .. }
    ));
}

#[test]
fn zero_counter_steps_is_rejected() {
    let err = PageConfig::from_json(r#"{ "motion": { "counter_steps": 0 } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::ZeroCounterSteps));
}

#[test]
fn zero_counter_tick_is_rejected() {
    let err = PageConfig::from_json(r#"{ "motion": { "counter_tick_ms": 0 } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::ZeroCounterTick));
}

#[test]
fn blank_recipient_is_rejected() {
    let err = PageConfig::from_json(r#"{ "contact": { "recipient": "  " } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Empty { field: "contact.recipient" }));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::ThresholdOutOfRange { field: "observers.reveal.threshold", value: -0.5 };
    assert_eq!(err.to_string(), "observers.reveal.threshold must be within 0.0..=1.0, got -0.5");
}
