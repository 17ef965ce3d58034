#![allow(clippy::float_cmp)]

use motion::ease::Ease;
use motion::timeline::Position;

use super::*;

#[test]
fn empty_object_yields_stock_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.selectors.hero_cta, ".hero_descriptions .button-big");
    assert_eq!(config.marquees.len(), 2);
    assert_eq!(config.marquees[1].cycle, 60.0);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let raw = r#"{
        "log_level": "debug",
        "selectors": { "button": ".cta" },
        "reveal": { "letter_ease": "power4.out", "letter_position": ">-0.2" }
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.selectors.button, ".cta");
    assert_eq!(config.selectors.button_flair, ".button__flair");
    assert_eq!(config.reveal.letter_ease, Ease::out(4));
    assert_eq!(config.reveal.letter_position, Position::AfterPrevious(-0.2));
    assert_eq!(config.reveal.secondary_duration, 0.7);
}

#[test]
fn variants_resolve_their_own_defaults() {
    let config = SiteConfig::default();
    let big = config.flair(Variant::Big);
    assert_eq!(big.timings.flair_enter, 0.8);
    assert_eq!(big.colors.flair_hover.as_deref(), Some("#000000"));
    let plain = config.flair(Variant::Plain);
    assert_eq!(plain.timings.flair_enter, 0.4);
    assert_eq!(plain.colors.surface_rest, "#ffffff");
}

#[test]
fn button_colors_can_be_replaced() {
    let raw = r##"{ "buttons": { "plain": { "colors": { "surface_rest": "#eeeeee" } } } }"##;
    let config = SiteConfig::from_json(raw).unwrap();
    let plain = config.flair(Variant::Plain);
    assert_eq!(plain.colors.surface_rest, "#eeeeee");
    assert_eq!(plain.colors.surface_hover, "rgba(255, 255, 255, 0.07)");
    assert_eq!(config.flair(Variant::Big).timings.flair_enter, 0.8);
}

#[test]
fn partial_big_override_keeps_big_defaults() {
    let raw = r#"{ "buttons": { "big": {
        "timings": { "leave": 0.5 },
        "colors": { "surface_rest": "tomato" }
    } } }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    let big = config.flair(Variant::Big);
    assert_eq!(big.timings.leave, 0.5);
    assert_eq!(big.timings.flair_enter, 0.8);
    assert_eq!(big.timings.flair_ease, Ease::in_out(3));
    assert_eq!(big.timings.flair_delay_ratio, 0.7);
    assert_eq!(big.colors.surface_rest, "tomato");
    assert_eq!(big.colors.surface_hover, "var(--_colors---background)");
    assert_eq!(big.colors.flair_hover.as_deref(), Some("#000000"));
    assert_eq!(config.flair(Variant::Plain), FlairConfig::plain());
}

#[test]
fn marquee_list_replaces_defaults() {
    let raw = r#"{ "marquees": [ { "name": "partners", "container": ".partners", "cycle": 30 } ] }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.marquees.len(), 1);
    assert_eq!(config.marquees[0].section, ".hero_logos");
    assert_eq!(config.marquees[0].trigger, TriggerSpec::default());
}

#[test]
fn unknown_ease_is_a_parse_error() {
    let err = SiteConfig::from_json(r#"{ "reveal": { "content_ease": "bounce.out" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn non_positive_cycle_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "marquees": [ { "cycle": 0 } ] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn delay_ratio_outside_unit_range_is_rejected() {
    let raw = r#"{ "buttons": { "big": { "timings": { "flair_delay_ratio": 1.5 } } } }"#;
    assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::Invalid(_))));
}

#[test]
fn inline_config_falls_back_on_error() {
    let (config, err) = SiteConfig::from_inline(Some("{ broken"));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_some());

    let (config, err) = SiteConfig::from_inline(Some("   "));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());

    let (config, err) = SiteConfig::from_inline(Some(r#"{ "log_level": "warn" }"#));
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(err.is_none());
}
