use approx::assert_relative_eq;

use crate::config::{ComparatorConfig, LabelStyle};
use crate::error::ComparatorError;

#[test]
fn test_defaults_are_valid() {
    let config = ComparatorConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.default_body, "earth");
    assert_relative_eq!(config.horizontal_gap, 100.0);
    assert_relative_eq!(config.drag_speed, 2.0);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = ComparatorConfig::from_json(r#"{"horizontal_gap": 40, "label": {"max_font": 20}}"#).unwrap();
    assert_relative_eq!(config.horizontal_gap, 40.0);
    assert_relative_eq!(config.label.max_font, 20.0);
    assert_relative_eq!(config.label.min_font, 12.0);
    assert_eq!(config.default_body, "earth");
    assert!(config.catalog_path.is_none());
}

#[test]
fn test_invalid_values_are_rejected() {
    for json in [
        r#"{"horizontal_gap": 0}"#,
        r#"{"drag_speed": -1}"#,
        r#"{"scroll_duration": -0.5}"#,
        r#"{"default_body": " "}"#,
        r#"{"label": {"min_font": 18, "max_font": 16}}"#,
        r#"{"label": {"radius_divisor": 0}}"#,
        r#"{"label": {"min_font": 1, "max_font": 1}}"#,
        r#"{"label": {"min_font": 2, "max_font": 16}}"#,
    ] {
        assert!(matches!(ComparatorConfig::from_json(json), Err(ComparatorError::Config(_))), "{json}");
    }
    assert!(matches!(ComparatorConfig::from_json("{"), Err(ComparatorError::Json(_))));
}

#[test]
fn test_font_size_is_clamped_and_monotonic() {
    let style = LabelStyle::default();
    assert_relative_eq!(style.font_size(0.0), 12.0);
    assert_relative_eq!(style.font_size(2.24), 12.0);
    assert_relative_eq!(style.font_size(70.0), 14.0);
    assert_relative_eq!(style.font_size(245.0), 16.0);

    let mut previous = 0.0;
    for step in 0..200 {
        let size = style.font_size(step as f32);
        assert!(size >= previous);
        previous = size;
    }
}
