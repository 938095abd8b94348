#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_without_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert!(Theme::Dark.is_dark());
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn apply_is_callable_without_browser() {
    apply(Theme::Dark);
}
