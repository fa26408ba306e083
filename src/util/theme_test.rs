use super::*;

// =============================================================
// Theme defaults
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn storage_key_is_darkmode() {
    assert_eq!(STORAGE_KEY, "darkmode");
}

// =============================================================
// Stored-value decoding
// =============================================================

#[test]
fn from_stored_none_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn from_stored_dark_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn from_stored_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn from_stored_garbage_is_light() {
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark ")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("true")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

// =============================================================
// Storage literal round-trip
// =============================================================

#[test]
fn as_str_matches_stored_decoding() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn is_dark_only_for_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
