use super::*;

fn manager() -> ThemeManager {
    ThemeManager::new(&ThemeConfig::default())
}

fn persisted(effects: &[Effect], key: &str) -> Option<String> {
    effects.iter().rev().find_map(|e| match e {
        Effect::Persist { key: k, value } if k == key => Some(value.clone()),
        _ => None,
    })
}

fn body_dark(effects: &[Effect]) -> Option<bool> {
    effects.iter().rev().find_map(|e| match e {
        Effect::SetClass { target: Target::Body, class: "dark-mode", enabled } => Some(*enabled),
        _ => None,
    })
}

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_values_map_to_themes() {
    assert_eq!(Theme::from_stored("dark-mode"), Theme::Dark);
    assert_eq!(Theme::from_stored("light-mode"), Theme::Light);
    assert_eq!(Theme::from_stored("sepia"), Theme::Light);
}

#[test]
fn flipping_twice_is_identity() {
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn icon_offers_the_opposite_theme() {
    assert_eq!(Theme::Dark.icon(), SUN_ICON);
    assert_eq!(Theme::Light.icon(), MOON_ICON);
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn stored_theme_is_applied_without_persisting() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(Some("dark-mode"), false, false, &mut out);
    assert_eq!(themes.theme(), Theme::Dark);
    assert_eq!(body_dark(&out), Some(true));
    assert!(persisted(&out, "theme").is_none());
}

#[test]
fn first_run_adopts_and_persists_system_dark() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(None, false, true, &mut out);
    assert_eq!(themes.theme(), Theme::Dark);
    assert_eq!(body_dark(&out), Some(true));
    assert_eq!(persisted(&out, "theme").as_deref(), Some("dark-mode"));
}

#[test]
fn first_run_adopts_and_persists_system_light() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(None, false, false, &mut out);
    assert_eq!(themes.theme(), Theme::Light);
    assert_eq!(persisted(&out, "theme").as_deref(), Some("light-mode"));
}

#[test]
fn toggle_persists_theme_and_override_marker() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(Some("light-mode"), false, false, &mut out);
    out.clear();

    assert_eq!(themes.toggle(&mut out), Theme::Dark);
    assert_eq!(persisted(&out, "theme").as_deref(), Some("dark-mode"));
    assert_eq!(persisted(&out, "userThemePreference").as_deref(), Some("true"));
    assert!(themes.has_user_override());
}

#[test]
fn second_toggle_does_not_rewrite_override_marker() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.toggle(&mut out);
    out.clear();
    themes.toggle(&mut out);
    assert!(persisted(&out, "userThemePreference").is_none());
    assert_eq!(persisted(&out, "theme").as_deref(), Some("light-mode"));
}

#[test]
fn system_change_applies_without_override() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(Some("light-mode"), false, false, &mut out);
    out.clear();
    assert!(themes.on_system_change(true, &mut out));
    assert_eq!(themes.theme(), Theme::Dark);
    assert_eq!(body_dark(&out), Some(true));
}

#[test]
fn system_change_is_ignored_after_manual_choice() {
    let mut themes = manager();
    let mut out = Vec::new();
    themes.initialize(Some("light-mode"), true, false, &mut out);
    out.clear();
    assert!(!themes.on_system_change(true, &mut out));
    assert_eq!(themes.theme(), Theme::Light);
    assert!(out.is_empty());
}

#[test]
fn custom_storage_keys_are_used() {
    let config = ThemeConfig { storage_key: "site-theme".to_owned(), override_key: "site-manual".to_owned() };
    let mut themes = ThemeManager::new(&config);
    let mut out = Vec::new();
    themes.toggle(&mut out);
    assert_eq!(persisted(&out, "site-theme").as_deref(), Some("dark-mode"));
    assert_eq!(persisted(&out, "site-manual").as_deref(), Some("true"));
}
