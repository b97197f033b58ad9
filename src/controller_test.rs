use super::*;
use crate::fake::{FakeHost, MemoryStore};

// =============================================================
// Elements::locate
// =============================================================

#[test]
fn locate_finds_dashboard_markup() {
    let host = FakeHost::new();
    let page = host.dashboard(4, false);
    let elements = Elements::locate(&host, &UiConfig::default());
    assert_eq!(elements.sidebar, Some(page.sidebar));
    assert_eq!(elements.sidebar_toggles, page.sidebar_toggles);
    assert_eq!(elements.search_form, Some(page.search_form));
    assert_eq!(elements.search_input, Some(page.search_input));
    assert_eq!(elements.theme_toggle, Some(page.theme_toggle));
    assert_eq!(elements.theme_icon, Some(page.theme_icon));
    assert_eq!(elements.theme_text, Some(page.theme_text));
    assert_eq!(elements.menu_links, page.menu_links);
}

#[test]
fn locate_on_empty_page_finds_nothing() {
    let host = FakeHost::new();
    let elements = Elements::locate(&host, &UiConfig::default());
    assert!(elements.sidebar_toggles.is_empty());
    assert!(elements.menu_links.is_empty());
    assert!(elements.sidebar.is_none());
    assert!(elements.search_input.is_none());
    assert!(elements.theme_icon.is_none());
}

#[test]
fn locate_uses_configured_selectors() {
    let host = FakeHost::new();
    let nav = host.append(host.body_id(), "nav", "");
    host.set_id(nav, "side");
    let json = r##"{"selectors":{"sidebar":"#side","menu_link":".nav-item"}}"##;
    let config = UiConfig::from_json(json).unwrap();
    let link = host.append(nav, "a", "nav-item");
    let elements = Elements::locate(&host, &config);
    assert_eq!(elements.sidebar, Some(nav));
    assert_eq!(elements.menu_links, vec![link]);
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn system_dark_without_saved_theme_starts_dark() {
    let host = FakeHost::new().with_dark_scheme(true);
    let page = host.dashboard(3, false);
    let ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());
    let host = ctrl.host();
    assert!(host.has_class(&host.body_id(), "dark-theme"));
    assert!(host.has_class(&host.root_id(), "dark"));
    assert_eq!(host.text(page.theme_icon), "light_mode");
    assert_eq!(host.text(page.theme_text), "Light Mode");
}

#[test]
fn wide_viewport_expands_collapsed_sidebar_at_startup() {
    let host = FakeHost::new().with_viewport_width(1024.0);
    let page = host.dashboard(3, true);
    let ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());
    assert!(!ctrl.host().has_class(&page.sidebar, "collapsed"));
}

#[test]
fn before_request_from_untracked_origin_leaves_links_alone() {
    let host = FakeHost::new();
    let page = host.dashboard(3, false);
    let outside = host.append(host.body_id(), "div", "content");
    host.set_class(&page.menu_links[1], "active", true);
    let mut ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());

    ctrl.on_before_request(Some(&outside));

    let states: Vec<bool> = page.menu_links.iter().map(|l| ctrl.host().has_class(l, "active")).collect();
    assert_eq!(states, vec![false, true, false]);
}

#[test]
fn saved_light_beats_dark_system_preference() {
    let host = FakeHost::new().with_dark_scheme(true);
    let page = host.dashboard(1, false);
    let store = MemoryStore::new().with_entry("theme", "light");
    let ctrl = UiController::init(host, store, UiConfig::default());
    assert_eq!(ctrl.theme(), Theme::Light);
    assert_eq!(ctrl.host().text(page.theme_icon), "dark_mode");
}

#[test]
fn custom_storage_key_and_affordances() {
    let json = r#"{"storage_key":"dash-theme","affordances":{"to_dark_icon":"moon","to_light_icon":"sun"}}"#;
    let config = UiConfig::from_json(json).unwrap();
    let host = FakeHost::new();
    let page = host.dashboard(1, false);
    let store = MemoryStore::new().with_entry("dash-theme", "dark").with_entry("theme", "light");
    let mut ctrl = UiController::init(host, store, config);
    assert_eq!(ctrl.theme(), Theme::Dark);
    assert_eq!(ctrl.host().text(page.theme_icon), "sun");

    ctrl.toggle_theme();
    assert_eq!(ctrl.host().text(page.theme_icon), "moon");
    assert_eq!(ctrl.store().get("dash-theme").as_deref(), Some("light"));
    assert_eq!(ctrl.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn full_session_on_empty_page_never_fails() {
    let mut ctrl = UiController::init(FakeHost::new().with_viewport_width(1920.0), MemoryStore::new(), UiConfig::default());
    ctrl.toggle_sidebar();
    ctrl.on_search_form_click();
    ctrl.on_before_request(None);
    ctrl.toggle_theme();
    assert_eq!(ctrl.theme(), Theme::Dark);
    assert_eq!(ctrl.active_link(), None);
    assert!(!ctrl.is_sidebar_collapsed());
}
