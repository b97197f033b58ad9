use super::*;
use crate::config::UiConfig;
use crate::fake::{DashboardPage, FakeHost, MemoryStore};

fn setup(host: FakeHost, collapsed: bool) -> (UiController<FakeHost, MemoryStore>, DashboardPage) {
    let page = host.dashboard(2, collapsed);
    (UiController::init(host, MemoryStore::new(), UiConfig::default()), page)
}

// =============================================================
// toggle_sidebar
// =============================================================

#[test]
fn toggle_parity_from_expanded() {
    let (mut ctrl, _page) = setup(FakeHost::new(), false);
    for n in 1..=5 {
        ctrl.toggle_sidebar();
        assert_eq!(ctrl.is_sidebar_collapsed(), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn toggle_parity_from_collapsed() {
    let (mut ctrl, _page) = setup(FakeHost::new(), true);
    assert!(!ctrl.toggle_sidebar());
    assert!(ctrl.toggle_sidebar());
    assert!(ctrl.is_sidebar_collapsed());
}

#[test]
fn toggle_leaves_theme_affordance_unchanged() {
    let (mut ctrl, page) = setup(FakeHost::new().with_dark_scheme(true), false);
    let before = ctrl.host().text(page.theme_icon);
    ctrl.toggle_sidebar();
    assert_eq!(ctrl.host().text(page.theme_icon), before);
    assert_eq!(ctrl.theme(), crate::theme::Theme::Dark);
}

#[test]
fn toggle_without_sidebar_is_noop() {
    let host = FakeHost::new();
    let _toggle = host.append(host.body_id(), "button", "sidebar-toggle");
    let mut ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());
    assert!(!ctrl.toggle_sidebar());
    assert!(!ctrl.is_sidebar_collapsed());
}

// =============================================================
// on_search_form_click
// =============================================================

#[test]
fn search_click_expands_collapsed_sidebar_and_focuses_input() {
    let (mut ctrl, page) = setup(FakeHost::new(), true);
    ctrl.on_search_form_click();
    assert!(!ctrl.is_sidebar_collapsed());
    assert_eq!(ctrl.host().focused(), Some(page.search_input));
}

#[test]
fn search_click_on_expanded_sidebar_changes_nothing() {
    let (mut ctrl, _page) = setup(FakeHost::new(), false);
    ctrl.on_search_form_click();
    assert!(!ctrl.is_sidebar_collapsed());
    assert_eq!(ctrl.host().focused(), None);
}

#[test]
fn search_click_without_input_still_expands() {
    let host = FakeHost::new();
    let sidebar = host.append(host.body_id(), "aside", "sidebar collapsed");
    let _form = host.append(sidebar, "form", "search-form");
    let mut ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());
    ctrl.on_search_form_click();
    assert!(!ctrl.is_sidebar_collapsed());
    assert_eq!(ctrl.host().focused(), None);
}

#[test]
fn search_click_without_form_is_noop() {
    let host = FakeHost::new();
    let _sidebar = host.append(host.body_id(), "aside", "sidebar collapsed");
    let mut ctrl = UiController::init(host, MemoryStore::new(), UiConfig::default());
    ctrl.on_search_form_click();
    assert!(ctrl.is_sidebar_collapsed());
}

// =============================================================
// expand_for_viewport
// =============================================================

#[test]
fn wide_viewport_expands_collapsed_markup() {
    let (ctrl, _page) = setup(FakeHost::new().with_viewport_width(1024.0), true);
    assert!(!ctrl.is_sidebar_collapsed());
}

#[test]
fn breakpoint_itself_keeps_markup_default() {
    let (ctrl, _page) = setup(FakeHost::new().with_viewport_width(768.0), true);
    assert!(ctrl.is_sidebar_collapsed());
}

#[test]
fn narrow_viewport_keeps_markup_default() {
    let (ctrl, _page) = setup(FakeHost::new().with_viewport_width(375.0), true);
    assert!(ctrl.is_sidebar_collapsed());
    let (ctrl, _page) = setup(FakeHost::new().with_viewport_width(375.0), false);
    assert!(!ctrl.is_sidebar_collapsed());
}

#[test]
fn unknown_viewport_keeps_markup_default() {
    let (ctrl, _page) = setup(FakeHost::new(), true);
    assert!(ctrl.is_sidebar_collapsed());
}

#[test]
fn custom_breakpoint_is_honored() {
    let host = FakeHost::new().with_viewport_width(1024.0);
    let _page = host.dashboard(0, true);
    let config = UiConfig { expand_breakpoint_px: 1280.0, ..UiConfig::default() };
    let ctrl = UiController::init(host, MemoryStore::new(), config);
    assert!(ctrl.is_sidebar_collapsed());
}
