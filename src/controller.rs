//! The UI behavior controller.
//!
//! ARCHITECTURE
//! ============
//! `UiController::init` looks up every element it will ever touch, applies
//! the startup theme and sidebar rule, and returns a struct owning those
//! handles together with the host, the preference store, and the config.
//! Event handlers are plain methods; behavior is split across `theme`,
//! `sidebar`, and `nav`, each adding an `impl` block.
//!
//! The browser binding (`web::bind`) only forwards DOM events to these
//! methods, so every behavior here runs unchanged against `fake::FakeHost`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::UiConfig;
use crate::host::{Host, PreferenceStore};
use crate::theme::Theme;

/// Element handles located once at init.
#[derive(Clone, Debug)]
pub struct Elements<E> {
    pub sidebar_toggles: Vec<E>,
    pub sidebar: Option<E>,
    pub search_form: Option<E>,
    pub search_input: Option<E>,
    pub theme_toggle: Option<E>,
    pub theme_icon: Option<E>,
    pub theme_text: Option<E>,
    pub menu_links: Vec<E>,
}

impl<E> Elements<E> {
    /// Query the page for every element in the markup contract.
    pub fn locate<H>(host: &H, config: &UiConfig) -> Self
    where
        H: Host<Element = E>,
    {
        let s = &config.selectors;
        let search_form = host.query(&s.search_form);
        let search_input = search_form.as_ref().and_then(|form| host.query_within(form, &s.search_input));
        let theme_toggle = host.query(&s.theme_toggle);
        let theme_icon = theme_toggle.as_ref().and_then(|t| host.query_within(t, &s.theme_icon));
        let theme_text = theme_toggle.as_ref().and_then(|t| host.query_within(t, &s.theme_text));
        Self {
            sidebar_toggles: host.query_all(&s.sidebar_toggle),
            sidebar: host.query(&s.sidebar),
            search_form,
            search_input,
            theme_toggle,
            theme_icon,
            theme_text,
            menu_links: host.query_all(&s.menu_link),
        }
    }
}

pub struct UiController<H: Host, S: PreferenceStore> {
    pub(crate) host: H,
    pub(crate) store: S,
    pub(crate) config: UiConfig,
    pub(crate) elements: Elements<H::Element>,
    pub(crate) theme: Theme,
}

impl<H: Host, S: PreferenceStore> UiController<H, S> {
    /// Locate elements and establish the startup theme and sidebar state.
    pub fn init(host: H, store: S, config: UiConfig) -> Self {
        let elements = Elements::locate(&host, &config);
        log::debug!(
            "ui controller init: sidebar_toggles={} menu_links={} sidebar={} search_form={} theme_toggle={}",
            elements.sidebar_toggles.len(),
            elements.menu_links.len(),
            elements.sidebar.is_some(),
            elements.search_form.is_some(),
            elements.theme_toggle.is_some(),
        );

        let saved = store.get(&config.storage_key);
        let system_dark = host.matches_media(&config.dark_media_query);
        let initial = Theme::resolve(saved.as_deref(), system_dark);

        let mut controller = Self { host, store, config, elements, theme: initial };
        controller.apply_theme(initial);
        if let Some(width) = controller.host.viewport_width() {
            controller.expand_for_viewport(width);
        }
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn elements(&self) -> &Elements<H::Element> {
        &self.elements
    }
}
