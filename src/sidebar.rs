//! Sidebar collapse/expand.
//!
//! Collapsed state lives only in the sidebar's class list and is never
//! persisted; every full load re-derives it from markup and viewport width.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::controller::UiController;
use crate::host::{self, Host, PreferenceStore};

impl<H: Host, S: PreferenceStore> UiController<H, S> {
    /// Whether the sidebar currently carries the collapsed class.
    ///
    /// A page without a sidebar reports `false`.
    pub fn is_sidebar_collapsed(&self) -> bool {
        self.elements
            .sidebar
            .as_ref()
            .is_some_and(|sidebar| self.host.has_class(sidebar, &self.config.classes.collapsed))
    }

    /// Handler for a sidebar toggle control. Returns the new collapsed state.
    pub fn toggle_sidebar(&mut self) -> bool {
        let Some(sidebar) = self.elements.sidebar.as_ref() else {
            return false;
        };
        let collapsed = host::toggle_class(&self.host, sidebar, &self.config.classes.collapsed);
        // Icon content depends only on theme, so this refresh never changes it.
        self.refresh_theme_icon();
        log::debug!("sidebar toggled: collapsed={collapsed}");
        collapsed
    }

    /// Handler for a click anywhere inside the search form.
    ///
    /// Expands a collapsed sidebar and focuses the search input. An already
    /// expanded sidebar is left alone.
    pub fn on_search_form_click(&mut self) {
        if self.elements.search_form.is_none() || !self.is_sidebar_collapsed() {
            return;
        }
        let Some(sidebar) = self.elements.sidebar.as_ref() else {
            return;
        };
        self.host.set_class(sidebar, &self.config.classes.collapsed, false);
        if let Some(input) = self.elements.search_input.as_ref() {
            self.host.focus(input);
        }
        log::debug!("sidebar expanded from search form");
    }

    /// Force the sidebar open when the viewport is wider than the breakpoint.
    pub fn expand_for_viewport(&mut self, width: f64) {
        if width <= self.config.expand_breakpoint_px {
            return;
        }
        if let Some(sidebar) = self.elements.sidebar.as_ref() {
            self.host.set_class(sidebar, &self.config.classes.collapsed, false);
            log::debug!("sidebar expanded for viewport width {width}");
        }
    }
}
