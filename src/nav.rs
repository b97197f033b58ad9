//! Active navigation link highlighting.
//!
//! At most one tracked `.menu-link` carries the active class. Activation is
//! always clear-all then set-one, whether it comes from a direct click or from
//! a partial-refresh request whose origin is a tracked link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::controller::UiController;
use crate::host::{Host, PreferenceStore};

impl<H: Host, S: PreferenceStore> UiController<H, S> {
    /// Position of `element` among the tracked menu links.
    pub fn tracked_link_index(&self, element: &H::Element) -> Option<usize> {
        self.elements.menu_links.iter().position(|link| link == element)
    }

    /// Index of the tracked link currently marked active.
    pub fn active_link(&self) -> Option<usize> {
        let active = &self.config.classes.active;
        self.elements.menu_links.iter().position(|link| self.host.has_class(link, active))
    }

    /// Mark `link` active and clear every other tracked link.
    ///
    /// Returns `false`, changing nothing, when `link` is not tracked.
    pub fn activate_link(&mut self, link: &H::Element) -> bool {
        let Some(index) = self.tracked_link_index(link) else {
            return false;
        };
        let active = &self.config.classes.active;
        for other in &self.elements.menu_links {
            self.host.set_class(other, active, false);
        }
        self.host.set_class(link, active, true);
        log::debug!("menu link {index} activated");
        true
    }

    /// Handler for a click on a menu link.
    pub fn on_menu_link_click(&mut self, link: &H::Element) {
        self.activate_link(link);
    }

    /// Handler for the before-request notification.
    ///
    /// `origin` is the element that triggered the request, when the event
    /// carried one.
    pub fn on_before_request(&mut self, origin: Option<&H::Element>) {
        let Some(origin) = origin else {
            return;
        };
        if !self.activate_link(origin) {
            log::debug!("before-request origin is not a tracked menu link");
        }
    }
}
