//! Dark/light theme resolution, application, and toggle.
//!
//! The effective theme is decided once at init: a persisted `"dark"` wins, a
//! persisted anything-else means light, and with nothing persisted the
//! environment's color scheme preference decides. Applying a theme keeps the
//! body and root dark classes in lockstep and rewrites the theme control to
//! offer the opposite mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::controller::UiController;
use crate::host::{Host, PreferenceStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Pick the startup theme from the persisted value and system preference.
    ///
    /// An empty persisted string counts as "never written".
    #[must_use]
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved.filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_dark(raw == Self::Dark.as_str()),
            None => Self::from_dark(system_prefers_dark),
        }
    }
}

impl<H: Host, S: PreferenceStore> UiController<H, S> {
    /// Theme currently applied to the page.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply `theme` to the root elements and theme control without persisting it.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let dark = theme.is_dark();
        let classes = &self.config.classes;
        if let Some(body) = self.host.body() {
            self.host.set_class(&body, &classes.body_dark, dark);
        }
        if let Some(root) = self.host.root() {
            self.host.set_class(&root, &classes.root_dark, dark);
        }
        self.refresh_theme_icon();
        log::debug!("theme applied: {}", theme.as_str());
    }

    /// Apply `theme` and persist it.
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply_theme(theme);
        self.store.set(&self.config.storage_key, theme.as_str());
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    /// Rewrite the theme icon and label to offer the opposite mode.
    ///
    /// Nothing happens without an icon element; the label is optional.
    pub fn refresh_theme_icon(&self) {
        let Some(icon) = self.elements.theme_icon.as_ref() else {
            return;
        };
        let a = &self.config.affordances;
        let (glyph, label) = if self.theme.is_dark() {
            (&a.to_light_icon, &a.to_light_label)
        } else {
            (&a.to_dark_icon, &a.to_dark_label)
        };
        self.host.set_text(icon, glyph);
        if let Some(text) = self.elements.theme_text.as_ref() {
            self.host.set_text(text, label);
        }
    }
}
