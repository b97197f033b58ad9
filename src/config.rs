//! Selector, class, and storage configuration for the behavior controller.
//!
//! DESIGN
//! ======
//! Defaults describe the dashboard's markup contract. A page can override any
//! subset by embedding JSON in `<body data-ui-config="...">`; omitted fields
//! keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_EXPAND_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_BEFORE_REQUEST_EVENT: &str = "htmx:beforeRequest";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// CSS selectors for the elements the controller looks up at init.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub sidebar_toggle: String,
    pub sidebar: String,
    pub search_form: String,
    pub search_input: String,
    pub theme_toggle: String,
    pub theme_icon: String,
    pub theme_text: String,
    pub menu_link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sidebar_toggle: ".sidebar-toggle".to_owned(),
            sidebar: ".sidebar".to_owned(),
            search_form: ".search-form".to_owned(),
            search_input: "input".to_owned(),
            theme_toggle: ".theme-toggle".to_owned(),
            theme_icon: ".theme-icon".to_owned(),
            theme_text: ".theme-text".to_owned(),
            menu_link: ".menu-link".to_owned(),
        }
    }
}

/// Class names the controller writes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// Dark indicator on `<body>`.
    pub body_dark: String,
    /// Dark indicator on `<html>`.
    pub root_dark: String,
    pub collapsed: String,
    pub active: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            body_dark: "dark-theme".to_owned(),
            root_dark: "dark".to_owned(),
            collapsed: "collapsed".to_owned(),
            active: "active".to_owned(),
        }
    }
}

/// Icon glyph and label text shown on the theme control.
///
/// Each pair names the action on offer, so `to_light_*` is shown while the
/// dark theme is active.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Affordances {
    pub to_light_icon: String,
    pub to_light_label: String,
    pub to_dark_icon: String,
    pub to_dark_label: String,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            to_light_icon: "light_mode".to_owned(),
            to_light_label: "Light Mode".to_owned(),
            to_dark_icon: "dark_mode".to_owned(),
            to_dark_label: "Dark Mode".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub affordances: Affordances,
    pub storage_key: String,
    /// Viewports strictly wider than this start with the sidebar expanded.
    pub expand_breakpoint_px: f64,
    pub dark_media_query: String,
    /// Event dispatched on `<body>` before a partial page refresh.
    pub before_request_event: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            affordances: Affordances::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            expand_breakpoint_px: DEFAULT_EXPAND_BREAKPOINT_PX,
            dark_media_query: DEFAULT_DARK_MEDIA_QUERY.to_owned(),
            before_request_event: DEFAULT_BEFORE_REQUEST_EVENT.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make lookups or class writes meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.selectors;
        let c = &self.classes;
        let required = [
            ("selectors.sidebar_toggle", &s.sidebar_toggle),
            ("selectors.sidebar", &s.sidebar),
            ("selectors.search_form", &s.search_form),
            ("selectors.search_input", &s.search_input),
            ("selectors.theme_toggle", &s.theme_toggle),
            ("selectors.theme_icon", &s.theme_icon),
            ("selectors.theme_text", &s.theme_text),
            ("selectors.menu_link", &s.menu_link),
            ("classes.body_dark", &c.body_dark),
            ("classes.root_dark", &c.root_dark),
            ("classes.collapsed", &c.collapsed),
            ("classes.active", &c.active),
            ("storage_key", &self.storage_key),
            ("dark_media_query", &self.dark_media_query),
            ("before_request_event", &self.before_request_event),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("{name} must not be empty")));
        }
        if !self.expand_breakpoint_px.is_finite() || self.expand_breakpoint_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "expand_breakpoint_px must be a non-negative number, got {}",
                self.expand_breakpoint_px
            )));
        }
        Ok(())
    }
}
