//! # dashboard-ui
//!
//! Client-side behavior for the server-rendered dashboard, compiled to
//! WebAssembly. On load it applies the persisted (or system) dark/light
//! theme, opens the sidebar on wide viewports, and then reacts to clicks on
//! the theme control, sidebar toggles, search form, and menu links, plus the
//! htmx `htmx:beforeRequest` notification for partial-page navigation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | `UiController`: element lookup and startup state |
//! | [`theme`] | Theme resolution, application, toggle |
//! | [`sidebar`] | Sidebar collapse/expand and search-form expansion |
//! | [`nav`] | Mutually exclusive active menu link |
//! | [`host`] | `Host` / `PreferenceStore` seams |
//! | [`config`] | Selectors, class names, storage key, breakpoint |
//! | [`fake`] | In-memory host and store |
//! | `web` | `web-sys` adapters and listener wiring (`hydrate` only) |
//!
//! Build with `--features hydrate` for the browser; without it the crate is
//! plain Rust and every behavior runs against [`fake::FakeHost`].

pub mod config;
pub mod controller;
pub mod fake;
pub mod host;
pub mod nav;
pub mod sidebar;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::UiConfig;
pub use controller::UiController;
pub use theme::Theme;
