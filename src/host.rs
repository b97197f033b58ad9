//! Seams between the controller and the page it drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web-sys` directly. Everything it needs from
//! the page (element lookup, class lists, text, focus, viewport size, color
//! scheme preference) and from durable storage goes through these traits, so
//! the browser adapter in `web` and the in-memory adapter in `fake` are
//! interchangeable.

/// Read/write access to the host document and its environment.
///
/// Every lookup may come back empty; callers treat absence as "control not on
/// this page" and skip the dependent action.
pub trait Host {
    /// Handle to a page element. Equality is node identity.
    type Element: Clone + PartialEq;

    /// First element in the document matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements in the document matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Element>;

    /// The top-level document element (`<html>`).
    fn root(&self) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);

    fn set_text(&self, element: &Self::Element, text: &str);

    fn focus(&self, element: &Self::Element);

    /// Viewport width in CSS pixels, when the host can report one.
    fn viewport_width(&self) -> Option<f64>;

    /// Whether the environment matches `media_query` (e.g. a dark color scheme).
    fn matches_media(&self, media_query: &str) -> bool;
}

/// Durable key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Toggle a class and report the new state.
pub(crate) fn toggle_class<H: Host>(host: &H, element: &H::Element, class: &str) -> bool {
    let next = !host.has_class(element, class);
    host.set_class(element, class, next);
    next
}
