//! Browser adapters over `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserHost` and `BrowserStorage` implement the controller's seams for a
//! real page. DOM exceptions (bad selectors, storage quota, focus on a
//! detached node) are logged and swallowed; the controller only ever sees
//! "present" or "absent".

pub mod bind;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::host::{Host, PreferenceStore};

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to add {event} listener: {detail}")]
    Listener { event: String, detail: String },
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// Bind to the global `window` and its document.
    ///
    /// # Errors
    ///
    /// Fails outside a browser main thread, where neither exists.
    pub fn new() -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for BrowserHost {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("querySelector({selector}) failed: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("querySelectorAll({selector}) failed: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .flat_map(|node| node.dyn_into::<Element>())
            .collect()
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        match scope.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("querySelector({selector}) failed: {err:?}");
                None
            }
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, present) {
            log::warn!("classList.toggle({class}) failed: {err:?}");
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn focus(&self, element: &Element) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.focus() {
            log::warn!("focus failed: {err:?}");
        }
    }

    fn viewport_width(&self) -> Option<f64> {
        match self.window.inner_width() {
            Ok(width) => width.as_f64(),
            Err(err) => {
                log::warn!("innerWidth unavailable: {err:?}");
                None
            }
        }
    }

    fn matches_media(&self, media_query: &str) -> bool {
        match self.window.match_media(media_query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia({media_query}) failed: {err:?}");
                false
            }
        }
    }
}

/// `localStorage`, when the browser grants it.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    #[must_use]
    pub fn local(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage.getItem({key}) failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage.setItem({key}) failed: {err:?}");
        }
    }
}
