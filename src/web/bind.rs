//! DOM event wiring and the WASM entry point.
//!
//! Listeners are registered once and live for the page lifetime. Each one
//! borrows the shared controller for the duration of a single handler; the UI
//! thread serializes them, so a failed borrow only means re-entrant dispatch
//! and the event is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, Element, Event, EventTarget};

use super::{BindError, BrowserHost, BrowserStorage};
use crate::config::UiConfig;
use crate::controller::UiController;
use crate::host::Host;

/// `<body>` attribute holding an optional JSON [`UiConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-ui-config";

pub type BrowserController = UiController<BrowserHost, BrowserStorage>;
pub type SharedController = Rc<RefCell<BrowserController>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {err}");
    }

    match mount() {
        Ok(controller) => {
            let c = controller.borrow();
            log::info!(
                "ui controller mounted: theme={} sidebar_collapsed={}",
                c.theme().as_str(),
                c.is_sidebar_collapsed()
            );
        }
        Err(err) => log::error!("ui controller not mounted: {err}"),
    }
}

/// Build the controller for the current page and attach its listeners.
///
/// # Errors
///
/// Returns [`BindError`] when there is no window/document or a listener
/// cannot be registered.
pub fn mount() -> Result<SharedController, BindError> {
    let host = BrowserHost::new()?;
    let store = BrowserStorage::local(host.window());
    let config = page_config(&host);
    let controller = Rc::new(RefCell::new(UiController::init(host, store, config)));
    bind(&controller)?;
    Ok(controller)
}

fn page_config(host: &BrowserHost) -> UiConfig {
    let Some(raw) = host.document().body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE)) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
            UiConfig::default()
        }
    }
}

/// Attach click and before-request listeners for every located control.
///
/// # Errors
///
/// Returns [`BindError::Listener`] for the first registration the browser
/// rejects.
pub fn bind(controller: &SharedController) -> Result<(), BindError> {
    let (elements, before_request_event, body) = {
        let c = controller.borrow();
        (c.elements().clone(), c.config().before_request_event.clone(), c.host().body())
    };

    if let Some(toggle) = elements.theme_toggle.as_ref() {
        let shared = Rc::clone(controller);
        listen(toggle, "click", move |_| {
            dispatch(&shared, |c| {
                c.toggle_theme();
            });
        })?;
    }

    for link in &elements.menu_links {
        let shared = Rc::clone(controller);
        let target = link.clone();
        listen(link, "click", move |_| {
            dispatch(&shared, |c| c.on_menu_link_click(&target));
        })?;
    }

    if let Some(body) = body.as_ref() {
        let shared = Rc::clone(controller);
        listen(body, &before_request_event, move |event| {
            let origin = request_origin(&event);
            dispatch(&shared, |c| c.on_before_request(origin.as_ref()));
        })?;
    }

    for toggle in &elements.sidebar_toggles {
        let shared = Rc::clone(controller);
        listen(toggle, "click", move |_| {
            dispatch(&shared, |c| {
                c.toggle_sidebar();
            });
        })?;
    }

    if let (Some(form), Some(_)) = (elements.search_form.as_ref(), elements.sidebar.as_ref()) {
        let shared = Rc::clone(controller);
        listen(form, "click", move |_| {
            dispatch(&shared, BrowserController::on_search_form_click);
        })?;
    }

    Ok(())
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| BindError::Listener { event: event.to_owned(), detail: format!("{err:?}") })?;
    closure.forget();
    Ok(())
}

fn dispatch(controller: &SharedController, handler: impl FnOnce(&mut BrowserController)) {
    match controller.try_borrow_mut() {
        Ok(mut c) => handler(&mut c),
        Err(_) => log::warn!("ui controller busy; event dropped"),
    }
}

/// Element that triggered a partial refresh, from `event.detail.elt`.
fn request_origin(event: &Event) -> Option<Element> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let Ok(elt) = js_sys::Reflect::get(&detail, &JsValue::from_str("elt")) else {
        return None;
    };
    match elt.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(_) => None,
    }
}
