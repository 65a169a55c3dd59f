//! Thin wrappers over `window.location` and `window.history`.

use wasm_bindgen::JsValue;

/// Full page navigation (not a router transition).
pub fn navigate_to(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(href) {
        log::error!("navigation to {} failed: {:?}", href, err);
    }
}

/// Drops `?...` from the address bar without reloading the page.
pub fn clear_query_string() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pathname = match window.location().pathname() {
        Ok(pathname) => pathname,
        Err(err) => {
            log::warn!("cannot read location.pathname: {:?}", err);
            return;
        }
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(err) => {
            log::warn!("history API unavailable: {:?}", err);
            return;
        }
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&pathname)) {
        log::warn!("history.replaceState failed: {:?}", err);
    }
}

/// Current query string without the leading `?`.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| search.trim_start_matches('?').to_string())
        .unwrap_or_default()
}
