//! Full-page navigation to the login endpoint.

use thiserror::Error;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// The browser refused to start navigating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NavigationError(pub String);

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        Self(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Sends the browser to a URL. Only synchronous failures are reported;
/// a successful call unloads the page.
pub type Navigate = Callback<AttrValue, Result<(), NavigationError>>;

/// Replaces the current document by setting `window.location.href`.
pub fn browser_navigate() -> Navigate {
    Callback::from(|url: AttrValue| {
        let window =
            web_sys::window().ok_or_else(|| NavigationError("no window available".to_string()))?;
        window.location().set_href(&url)?;
        Ok(())
    })
}

/// Attempts navigation once. Failures are logged and swallowed.
pub fn activate(navigate: &Navigate, url: &AttrValue) {
    if let Err(err) = navigate.emit(url.clone()) {
        log::error!("Login Failed: {err}");
    }
}
