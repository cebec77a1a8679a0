//! The browser location. Outside a browser there is no location to read or
//! change.

use types::LocationParams;
use url::Url;

#[cfg(target_arch = "wasm32")]
pub fn current() -> LocationParams {
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        tracing::warn!("no window; treating the link as empty");
        return LocationParams::default();
    };
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    LocationParams::from_parts(&search, &hash)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current() -> LocationParams {
    LocationParams::default()
}

#[cfg(target_arch = "wasm32")]
pub fn assign(url: &Url) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window to navigate");
        return;
    };
    if let Err(e) = window.location().assign(url.as_str()) {
        tracing::warn!(error = ?e, "navigation was rejected");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn assign(url: &Url) {
    tracing::warn!(scheme = url.scheme(), "navigation is only available in a browser");
}
