use gloo::utils::window;
use shared::Route;
use wasm_bindgen::JsValue;

/// Route for the current address bar contents
pub fn current_route() -> Route {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse_or_default(&path, &query)
}

/// Load `route` as a new page
pub fn navigate(route: &Route) {
    let href = route.to_href();
    log::debug!(target: "navigation", "Navigating to {}", href);
    if let Err(e) = window().location().set_href(&href) {
        log::error!(target: "navigation", "Failed to navigate to {}: {:?}", href, e);
    }
}

/// Show `route` in the address bar without reloading
pub fn push_route(route: &Route) {
    let href = route.to_href();
    let pushed = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&href)));

    if let Err(e) = pushed {
        log::warn!(target: "navigation", "Failed to update address bar to {}: {:?}", href, e);
    }
}
