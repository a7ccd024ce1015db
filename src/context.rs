//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreatePoint,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreatePoint => "/create-point",
        }
    }

    /// Unknown paths land on the home page
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/create-point" => Route::CreatePoint,
            _ => Route::Home,
        }
    }

    /// Route for the current browser location
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|win| win.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Home)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, route: Route) {
        if let Some(history) = web_sys::window().and_then(|win| win.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("Could not push history entry for {:?}: {:?}", route, e);
            }
        }
        self.set_route.set(route);
    }

    /// Sync with the browser location after back/forward navigation
    pub fn sync_with_location(&self) {
        self.set_route.set(Route::current());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Home, Route::CreatePoint] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/create-point/"), Route::CreatePoint);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/nowhere"), Route::Home);
    }
}
