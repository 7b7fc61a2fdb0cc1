use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

use super::actions::{Dispatch, RbAction};
use super::state::RbState;

/// Reactive wrapper around [`RbState`], provided through context.
#[derive(Clone, Copy)]
pub struct RbStore {
    state: RwSignal<RbState>,
}

impl RbStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RbState::new(current_location())),
        }
    }

    /// Derive a signal from a selector.
    pub fn select<T>(&self, selector: fn(&RbState) -> T) -> Signal<T>
    where
        T: Send + Sync + 'static,
    {
        let state = self.state;
        Signal::derive(move || state.with(selector))
    }

    /// Read the current state (tracked).
    pub fn with<R>(&self, f: impl FnOnce(&RbState) -> R) -> R {
        self.state.with(f)
    }

    /// Keep `location` in sync with back/forward navigation.
    pub fn init_router_integration(&self) {
        let state = self.state;
        // The listener lives as long as the app
        let _listener = window_event_listener(leptos::ev::popstate, move |_| {
            let location = current_location();
            log::debug!("popstate: {}", location);
            state.update(|s| s.location = location);
        });
    }
}

impl Default for RbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for RbStore {
    fn dispatch(&self, action: RbAction) {
        log::debug!("dispatch: {:?}", action);
        if let RbAction::Push(url) = &action {
            push_history(url);
        }
        self.state.update(|state| state.apply(&action));
    }
}

pub fn use_rb_store() -> RbStore {
    use_context::<RbStore>().expect("RbStore not provided in context")
}

fn current_location() -> String {
    let Some(location) = window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn push_history(url: &str) {
    log::info!("navigate: {}", url);
    let Some(w) = window() else {
        return;
    };
    match w.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("history.pushState failed for {}: {:?}", url, e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}
