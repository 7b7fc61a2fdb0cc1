use leptos::prelude::*;

use super::paths::Route;
use crate::shared::i18n::use_translator;
use crate::store::store::use_rb_store;
use crate::store::{selectors, Section};

/// Page picked from the current location
#[component]
pub fn AppRoutes() -> impl IntoView {
    let store = use_rb_store();
    let route = Memo::new(move |_| store.with(|state| Route::parse(&state.location)));

    view! {
        {move || {
            let route = route.get();
            let section = match route {
                Route::Calendar => Some(Section::Calendar),
                Route::Rooms => Some(Section::RoomList),
                Route::Blockings => Some(Section::Blockings),
                Route::Admin | Route::NotFound => None,
            };
            view! { <RoutePage route=route section=section /> }
        }}
    }
}

/// Placeholder for a page, showing the filters it would apply
#[component]
fn RoutePage(route: Route, section: Option<Section>) -> impl IntoView {
    let store = use_rb_store();
    let tr = use_translator();

    let filters = move || {
        section.map(|section| {
            let filters = store.with(|state| selectors::get_filters(state, section));
            let text = serde_json::to_string_pretty(&filters).unwrap_or_default();
            view! {
                <div class="route-page__filters">
                    <h3>{move || tr.with(|tr| tr.string("Active filters"))}</h3>
                    <pre>{text}</pre>
                </div>
            }
        })
    };

    view! {
        <div class="route-page" data-section=section.map(|s| s.as_str())>
            <h1>{move || tr.with(|tr| tr.string(route.title()))}</h1>
            {filters}
        </div>
    }
}
