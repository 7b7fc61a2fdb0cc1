//! Top bar: application title and the sidebar trigger.

use leptos::prelude::*;

use crate::layout::sidebar::SidebarTrigger;
use crate::shared::i18n::use_translator;
use crate::store::store::use_rb_store;
use crate::store::{selectors, Dispatch, RbAction};

#[component]
pub fn TopHeader() -> impl IntoView {
    let store = use_rb_store();
    let tr = use_translator();

    let sidebar_visible = store.select(selectors::is_sidebar_visible);
    let open_sidebar = Callback::new(move |_| store.dispatch(RbAction::SetSidebarVisible(true)));
    let user_name = move || store.with(|state| state.user.full_name.clone());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || tr.with(|tr| tr.string("Room Booking"))}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_name}</span>
                <span title=move || tr.with(|tr| tr.string("Open menu"))>
                    <SidebarTrigger active=sidebar_visible on_click=open_sidebar />
                </span>
            </div>
        </div>
    }
}
