pub mod components;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use crate::store::store::use_rb_store;
use crate::store::{Dispatch, RbAction};
use sidebar::ConnectedSidebarMenu;
use top_header::TopHeader;

/// Application shell
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader                     [trigger] |
/// +------------------------------------------+
/// |  page content               |  Sidebar   |
/// |                             | (overlay)  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let store = use_rb_store();
    let hide_sidebar = Callback::new(move |_| store.dispatch(RbAction::SetSidebarVisible(false)));

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">{children()}</div>
            <ConnectedSidebarMenu on_click_option=Some(hide_sidebar) />
        </div>
    }
}
