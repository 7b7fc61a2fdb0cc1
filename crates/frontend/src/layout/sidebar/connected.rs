//! Binds [`SidebarMenu`](super::menu::SidebarMenu) to the room booking store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rb_contracts::rb::RbUserInfo;

use super::menu::{SidebarCallbacks, SidebarMenuInput};
use super::navigation;
use super::options::HideOptions;
use crate::api::rb as rb_api;
use crate::layout::components::use_component_registry;
use crate::store::store::use_rb_store;
use crate::store::{selectors, Dispatch, RbAction, RbStore};

/// Sidebar menu fed from the store; the implementation comes from the component registry.
#[component]
pub fn ConnectedSidebarMenu(
    on_click_option: Option<Callback<()>>,
    #[prop(optional)] hide_options: HideOptions,
) -> impl IntoView {
    let store = use_rb_store();
    let registry = use_component_registry();

    let input = SidebarMenuInput {
        is_admin: store.select(selectors::is_user_rb_admin),
        is_admin_override_enabled: store.select(selectors::is_user_admin_override_enabled),
        has_owned_rooms: store.select(selectors::has_owned_rooms),
        has_tos: store.select(selectors::has_tos),
        tos_html: store.select(selectors::get_tos_html),
        help_url: store.select(selectors::get_help_url),
        contact_email: store.select(selectors::get_contact_email),
        visible: store.select(selectors::is_sidebar_visible),
        callbacks: store_callbacks(store),
        on_click_option,
        hide_options,
    };

    (registry.sidebar_menu)(input)
}

fn store_callbacks(store: RbStore) -> SidebarCallbacks {
    SidebarCallbacks {
        goto_my_bookings: Callback::new(move |_| navigation::goto_my_bookings(&store)),
        goto_bookings_in_my_rooms: Callback::new(move |_| {
            navigation::goto_bookings_in_my_rooms(&store)
        }),
        goto_my_rooms_list: Callback::new(move |_| navigation::goto_my_rooms_list(&store)),
        goto_my_blockings: Callback::new(move |_| navigation::goto_my_blockings(&store)),
        goto_rb_admin_area: Callback::new(move |_| navigation::goto_rb_admin_area(&store)),
        toggle_admin_override: Callback::new(move |_| {
            navigation::toggle_admin_override(&store);
            persist_admin_override(store);
        }),
    }
}

/// Tell the backend about the toggle.
///
/// When the backend refuses, the user is reloaded instead of flipping the flag
/// back, so an answer to a later click is never undone.
fn persist_admin_override(store: RbStore) {
    spawn_local(async move {
        match rb_api::toggle_admin_override().await {
            Ok(user) => store.dispatch(RbAction::SetUserInfo(user)),
            Err(e) => {
                log::warn!("Admin override was not saved: {}", e);
                resync_user(&store, rb_api::fetch_current_user().await);
            }
        }
    });
}

/// Replace the local user with what the backend reports.
fn resync_user(store: &impl Dispatch, reloaded: Result<RbUserInfo, String>) {
    match reloaded {
        Ok(user) => store.dispatch(RbAction::SetUserInfo(user)),
        Err(e) => log::error!("Cannot reload current user: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RbState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<RbAction>>);

    impl Dispatch for Recorder {
        fn dispatch(&self, action: RbAction) {
            self.0.borrow_mut().push(action);
        }
    }

    fn admin(override_enabled: bool) -> RbUserInfo {
        RbUserInfo {
            id: "1".to_string(),
            full_name: "Admin".to_string(),
            is_rb_admin: true,
            is_admin_override_enabled: override_enabled,
            has_owned_rooms: false,
        }
    }

    #[test]
    fn test_failed_save_takes_server_state() {
        // two clicks: the second was saved, the first failed afterwards
        let mut state = RbState::default();
        state.apply(&RbAction::SetUserInfo(admin(false)));
        let recorder = Recorder::default();

        resync_user(&recorder, Ok(admin(true)));

        let actions = recorder.0.into_inner();
        assert_eq!(actions, vec![RbAction::SetUserInfo(admin(true))]);
        for action in &actions {
            state.apply(action);
        }
        assert!(selectors::is_user_admin_override_enabled(&state));
    }

    #[test]
    fn test_failed_reload_leaves_store_alone() {
        let recorder = Recorder::default();
        resync_user(&recorder, Err("offline".to_string()));
        assert!(recorder.0.into_inner().is_empty());
    }
}
