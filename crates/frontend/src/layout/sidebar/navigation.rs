//! What the sidebar entries do to the store.
//!
//! Each "go to" resets the target section, replaces its filters with a
//! preset and then navigates to a URL carrying the same preset.

use serde_json::json;

use crate::routes::paths::{
    self, route_with_query, BlockingsQuery, CalendarQuery, RoomListQuery,
};
use crate::store::actions::{push_route, reset_page_state, set_filters};
use crate::store::{Dispatch, RbAction, Section};

pub fn goto_my_bookings(store: &impl Dispatch) {
    store.dispatch(reset_page_state(Section::Calendar));
    store.dispatch(set_filters(
        Section::Calendar,
        json!({"myBookings": true, "hideUnused": true}),
        false,
    ));
    let query = CalendarQuery {
        my_bookings: Some(true),
        hide_unused: Some(true),
        ..Default::default()
    };
    store.dispatch(push_route(route_with_query(paths::CALENDAR, &query)));
}

pub fn goto_bookings_in_my_rooms(store: &impl Dispatch) {
    store.dispatch(reset_page_state(Section::Calendar));
    store.dispatch(set_filters(
        Section::Calendar,
        json!({"onlyMine": true, "hideUnused": true}),
        false,
    ));
    let query = CalendarQuery {
        mine: Some(true),
        hide_unused: Some(true),
        ..Default::default()
    };
    store.dispatch(push_route(route_with_query(paths::CALENDAR, &query)));
}

pub fn goto_my_rooms_list(store: &impl Dispatch) {
    store.dispatch(reset_page_state(Section::RoomList));
    store.dispatch(set_filters(
        Section::RoomList,
        json!({"onlyMine": true}),
        false,
    ));
    let query = RoomListQuery { mine: Some(true) };
    store.dispatch(push_route(route_with_query(paths::ROOMS, &query)));
}

pub fn goto_my_blockings(store: &impl Dispatch) {
    store.dispatch(reset_page_state(Section::Blockings));
    store.dispatch(set_filters(
        Section::Blockings,
        json!({"myBlockings": true}),
        false,
    ));
    let query = BlockingsQuery {
        my_blockings: Some(true),
    };
    store.dispatch(push_route(route_with_query(paths::BLOCKINGS, &query)));
}

pub fn goto_rb_admin_area(store: &impl Dispatch) {
    store.dispatch(push_route(paths::ADMIN));
}

pub fn toggle_admin_override(store: &impl Dispatch) {
    store.dispatch(RbAction::ToggleAdminOverride);
}
