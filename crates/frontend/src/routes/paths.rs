//! URL paths of the room booking pages and their query strings.

use serde::Serialize;

pub const CALENDAR: &str = "/calendar";
pub const ROOMS: &str = "/rooms";
pub const BLOCKINGS: &str = "/blockings";
pub const ADMIN: &str = "/admin";

#[derive(Debug, Default, Serialize)]
pub struct CalendarQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_bookings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_unused: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct RoomListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct BlockingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_blockings: Option<bool>,
}

/// `path?query`, or just `path` when the query is empty or cannot be encoded
pub fn route_with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if qs.is_empty() => path.to_string(),
        Ok(qs) => format!("{}?{}", path, qs),
        Err(e) => {
            log::warn!("Cannot encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

/// Top-level pages known to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Calendar,
    Rooms,
    Blockings,
    Admin,
    NotFound,
}

impl Route {
    pub fn parse(location: &str) -> Self {
        let path = location.split(&['?', '#'][..]).next().unwrap_or("");
        let path = path.trim_end_matches('/');
        match path {
            "" | CALENDAR => Route::Calendar,
            ROOMS => Route::Rooms,
            BLOCKINGS => Route::Blockings,
            ADMIN => Route::Admin,
            _ => Route::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Calendar => "Calendar",
            Route::Rooms => "List of Rooms",
            Route::Blockings => "Blockings",
            Route::Admin => "Administration",
            Route::NotFound => "Page not found",
        }
    }
}
