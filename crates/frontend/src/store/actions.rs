use rb_contracts::rb::{RbConfig, RbUserInfo};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page whose view state (filters) is kept in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Calendar,
    RoomList,
    Blockings,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Calendar => "calendar",
            Section::RoomList => "roomList",
            Section::Blockings => "blockings",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RbAction {
    /// Forget filters and other view state of a section
    ResetPageState(Section),
    SetFilters {
        section: Section,
        filters: Map<String, Value>,
        /// `false` replaces the section's filters, `true` merges into them
        merge: bool,
    },
    ToggleAdminOverride,
    SetUserInfo(RbUserInfo),
    SetConfig(RbConfig),
    SetSidebarVisible(bool),
    /// Navigate to `path?query`
    Push(String),
}

/// Anything that accepts store actions.
pub trait Dispatch {
    fn dispatch(&self, action: RbAction);
}

pub fn reset_page_state(section: Section) -> RbAction {
    RbAction::ResetPageState(section)
}

/// Build a `SetFilters` action from a JSON object.
pub fn set_filters(section: Section, filters: Value, merge: bool) -> RbAction {
    let filters = match filters {
        Value::Object(map) => map,
        other => {
            log::warn!("Ignoring non-object filters for {}: {}", section.as_str(), other);
            Map::new()
        }
    };
    RbAction::SetFilters {
        section,
        filters,
        merge,
    }
}

pub fn push_route(url: impl Into<String>) -> RbAction {
    RbAction::Push(url.into())
}
