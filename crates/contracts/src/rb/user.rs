use serde::{Deserialize, Serialize};

/// The current user as seen by the room booking module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbUserInfo {
    pub id: String,
    pub full_name: String,
    pub is_rb_admin: bool,
    pub is_admin_override_enabled: bool,
    pub has_owned_rooms: bool,
}
