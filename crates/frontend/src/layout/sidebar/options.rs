//! Which navigation entries the sidebar shows, and how.

use std::collections::HashMap;

use crate::shared::i18n::Translator;

/// Name of the "My Blockings" entry in [`HideOptions`]
pub const MY_BLOCKINGS: &str = "myBlockings";

/// What a menu entry does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    MyBookings,
    BookingsInMyRooms,
    MyRoomsList,
    MyBlockings,
    AdminArea,
    ToggleAdminOverride,
}

/// User flags the menu depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuFlags {
    pub is_admin: bool,
    pub is_admin_override_enabled: bool,
    pub has_owned_rooms: bool,
}

/// Entries the embedding page wants suppressed regardless of the user's role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HideOptions(HashMap<String, bool>);

impl HideOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into(), true);
        self
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }
}

impl From<HashMap<String, bool>> for HideOptions {
    fn from(map: HashMap<String, bool>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub key: &'static str,
    pub icon: &'static str,
    pub text: String,
    pub action: SidebarAction,
    pub icon_color: Option<&'static str>,
    pub active: bool,
    pub tooltip: Option<String>,
    /// `None` means always shown
    pub only_if: Option<bool>,
}

impl MenuOption {
    fn new(key: &'static str, icon: &'static str, text: String, action: SidebarAction) -> Self {
        Self {
            key,
            icon,
            text,
            action,
            icon_color: None,
            active: false,
            tooltip: None,
            only_if: None,
        }
    }

    fn only_if(mut self, condition: bool) -> Self {
        self.only_if = Some(condition);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.only_if.unwrap_or(true)
    }
}

/// Every entry in display order, before visibility filtering.
pub fn all_options(flags: MenuFlags, hide: &HideOptions, tr: &Translator) -> Vec<MenuOption> {
    let override_on = flags.is_admin_override_enabled;
    vec![
        MenuOption::new(
            "my_bookings",
            "list-alt",
            tr.string("My Bookings"),
            SidebarAction::MyBookings,
        ),
        MenuOption::new(
            "bookings_my_rooms",
            "checkmark",
            tr.string("Bookings in My Rooms"),
            SidebarAction::BookingsInMyRooms,
        )
        .only_if(flags.has_owned_rooms),
        MenuOption::new(
            "my_rooms",
            "user",
            tr.string("List of My Rooms"),
            SidebarAction::MyRoomsList,
        )
        .only_if(flags.has_owned_rooms),
        MenuOption::new(
            "my_blockings",
            "window-close",
            tr.string("My Blockings"),
            SidebarAction::MyBlockings,
        )
        .only_if(!hide.is_hidden(MY_BLOCKINGS)),
        MenuOption::new(
            "isAdmin",
            "cogs",
            tr.string("Administration"),
            SidebarAction::AdminArea,
        )
        .only_if(flags.is_admin),
        MenuOption {
            icon_color: override_on.then_some("orange"),
            active: override_on,
            tooltip: Some(tr.string(
                "Admin Override gives you unrestricted access to all rooms and bookings.",
            )),
            ..MenuOption::new(
                "adminOverride",
                if override_on { "unlock" } else { "lock" },
                tr.string("Admin Override"),
                SidebarAction::ToggleAdminOverride,
            )
        }
        .only_if(flags.is_admin),
    ]
}

/// Entries the user actually gets to see.
pub fn visible_options(flags: MenuFlags, hide: &HideOptions, tr: &Translator) -> Vec<MenuOption> {
    all_options(flags, hide, tr)
        .into_iter()
        .filter(MenuOption::is_visible)
        .collect()
}
