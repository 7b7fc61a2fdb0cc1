//! Slide-out navigation of the room booking module.

pub mod connected;
pub mod footer;
pub mod menu;
pub mod navigation;
pub mod options;
pub mod trigger;

pub use connected::ConnectedSidebarMenu;
pub use menu::{render_sidebar_menu, SidebarCallbacks, SidebarMenu, SidebarMenuInput, SidebarMenuRenderer};
pub use options::{HideOptions, MY_BLOCKINGS};
pub use trigger::SidebarTrigger;
