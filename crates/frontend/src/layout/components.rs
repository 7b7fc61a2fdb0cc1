//! Component implementations chosen at startup.

use leptos::prelude::*;

use super::sidebar::{render_sidebar_menu, SidebarMenuRenderer};
use crate::shared::registry::Overrides;

/// Registry name of the sidebar menu
pub const SIDEBAR_MENU: &str = "SidebarMenu";

#[derive(Clone, Copy)]
pub struct ComponentRegistry {
    pub sidebar_menu: SidebarMenuRenderer,
}

impl ComponentRegistry {
    pub fn compose(sidebar_menu: &Overrides<SidebarMenuRenderer>) -> Self {
        Self {
            sidebar_menu: sidebar_menu.resolve(SIDEBAR_MENU, render_sidebar_menu),
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::compose(&Overrides::new())
    }
}

pub fn use_component_registry() -> ComponentRegistry {
    use_context::<ComponentRegistry>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sidebar::SidebarMenuInput;

    fn bare_menu(_: SidebarMenuInput) -> AnyView {
        ().into_any()
    }

    fn addr(renderer: SidebarMenuRenderer) -> usize {
        renderer as usize
    }

    #[test]
    fn test_compose_picks_registered_sidebar_menu() {
        let overrides = Overrides::new().register(SIDEBAR_MENU, bare_menu as SidebarMenuRenderer);
        let registry = ComponentRegistry::compose(&overrides);
        assert_eq!(addr(registry.sidebar_menu), addr(bare_menu));
        assert_ne!(addr(registry.sidebar_menu), addr(render_sidebar_menu));
    }

    #[test]
    fn test_compose_ignores_other_names() {
        let overrides = Overrides::new().register("TopHeader", bare_menu as SidebarMenuRenderer);
        let registry = ComponentRegistry::compose(&overrides);
        assert_eq!(addr(registry.sidebar_menu), addr(render_sidebar_menu));
    }
}
