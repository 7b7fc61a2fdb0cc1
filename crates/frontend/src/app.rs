use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

use crate::api::rb as rb_api;
use crate::layout::components::ComponentRegistry;
use crate::layout::sidebar::SidebarMenuRenderer;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::Translator;
use crate::shared::registry::Overrides;
use crate::store::{Dispatch, RbAction, RbStore};

#[component]
pub fn App(
    /// Replacement sidebar implementations, by component name
    #[prop(optional)]
    sidebar_menu_overrides: Overrides<SidebarMenuRenderer>,
) -> impl IntoView {
    let store = RbStore::new();
    let translator = RwSignal::new(Translator::for_locale("en"));

    provide_context(store);
    provide_context(translator);
    provide_context(ComponentRegistry::compose(&sidebar_menu_overrides));

    store.init_router_integration();
    load_initial_state(store, translator);

    view! {
        <ConfigProvider>
            <Shell>
                <AppRoutes />
            </Shell>
        </ConfigProvider>
    }
}

/// Fetch site config and the current user. On failure the store keeps its
/// defaults: a regular user and no footer links.
fn load_initial_state(store: RbStore, translator: RwSignal<Translator>) {
    spawn_local(async move {
        match rb_api::fetch_config().await {
            Ok(config) => {
                log::info!("Loaded room booking config (locale {})", config.locale);
                translator.set(Translator::for_locale(&config.locale));
                store.dispatch(RbAction::SetConfig(config));
            }
            Err(e) => log::error!("Cannot load room booking config: {}", e),
        }
    });
    spawn_local(async move {
        match rb_api::fetch_current_user().await {
            Ok(user) => store.dispatch(RbAction::SetUserInfo(user)),
            Err(e) => log::error!("Cannot load current user: {}", e),
        }
    });
}
