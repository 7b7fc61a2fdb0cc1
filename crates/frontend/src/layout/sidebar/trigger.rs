use leptos::prelude::*;

use crate::shared::icons::icon;

/// The click handler to attach, if any.
///
/// While the sidebar is open the trigger must stay inert: the sidebar closes
/// itself on an outside click, and a second handler here would reopen it in
/// the same event.
pub fn armed<F>(active: bool, handler: F) -> Option<F> {
    (!active).then_some(handler)
}

/// Hamburger icon that opens the sidebar.
#[component]
pub fn SidebarTrigger(
    #[prop(into)] active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="rb-sidebar-button" class:active=move || active.get()>
            {move || match armed(active.get(), on_click) {
                Some(handler) => view! {
                    <div class="rb-sidebar-button__trigger" on:click=move |_| handler.run(())>
                        {icon("bars")}
                    </div>
                }
                .into_any(),
                None => icon("bars"),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_active_trigger_has_no_handler() {
        let calls = Cell::new(0);
        let handler = armed(true, || calls.set(calls.get() + 1));
        assert!(handler.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_inactive_trigger_fires_once_per_click() {
        let calls = Cell::new(0);
        let handler = armed(false, || calls.set(calls.get() + 1)).unwrap();
        handler();
        assert_eq!(calls.get(), 1);
    }
}
