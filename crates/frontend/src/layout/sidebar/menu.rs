use leptos::ev::MouseEvent;
use leptos::prelude::*;
use rb_contracts::shared::trusted_html::TrustedHtml;
use thaw::*;

use super::footer::{footer_links, FooterLink};
use super::options::{visible_options, HideOptions, MenuFlags, MenuOption, SidebarAction};
use crate::shared::api_utils::{contact_url, mailto_href, tos_url};
use crate::shared::i18n::use_translator;
use crate::shared::icons::icon;

/// Handlers behind the navigation entries
#[derive(Clone, Copy)]
pub struct SidebarCallbacks {
    pub goto_my_bookings: Callback<()>,
    pub goto_bookings_in_my_rooms: Callback<()>,
    pub goto_my_rooms_list: Callback<()>,
    pub goto_my_blockings: Callback<()>,
    pub goto_rb_admin_area: Callback<()>,
    pub toggle_admin_override: Callback<()>,
}

impl SidebarCallbacks {
    pub fn get(&self, action: SidebarAction) -> Callback<()> {
        match action {
            SidebarAction::MyBookings => self.goto_my_bookings,
            SidebarAction::BookingsInMyRooms => self.goto_bookings_in_my_rooms,
            SidebarAction::MyRoomsList => self.goto_my_rooms_list,
            SidebarAction::MyBlockings => self.goto_my_blockings,
            SidebarAction::AdminArea => self.goto_rb_admin_area,
            SidebarAction::ToggleAdminOverride => self.toggle_admin_override,
        }
    }
}

/// Run an entry's action, then the "option clicked" hook if there is one.
pub fn activate_option<A, B>(action: &A, after: Option<&B>)
where
    A: Fn(),
    B: Fn(),
{
    action();
    if let Some(after) = after {
        after();
    }
}

/// Everything [`SidebarMenu`] needs, as one value.
///
/// This is what replaceable sidebar implementations receive.
#[derive(Clone)]
pub struct SidebarMenuInput {
    pub is_admin: Signal<bool>,
    pub is_admin_override_enabled: Signal<bool>,
    pub has_owned_rooms: Signal<bool>,
    pub has_tos: Signal<bool>,
    pub tos_html: Signal<Option<TrustedHtml>>,
    pub help_url: Signal<Option<String>>,
    pub contact_email: Signal<Option<String>>,
    pub visible: Signal<bool>,
    pub callbacks: SidebarCallbacks,
    pub on_click_option: Option<Callback<()>>,
    pub hide_options: HideOptions,
}

pub type SidebarMenuRenderer = fn(SidebarMenuInput) -> AnyView;

/// The stock sidebar implementation.
pub fn render_sidebar_menu(input: SidebarMenuInput) -> AnyView {
    view! {
        <SidebarMenu
            is_admin=input.is_admin
            is_admin_override_enabled=input.is_admin_override_enabled
            has_owned_rooms=input.has_owned_rooms
            has_tos=input.has_tos
            tos_html=input.tos_html
            help_url=input.help_url
            contact_email=input.contact_email
            visible=input.visible
            callbacks=input.callbacks
            on_click_option=input.on_click_option
            hide_options=input.hide_options
        />
    }
    .into_any()
}

/// Slide-out navigation panel of the room booking module.
///
/// Pure presentation: all data and behaviour come in through props.
#[component]
pub fn SidebarMenu(
    #[prop(into)] is_admin: Signal<bool>,
    #[prop(into)] is_admin_override_enabled: Signal<bool>,
    #[prop(into)] has_owned_rooms: Signal<bool>,
    #[prop(into)] has_tos: Signal<bool>,
    #[prop(into)] tos_html: Signal<Option<TrustedHtml>>,
    #[prop(into)] help_url: Signal<Option<String>>,
    #[prop(into)] contact_email: Signal<Option<String>>,
    #[prop(into)] visible: Signal<bool>,
    callbacks: SidebarCallbacks,
    /// Called after any entry was clicked and when the user clicks outside the panel
    on_click_option: Option<Callback<()>>,
    #[prop(optional)] hide_options: HideOptions,
) -> impl IntoView {
    let tr = use_translator();
    let t = move |msgid: &'static str| tr.with(|tr| tr.string(msgid));

    let contact_visible = RwSignal::new(false);
    let terms_visible = RwSignal::new(false);
    let hide_options = StoredValue::new(hide_options);

    let options = move || {
        let flags = MenuFlags {
            is_admin: is_admin.get(),
            is_admin_override_enabled: is_admin_override_enabled.get(),
            has_owned_rooms: has_owned_rooms.get(),
        };
        hide_options.with_value(|hide| tr.with(|tr| visible_options(flags, hide, tr)))
    };

    let hide_sidebar = move |_: MouseEvent| {
        if let Some(cb) = on_click_option {
            cb.run(());
        }
    };

    let footer = move || {
        let links = footer_links(
            help_url.get().as_deref(),
            contact_email.get().as_deref(),
            has_tos.get(),
            tos_html.get().as_ref(),
        );
        links
            .into_iter()
            .map(|link| match link {
                FooterLink::Help { href } => view! {
                    <a class="rb-sidebar__item" href=href>{t("Help")}</a>
                }
                .into_any(),
                FooterLink::Contact { .. } => view! {
                    <a
                        class="rb-sidebar__item"
                        href=contact_url()
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            contact_visible.set(true);
                        }
                    >
                        {t("Contact")}
                    </a>
                }
                .into_any(),
                FooterLink::Terms { opens_modal } => view! {
                    <a
                        class="rb-sidebar__item"
                        href=tos_url()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |ev: MouseEvent| {
                            if opens_modal {
                                ev.prevent_default();
                                terms_visible.set(true);
                            }
                        }
                    >
                        {t("Terms and Conditions")}
                    </a>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="rb-sidebar" class:rb-sidebar--visible=move || visible.get()>
            <Show when=move || visible.get()>
                <div class="rb-sidebar__dimmer" on:click=hide_sidebar></div>
            </Show>
            <nav class="rb-sidebar__panel">
                <div class="rb-sidebar__options">
                    {move || {
                        options()
                            .into_iter()
                            .map(|option| render_option(option, callbacks, on_click_option))
                            .collect_view()
                    }}
                </div>
                <div class="rb-sidebar__bottom">{footer}</div>
            </nav>
        </div>

        {move || contact_email.get().map(|email| view! {
            <Dialog open=contact_visible>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            <ModalTitle title=t("Contact") open=contact_visible />
                        </DialogTitle>
                        <DialogContent>
                            <div>{t("If you need support, you can contact the following email address:")}</div>
                            <div>
                                <a href=mailto_href(&email)>{email.clone()}</a>
                            </div>
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        })}

        {move || tos_html.get().filter(|html| !html.is_empty()).map(|html| view! {
            <Dialog open=terms_visible>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            <ModalTitle title=t("Terms and Conditions") open=terms_visible />
                        </DialogTitle>
                        <DialogContent>
                            <div class="rb-terms" inner_html=html.into_inner()></div>
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        })}
    }
}

fn render_option(
    option: MenuOption,
    callbacks: SidebarCallbacks,
    on_click_option: Option<Callback<()>>,
) -> AnyView {
    let action = callbacks.get(option.action);
    let on_click = move |_: MouseEvent| {
        let after = on_click_option.map(|cb| move || cb.run(()));
        activate_option(&|| action.run(()), after.as_ref());
    };
    let icon_class = format!("rb-sidebar__icon {}", option.icon_color.unwrap_or_default());

    let item = view! {
        <a class="rb-sidebar__item" class:active=option.active on:click=on_click>
            <span class=icon_class>{icon(option.icon)}</span>
            <span class="rb-sidebar__label">{option.text}</span>
        </a>
    };

    match option.tooltip {
        // tooltip opens to the left of the row
        Some(tooltip) => view! {
            <div class="rb-tooltip rb-tooltip--left" data-tooltip=tooltip>
                {item}
            </div>
        }
        .into_any(),
        None => item.into_any(),
    }
}

/// Dialog heading with a close icon
#[component]
fn ModalTitle(title: String, open: RwSignal<bool>) -> impl IntoView {
    let tr = use_translator();
    view! {
        <div class="rb-modal__title">
            <span>{title}</span>
            <span title=move || tr.with(|tr| tr.string("Close"))>
                <Button appearance=ButtonAppearance::Transparent on_click=move |_| open.set(false)>
                    {icon("x")}
                </Button>
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_action_then_hook_once_each() {
        let log = RefCell::new(Vec::new());
        let action = || log.borrow_mut().push("action");
        let hook = || log.borrow_mut().push("hook");
        activate_option(&action, Some(&hook));
        assert_eq!(*log.borrow(), vec!["action", "hook"]);
    }

    #[test]
    fn test_without_hook_only_action_runs() {
        let log = RefCell::new(Vec::new());
        let action = || log.borrow_mut().push("action");
        activate_option(&action, None::<&fn()>);
        assert_eq!(*log.borrow(), vec!["action"]);
    }
}
