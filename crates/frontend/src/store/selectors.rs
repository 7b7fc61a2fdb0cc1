//! Read-only views into [`RbState`].

use rb_contracts::shared::trusted_html::TrustedHtml;
use serde_json::{Map, Value};

use super::{RbState, Section};

pub fn is_user_rb_admin(state: &RbState) -> bool {
    state.user.is_rb_admin
}

pub fn is_user_admin_override_enabled(state: &RbState) -> bool {
    state.user.is_admin_override_enabled
}

pub fn has_owned_rooms(state: &RbState) -> bool {
    state.user.has_owned_rooms
}

pub fn get_contact_email(state: &RbState) -> Option<String> {
    non_empty(state.config.contact_email.as_deref())
}

pub fn get_help_url(state: &RbState) -> Option<String> {
    non_empty(state.config.help_url.as_deref())
}

pub fn has_tos(state: &RbState) -> bool {
    state.config.has_tos
}

pub fn get_tos_html(state: &RbState) -> Option<TrustedHtml> {
    state
        .config
        .tos_html
        .as_ref()
        .filter(|html| !html.is_empty())
        .cloned()
}

pub fn is_sidebar_visible(state: &RbState) -> bool {
    state.sidebar_visible
}

pub fn get_filters(state: &RbState, section: Section) -> Map<String, Value> {
    state
        .page(section)
        .map(|page| page.filters.clone())
        .unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_strings_are_absent() {
        let mut state = RbState::default();
        state.config.contact_email = Some(String::new());
        state.config.help_url = Some("  ".to_string());
        state.config.tos_html = Some(TrustedHtml::from_sanitized(""));
        assert_eq!(get_contact_email(&state), None);
        assert_eq!(get_help_url(&state), None);
        assert_eq!(get_tos_html(&state), None);
    }

    #[test]
    fn test_user_flags() {
        let mut state = RbState::default();
        state.user.is_rb_admin = true;
        state.user.has_owned_rooms = true;
        assert!(is_user_rb_admin(&state));
        assert!(has_owned_rooms(&state));
        assert!(!is_user_admin_override_enabled(&state));
    }

    #[test]
    fn test_filters_of_untouched_section_are_empty() {
        assert!(get_filters(&RbState::default(), Section::Blockings).is_empty());
    }
}
