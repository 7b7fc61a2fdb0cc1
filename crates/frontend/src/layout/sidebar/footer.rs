//! Static links at the bottom of the sidebar.

use rb_contracts::shared::trusted_html::TrustedHtml;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterLink {
    /// Plain link to the help site
    Help { href: String },
    /// Opens the contact dialog instead of following the link
    Contact { email: String },
    /// Opens the terms in a dialog when we have their HTML, otherwise follows the link
    Terms { opens_modal: bool },
}

pub fn footer_links(
    help_url: Option<&str>,
    contact_email: Option<&str>,
    has_tos: bool,
    tos_html: Option<&TrustedHtml>,
) -> Vec<FooterLink> {
    let mut links = Vec::with_capacity(3);
    if let Some(href) = present(help_url) {
        links.push(FooterLink::Help {
            href: href.to_string(),
        });
    }
    if let Some(email) = present(contact_email) {
        links.push(FooterLink::Contact {
            email: email.to_string(),
        });
    }
    let has_tos_html = tos_html.is_some_and(|html| !html.is_empty());
    if has_tos || has_tos_html {
        links.push(FooterLink::Terms {
            opens_modal: has_tos_html,
        });
    }
    links
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_configured() {
        assert!(footer_links(None, None, false, None).is_empty());
        assert!(footer_links(Some(""), Some(""), false, None).is_empty());
    }

    #[test]
    fn test_help_is_a_plain_link() {
        assert_eq!(
            footer_links(Some("https://example.org/help"), None, false, None),
            vec![FooterLink::Help {
                href: "https://example.org/help".to_string()
            }]
        );
    }

    #[test]
    fn test_contact_present_with_email() {
        assert_eq!(
            footer_links(None, Some("help@example.org"), false, None),
            vec![FooterLink::Contact {
                email: "help@example.org".to_string()
            }]
        );
    }

    #[test]
    fn test_terms_link_without_html() {
        assert_eq!(
            footer_links(None, None, true, None),
            vec![FooterLink::Terms { opens_modal: false }]
        );
    }

    #[test]
    fn test_terms_modal_with_html() {
        let html = TrustedHtml::from_sanitized("<p>Rules</p>");
        assert_eq!(
            footer_links(None, None, false, Some(&html)),
            vec![FooterLink::Terms { opens_modal: true }]
        );
        assert_eq!(
            footer_links(None, None, true, Some(&html)),
            vec![FooterLink::Terms { opens_modal: true }]
        );
    }

    #[test]
    fn test_order_is_help_contact_terms() {
        let html = TrustedHtml::from_sanitized("<p>Rules</p>");
        let links = footer_links(Some("/help"), Some("a@b.org"), true, Some(&html));
        assert!(matches!(links[0], FooterLink::Help { .. }));
        assert!(matches!(links[1], FooterLink::Contact { .. }));
        assert!(matches!(links[2], FooterLink::Terms { opens_modal: true }));
    }
}
