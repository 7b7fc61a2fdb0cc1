use serde::{Deserialize, Serialize};

use crate::shared::trusted_html::TrustedHtml;

/// Site-level settings the room booking UI needs on every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbConfig {
    pub contact_email: Option<String>,
    pub help_url: Option<String>,
    /// True when the site publishes terms of service (external URL or inline text)
    pub has_tos: bool,
    pub tos_html: Option<TrustedHtml>,
    pub locale: String,
}

impl Default for RbConfig {
    fn default() -> Self {
        Self {
            contact_email: None,
            help_url: None,
            has_tos: false,
            tos_html: None,
            locale: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_shape() {
        let json = r#"{
            "contact_email": "help@example.org",
            "help_url": null,
            "has_tos": true,
            "tos_html": "<p>Be nice</p>",
            "locale": "ru"
        }"#;
        let config: RbConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.contact_email.as_deref(), Some("help@example.org"));
        assert!(config.help_url.is_none());
        assert_eq!(config.tos_html.unwrap().as_str(), "<p>Be nice</p>");
        assert_eq!(config.locale, "ru");
    }
}
