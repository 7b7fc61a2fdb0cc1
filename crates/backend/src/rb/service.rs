use rb_contracts::rb::{RbConfig, RbUserInfo};
use rb_contracts::shared::trusted_html::TrustedHtml;
use tokio::sync::RwLock;

use super::RbError;
use crate::shared::config::{SessionConfig, SiteConfig};
use crate::shared::sanitize::sanitize_html;

/// Room booking settings and the session user, shared by all handlers.
pub struct RbService {
    site: SiteConfig,
    tos_html: Option<TrustedHtml>,
    user: RwLock<RbUserInfo>,
}

impl RbService {
    pub fn new(site: SiteConfig, session: SessionConfig) -> Self {
        let tos_html = site
            .tos_html
            .as_deref()
            .map(sanitize_html)
            .filter(|html| !html.is_empty());

        let user = RbUserInfo {
            id: session.id,
            full_name: session.full_name,
            is_rb_admin: session.is_rb_admin,
            // Override only makes sense for admins
            is_admin_override_enabled: session.is_rb_admin && session.admin_override_enabled,
            has_owned_rooms: session.has_owned_rooms,
        };

        Self {
            site,
            tos_html,
            user: RwLock::new(user),
        }
    }

    pub fn config(&self) -> RbConfig {
        RbConfig {
            contact_email: self.site.contact_email.clone(),
            help_url: self.site.help_url.clone(),
            has_tos: self.site.tos_url.is_some() || self.tos_html.is_some(),
            tos_html: self.tos_html.clone(),
            locale: self.site.locale.clone(),
        }
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.site.contact_email.as_deref()
    }

    pub fn tos_url(&self) -> Option<&str> {
        self.site.tos_url.as_deref()
    }

    pub fn tos_html(&self) -> Option<&TrustedHtml> {
        self.tos_html.as_ref()
    }

    pub async fn current_user(&self) -> RbUserInfo {
        self.user.read().await.clone()
    }

    pub async fn toggle_admin_override(&self) -> Result<RbUserInfo, RbError> {
        let mut user = self.user.write().await;
        if !user.is_rb_admin {
            tracing::warn!("User {} tried to toggle admin override", user.id);
            return Err(RbError::Forbidden);
        }
        user.is_admin_override_enabled = !user.is_admin_override_enabled;
        tracing::info!(
            "Admin override {} for user {}",
            if user.is_admin_override_enabled { "enabled" } else { "disabled" },
            user.id
        );
        Ok(user.clone())
    }
}
