use axum::{extract::State, Json};
use rb_contracts::rb::{RbConfig, RbUserInfo};
use std::sync::Arc;

use crate::rb::RbService;

/// GET /api/rb/config
pub async fn config(State(service): State<Arc<RbService>>) -> Json<RbConfig> {
    Json(service.config())
}

/// GET /api/rb/user/me
pub async fn current_user(State(service): State<Arc<RbService>>) -> Json<RbUserInfo> {
    Json(service.current_user().await)
}

/// POST /api/rb/user/me/admin-override
pub async fn toggle_admin_override(
    State(service): State<Arc<RbService>>,
) -> Result<Json<RbUserInfo>, axum::http::StatusCode> {
    match service.toggle_admin_override().await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e.status_code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{SessionConfig, SiteConfig};

    fn service(is_rb_admin: bool) -> Arc<RbService> {
        let session = SessionConfig {
            is_rb_admin,
            ..SessionConfig::default()
        };
        Arc::new(RbService::new(SiteConfig::default(), session))
    }

    #[tokio::test]
    async fn test_toggle_forbidden_for_regular_user() {
        let result = toggle_admin_override(State(service(false))).await;
        assert_eq!(result.unwrap_err(), axum::http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_toggle_returns_updated_user() {
        let svc = service(true);
        let Json(user) = toggle_admin_override(State(svc.clone())).await.unwrap();
        assert!(user.is_admin_override_enabled);
        let Json(me) = current_user(State(svc)).await;
        assert_eq!(me, user);
    }
}
