use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::rb::RbService;

/// All application routes
pub fn configure_routes(service: Arc<RbService>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ROOM BOOKING API
        // ========================================
        .route("/api/rb/config", get(handlers::rb::config))
        .route("/api/rb/user/me", get(handlers::rb::current_user))
        .route(
            "/api/rb/user/me/admin-override",
            post(handlers::rb::toggle_admin_override),
        )
        // ========================================
        // STATIC PAGES LINKED FROM THE SIDEBAR
        // ========================================
        .route("/contact", get(handlers::pages::contact))
        .route("/tos", get(handlers::pages::terms))
        .with_state(service)
}
