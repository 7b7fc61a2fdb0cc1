//! Static pages the sidebar footer links to.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::rb::RbService;

/// GET /contact
pub async fn contact(State(service): State<Arc<RbService>>) -> Result<Html<String>, StatusCode> {
    let email = service.contact_email().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(contact_page(email)))
}

/// GET /tos
pub async fn terms(State(service): State<Arc<RbService>>) -> Result<Response, StatusCode> {
    if let Some(url) = service.tos_url() {
        return Ok(Redirect::temporary(url).into_response());
    }
    let html = service.tos_html().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(page("Terms and Conditions", html.as_str())).into_response())
}

fn contact_page(email: &str) -> String {
    let email = ammonia::clean_text(email);
    let body = format!(
        "<p>If you need support, you can contact the following email address:</p>\
         <p><a href=\"mailto:{email}\">{email}</a></p>"
    );
    page("Contact", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body><h1>{title}</h1>{body}</body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{SessionConfig, SiteConfig};

    fn service(site: SiteConfig) -> Arc<RbService> {
        Arc::new(RbService::new(site, SessionConfig::default()))
    }

    #[tokio::test]
    async fn test_contact_page_has_mailto_link() {
        let site = SiteConfig {
            contact_email: Some("help@example.org".to_string()),
            ..SiteConfig::default()
        };
        let Html(body) = contact(State(service(site))).await.unwrap();
        assert!(body.contains(r#"<a href="mailto:help@example.org">help@example.org</a>"#));
    }

    #[tokio::test]
    async fn test_contact_page_missing_without_email() {
        let result = contact(State(service(SiteConfig::default()))).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_terms_redirects_to_external_url() {
        let site = SiteConfig {
            tos_url: Some("https://example.org/tos".to_string()),
            tos_html: Some("<p>inline</p>".to_string()),
            ..SiteConfig::default()
        };
        let response = terms(State(service(site))).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[axum::http::header::LOCATION],
            "https://example.org/tos"
        );
    }

    #[tokio::test]
    async fn test_terms_page_renders_inline_html() {
        let site = SiteConfig {
            tos_html: Some("<p>inline</p>".to_string()),
            ..SiteConfig::default()
        };
        let response = terms(State(service(site))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_terms_missing_without_any_tos() {
        let result = terms(State(service(SiteConfig::default()))).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_contact_page_escapes_address() {
        let body = contact_page("a<b>@example.org");
        assert!(!body.contains("<b>"));
    }
}
