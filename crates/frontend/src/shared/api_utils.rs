//! URLs of the backend: JSON API and the static pages linked from the UI.

/// Base URL of the backend
///
/// Same host as the page, port 3000. Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Contact page
pub fn contact_url() -> String {
    api_url(CONTACT_PATH)
}

/// Terms of service page
pub fn tos_url() -> String {
    api_url(TOS_PATH)
}

pub const CONTACT_PATH: &str = "/contact";
pub const TOS_PATH: &str = "/tos";

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href("help@example.org"), "mailto:help@example.org");
    }
}
