use gloo_net::http::Request;
use rb_contracts::rb::{RbConfig, RbUserInfo};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

/// Site settings (contact e-mail, help URL, terms)
pub async fn fetch_config() -> Result<RbConfig, String> {
    get_json("/api/rb/config").await
}

/// Room booking flags of the current user
pub async fn fetch_current_user() -> Result<RbUserInfo, String> {
    get_json("/api/rb/user/me").await
}

/// Flip admin override on the server; returns the updated user
pub async fn toggle_admin_override() -> Result<RbUserInfo, String> {
    let response = Request::post(&api_url("/api/rb/user/me/admin-override"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Admin override toggle failed: {}", response.status()));
    }

    response
        .json::<RbUserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("GET {} failed: {}", path, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
