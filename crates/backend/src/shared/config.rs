use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (index.html, wasm, css)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub contact_email: Option<String>,
    pub help_url: Option<String>,
    /// External terms of service page; takes precedence over inline terms on /tos
    pub tos_url: Option<String>,
    pub tos_html: Option<String>,
    /// File with the terms of service HTML, relative to config.toml
    pub tos_file: Option<String>,
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: None,
            help_url: None,
            tos_url: None,
            tos_html: None,
            tos_file: None,
            locale: "en".to_string(),
        }
    }
}

/// The user the server acts as. There is no login in this service.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub is_rb_admin: bool,
    #[serde(default)]
    pub has_owned_rooms: bool,
    #[serde(default)]
    pub admin_override_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id: "guest".to_string(),
            full_name: "Guest".to_string(),
            is_rb_admin: false,
            has_owned_rooms: false,
            admin_override_enabled: false,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000
static_dir = "dist"

[site]
contact_email = "room-booking@example.org"
help_url = "https://example.org/room-booking/help"
tos_html = "<h2>Terms and Conditions</h2><p>Rooms must be left as you found them.</p>"
locale = "en"

[session]
id = "1"
full_name = "Room Booking Admin"
is_rb_admin = true
has_owned_rooms = true
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<Config, ConfigError> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = read_file(&config_path)?;
                return parse_config(&contents, Some(exe_dir));
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG, None)
}

/// Parse and normalize a config document.
///
/// `base_dir` is where `site.tos_file` is resolved from.
pub fn parse_config(contents: &str, base_dir: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(contents)?;
    let site = &mut config.site;

    site.contact_email = non_empty(site.contact_email.take());
    site.help_url = non_empty(site.help_url.take());
    site.tos_url = non_empty(site.tos_url.take());
    site.tos_html = non_empty(site.tos_html.take());

    if let Some(email) = &site.contact_email {
        if !email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "site.contact_email is not an e-mail address: {email}"
            )));
        }
    }

    if let Some(file) = non_empty(site.tos_file.take()) {
        if site.tos_html.is_some() {
            return Err(ConfigError::Invalid(
                "site.tos_html and site.tos_file are mutually exclusive".to_string(),
            ));
        }
        let path = resolve_path(&file, base_dir);
        site.tos_html = non_empty(Some(read_file(&path)?));
    }

    Ok(config)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_path(path: &str, base_dir: Option<&Path>) -> PathBuf {
    let p = Path::new(path);
    match base_dir {
        Some(dir) if p.is_relative() => dir.join(p),
        _ => p.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.site.contact_email.as_deref(),
            Some("room-booking@example.org")
        );
        assert!(config.site.tos_html.is_some());
        assert!(config.session.is_rb_admin);
    }

    #[test]
    fn test_empty_strings_become_none() {
        let config = parse_config(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            static_dir = "dist"

            [site]
            contact_email = ""
            help_url = "   "
            locale = "ru"
            "#,
            None,
        )
        .unwrap();
        assert!(config.site.contact_email.is_none());
        assert!(config.site.help_url.is_none());
        assert_eq!(config.session.id, "guest");
        assert!(!config.session.is_rb_admin);
    }

    #[test]
    fn test_contact_email_must_look_like_an_address() {
        let err = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            static_dir = "dist"

            [site]
            contact_email = "nobody"
            locale = "en"
            "#,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_tos_file_is_io_error() {
        let err = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            static_dir = "dist"

            [site]
            tos_file = "definitely-missing-tos.html"
            locale = "en"
            "#,
            Some(Path::new("/nonexistent")),
        )
        .unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/definitely-missing-tos.html"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_example_config_loads_with_its_terms_file() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let contents = std::fs::read_to_string(dir.join("config.example.toml")).unwrap();
        let config = parse_config(&contents, Some(dir)).unwrap();
        assert!(config.site.tos_url.is_none());
        assert!(config
            .site
            .tos_html
            .as_deref()
            .is_some_and(|html| html.contains("Terms and Conditions")));
        assert_eq!(config.session.id, "1");
    }

    #[test]
    fn test_broken_toml_is_parse_error() {
        let err = parse_config("[server", None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
