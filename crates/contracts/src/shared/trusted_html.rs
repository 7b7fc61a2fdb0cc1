//! Markup that has already been sanitized and may be inserted into the DOM as-is.

use serde::{Deserialize, Serialize};

/// Pre-sanitized HTML.
///
/// The only constructor is [`TrustedHtml::from_sanitized`]; whoever calls it
/// vouches that the content went through an HTML sanitizer. Consumers render
/// the value verbatim and must not escape it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_sanitized(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let html = TrustedHtml::from_sanitized("<b>terms</b>");
        assert_eq!(serde_json::to_string(&html).unwrap(), r#""<b>terms</b>""#);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(TrustedHtml::from_sanitized("  \n").is_empty());
        assert!(!TrustedHtml::from_sanitized("<p></p>").is_empty());
    }
}
