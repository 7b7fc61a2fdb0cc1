use rb_contracts::shared::trusted_html::TrustedHtml;

/// Sanitize terms of service HTML before it is handed to the browser.
///
/// Rules:
/// - no `<script>`/`<style>` tags or their content
/// - no `on*` attributes and no `javascript:` URIs
/// - basic text, list, table and link markup is kept
pub fn sanitize_html(html: &str) -> TrustedHtml {
    let cleaned = ammonia::Builder::new()
        .tags(maplit::hashset![
            "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6",
            "ul", "ol", "li", "strong", "em", "b", "i", "u", "small", "sup", "sub",
            "table", "thead", "tbody", "tr", "td", "th",
            "br", "hr", "section", "article", "header", "footer", "a", "blockquote",
        ])
        .generic_attributes(maplit::hashset!["class", "id", "title"])
        .tag_attributes(maplit::hashmap![
            "a" => maplit::hashset!["href"],
        ])
        .url_schemes(maplit::hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string();
    TrustedHtml::from_sanitized(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_removed() {
        let html = sanitize_html("<p>Terms</p><script>alert(1)</script>");
        assert_eq!(html.as_str(), "<p>Terms</p>");
    }

    #[test]
    fn test_event_handlers_and_js_links_are_removed() {
        let html = sanitize_html(r#"<p onclick="x()">a</p><a href="javascript:x()">b</a>"#);
        assert!(!html.as_str().contains("onclick"));
        assert!(!html.as_str().contains("javascript"));
    }

    #[test]
    fn test_regular_markup_survives() {
        let html = sanitize_html("<h2>Rules</h2><ul><li><strong>Quiet</strong></li></ul>");
        assert_eq!(
            html.as_str(),
            "<h2>Rules</h2><ul><li><strong>Quiet</strong></li></ul>"
        );
    }
}
