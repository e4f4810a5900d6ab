//! HTML helper functions

/// Generate a feed link tag for the document head
pub fn feed_tag(href: &str, title: &str) -> String {
    format!(
        r#"<link rel="alternate" type="application/rss+xml" title="{}" href="{}">"#,
        html_escape(title),
        html_escape(href)
    )
}

/// Generate a named meta tag, or nothing when `content` is blank
pub fn meta_tag(name: &str, content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    ))
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="folio-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape text for element content and double- or single-quoted attributes
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
