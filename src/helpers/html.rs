//! HTML helper functions

/// Generate a `<meta name=..>` tag
///
/// # Examples
/// ```ignore
/// meta_name("description", "A post") // -> <meta name="description" content="A post">
/// ```
pub fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

/// Generate a `<meta property=..>` tag, as used by Open Graph
pub fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        html_escape(property),
        html_escape(content)
    )
}

/// Generate a `<link>` tag
pub fn link_tag(rel: &str, href: &str) -> String {
    format!(
        r#"<link rel="{}" href="{}">"#,
        html_escape(rel),
        html_escape(href)
    )
}

/// Generate a favicon link tag
pub fn favicon_tag(href: &str) -> String {
    link_tag("icon", href)
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_name() {
        assert_eq!(
            meta_name("description", "Tom & \"Jerry\""),
            r#"<meta name="description" content="Tom &amp; &quot;Jerry&quot;">"#
        );
    }

    #[test]
    fn test_meta_property() {
        assert_eq!(
            meta_property("og:type", "article"),
            r#"<meta property="og:type" content="article">"#
        );
    }

    #[test]
    fn test_link_tag() {
        assert_eq!(
            link_tag("canonical", "https://example.com/posts/a"),
            r#"<link rel="canonical" href="https://example.com/posts/a">"#
        );
        assert!(favicon_tag("/favicon.ico").contains(r#"rel="icon""#));
    }
}
