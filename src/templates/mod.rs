//! Built-in post templates using the Tera template engine
//!
//! The page shell, the post layout, its widgets and the scoped stylesheet
//! are embedded directly in the binary.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded post templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all post templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped explicitly with `html_escape`; head tags and post
        // content arrive as finished HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("post/layout.html")),
            ("widgets.html", include_str!("post/widgets.html")),
            ("post.html", include_str!("post/post.html")),
            ("post.css", include_str!("post/post.css")),
        ])?;

        tera.register_filter("html_escape", html_escape_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: escape HTML special characters
fn html_escape_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("html_escape", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateData {
    pub iso: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorData {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    pub slug: String,
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyrightData {
    pub year: i32,
    pub holder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_html_escape_filter() {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("html_escape", html_escape_filter);
        tera.add_raw_template("t", "{{ v | html_escape }}").unwrap();
        let mut context = Context::new();
        context.insert("v", "<a href=\"x\">");
        assert_eq!(
            tera.render("t", &context).unwrap(),
            "&lt;a href=&quot;x&quot;&gt;"
        );
    }

    #[test]
    fn test_widget_macros() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut tera = renderer.tera.clone();
        tera.add_raw_template(
            "probe.html",
            r#"{% import "widgets.html" as widgets %}{{ widgets::tag_button(tag=tag) }}|{{ widgets::copyright(copyright=copyright) }}"#,
        )
        .unwrap();

        let mut context = Context::new();
        context.insert(
            "tag",
            &TagData {
                slug: "rust".to_string(),
                name: "Rust & Co".to_string(),
                href: "/posts/tags/rust".to_string(),
            },
        );
        context.insert(
            "copyright",
            &CopyrightData {
                year: 2020,
                holder: "Jane".to_string(),
            },
        );
        let html = tera.render("probe.html", &context).unwrap();
        assert_eq!(
            html,
            r#"<a class="tag-button" href="/posts/tags/rust">Rust &amp; Co</a>|<p class="copyright">&copy; 2020 Jane</p>"#
        );
    }
}
