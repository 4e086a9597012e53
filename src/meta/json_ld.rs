//! JSON-LD structured data (schema.org `BlogPosting`)

use serde_json::{json, Map, Value};

use super::{Head, MetaEmitter, MetaProps};
use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::date_iso;

pub struct JsonLdMeta;

impl JsonLdMeta {
    /// Build the `BlogPosting` object
    pub fn document(site: &SiteConfig, props: &MetaProps<'_>) -> Value {
        let mut doc = Map::new();
        doc.insert("@context".into(), json!("https://schema.org"));
        doc.insert("@type".into(), json!("BlogPosting"));
        doc.insert("mainEntityOfPage".into(), json!(props.absolute_url(site)));
        doc.insert("headline".into(), json!(props.title));
        if let Some(keywords) = props.keywords {
            doc.insert("keywords".into(), json!(keywords.join(",")));
        }
        if let Some(date) = props.date {
            doc.insert("datePublished".into(), json!(date_iso(date)));
        }
        if let Some(author) = props.author {
            doc.insert("author".into(), json!(author));
        }
        doc.insert("image".into(), json!(props.image_url(site)));
        doc.insert(
            "description".into(),
            json!(props.description_or_site(site)),
        );
        Value::Object(doc)
    }
}

impl MetaEmitter for JsonLdMeta {
    fn emit(
        &self,
        site: &SiteConfig,
        props: &MetaProps<'_>,
        head: &mut Head,
    ) -> Result<(), LayoutError> {
        let json = serde_json::to_string(&Self::document(site, props))?;
        // no `<` may reach the script element's raw text
        let json = json.replace('<', "\\u003c");
        head.push(
            "script:ld+json",
            format!(r#"<script type="application/ld+json">{}</script>"#, json),
        );
        Ok(())
    }
}
