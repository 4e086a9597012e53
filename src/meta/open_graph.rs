//! Open Graph tags

use super::{Head, MetaEmitter, MetaProps};
use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::meta_property;

pub struct OpenGraphMeta;

fn push(head: &mut Head, property: &str, content: &str) {
    head.push(
        format!("property:{}", property),
        meta_property(property, content),
    );
}

impl MetaEmitter for OpenGraphMeta {
    fn emit(
        &self,
        site: &SiteConfig,
        props: &MetaProps<'_>,
        head: &mut Head,
    ) -> Result<(), LayoutError> {
        push(head, "og:site_name", &site.site_title);
        push(head, "og:url", &props.absolute_url(site));
        push(head, "og:title", &props.page_title(site));
        push(head, "og:description", props.description_or_site(site));
        push(head, "og:image", &props.image_url(site));
        push(head, "og:type", "article");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::test_site;

    #[test]
    fn test_open_graph() {
        let mut head = Head::new();
        let props = MetaProps::new("/posts/hello", "Hello", "Tom & Jerry");
        OpenGraphMeta.emit(&test_site(), &props, &mut head).unwrap();

        let keys: Vec<_> = head.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "property:og:site_name",
                "property:og:url",
                "property:og:title",
                "property:og:description",
                "property:og:image",
                "property:og:type",
            ]
        );
        assert_eq!(
            head.get("property:og:description"),
            Some(r#"<meta property="og:description" content="Tom &amp; Jerry">"#)
        );
        assert_eq!(
            head.get("property:og:type"),
            Some(r#"<meta property="og:type" content="article">"#)
        );
    }
}
