//! Twitter card tags

use super::{Head, MetaEmitter, MetaProps};
use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::meta_name;

pub struct TwitterCardMeta;

fn push(head: &mut Head, name: &str, content: &str) {
    head.push(format!("meta:{}", name), meta_name(name, content));
}

impl MetaEmitter for TwitterCardMeta {
    fn emit(
        &self,
        site: &SiteConfig,
        props: &MetaProps<'_>,
        head: &mut Head,
    ) -> Result<(), LayoutError> {
        push(head, "twitter:card", "summary_large_image");
        if let Some(account) = site.twitter_account.as_deref() {
            push(head, "twitter:site", &format!("@{}", account.trim_start_matches('@')));
        }
        push(head, "twitter:url", &props.absolute_url(site));
        push(head, "twitter:title", &props.page_title(site));
        push(head, "twitter:description", props.description_or_site(site));
        push(head, "twitter:image", &props.image_url(site));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::test_site;

    #[test]
    fn test_twitter_card() {
        let mut head = Head::new();
        let props = MetaProps::new("/posts/hello", "Hello", "First post");
        TwitterCardMeta.emit(&test_site(), &props, &mut head).unwrap();

        assert_eq!(
            head.get("meta:twitter:card"),
            Some(r#"<meta name="twitter:card" content="summary_large_image">"#)
        );
        assert_eq!(
            head.get("meta:twitter:site"),
            Some(r#"<meta name="twitter:site" content="@example">"#)
        );
        assert!(head
            .get("meta:twitter:url")
            .unwrap()
            .contains("https://blog.example.com/posts/hello"));
        assert!(head
            .get("meta:twitter:title")
            .unwrap()
            .contains("Hello | Example Blog"));
        assert!(head
            .get("meta:twitter:image")
            .unwrap()
            .contains("https://blog.example.com/og_image.png"));
    }

    #[test]
    fn test_site_omitted_without_account() {
        let site = SiteConfig {
            twitter_account: None,
            ..test_site()
        };
        let mut head = Head::new();
        TwitterCardMeta
            .emit(&site, &MetaProps::new("/posts/a", "A", "d"), &mut head)
            .unwrap();
        assert!(head.get("meta:twitter:site").is_none());
        assert_eq!(head.len(), 5);
    }
}
