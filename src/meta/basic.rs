//! Plain SEO tags: title, description, keywords, author, canonical link

use super::{Head, MetaEmitter, MetaProps};
use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::{html_escape, link_tag, meta_name};

pub struct BasicMeta;

impl MetaEmitter for BasicMeta {
    fn emit(
        &self,
        site: &SiteConfig,
        props: &MetaProps<'_>,
        head: &mut Head,
    ) -> Result<(), LayoutError> {
        head.push(
            "title",
            format!("<title>{}</title>", html_escape(&props.page_title(site))),
        );
        head.push(
            "meta:description",
            meta_name("description", props.description_or_site(site)),
        );

        let keywords = match props.keywords {
            Some(keywords) => keywords.join(","),
            None => site.site_keywords.join(","),
        };
        head.push("meta:keywords", meta_name("keywords", &keywords));

        if let Some(author) = props.author {
            head.push("meta:author", meta_name("author", author));
        }

        head.push(
            "link:canonical",
            link_tag("canonical", &props.absolute_url(site)),
        );
        Ok(())
    }
}
