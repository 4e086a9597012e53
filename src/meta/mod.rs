//! Head metadata emitters
//!
//! Each emitter writes one family of tags into a [`Head`]: plain SEO tags,
//! the Twitter card, Open Graph and a JSON-LD `BlogPosting`. All of them are
//! driven by the same [`MetaProps`], so the URL, title and description they
//! publish always agree.

mod basic;
mod head;
mod json_ld;
mod open_graph;
mod twitter;

use chrono::{DateTime, FixedOffset};

pub use basic::BasicMeta;
pub use head::{Head, HeadEntry};
pub use json_ld::JsonLdMeta;
pub use open_graph::OpenGraphMeta;
pub use twitter::TwitterCardMeta;

use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::full_url_for;

/// Values shared by every emitter
#[derive(Debug, Clone, Copy)]
pub struct MetaProps<'a> {
    /// Site-relative page path, e.g. `/posts/hello`
    pub url: &'a str,
    pub title: &'a str,
    pub keywords: Option<&'a [String]>,
    pub description: &'a str,
    pub date: Option<&'a DateTime<FixedOffset>>,
    pub author: Option<&'a str>,
}

impl<'a> MetaProps<'a> {
    pub fn new(url: &'a str, title: &'a str, description: &'a str) -> Self {
        Self {
            url,
            title,
            keywords: None,
            description,
            date: None,
            author: None,
        }
    }

    pub fn keywords(mut self, keywords: &'a [String]) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn date(mut self, date: &'a DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn author(mut self, author: &'a str) -> Self {
        self.author = Some(author);
        self
    }

    /// Absolute page URL
    pub fn absolute_url(&self, site: &SiteConfig) -> String {
        full_url_for(&site.base_url, self.url)
    }

    /// `"{title} | {site title}"`, or empty for an untitled page
    pub fn page_title(&self, site: &SiteConfig) -> String {
        if self.title.is_empty() {
            String::new()
        } else {
            format!("{} | {}", self.title, site.site_title)
        }
    }

    /// Description, falling back to the site description
    pub fn description_or_site<'s>(&self, site: &'s SiteConfig) -> &'s str
    where
        'a: 's,
    {
        if self.description.is_empty() {
            &site.site_description
        } else {
            self.description
        }
    }

    /// Absolute URL of the site's social card image
    pub fn image_url(&self, site: &SiteConfig) -> String {
        let image = &site.og_image;
        if image.starts_with("http://") || image.starts_with("https://") {
            image.clone()
        } else {
            full_url_for(&site.base_url, image)
        }
    }
}

/// Writes one family of head tags
pub trait MetaEmitter: Send + Sync {
    fn emit(
        &self,
        site: &SiteConfig,
        props: &MetaProps<'_>,
        head: &mut Head,
    ) -> Result<(), LayoutError>;
}

/// The emitters a post page runs, in output order
pub fn post_emitters() -> [&'static dyn MetaEmitter; 4] {
    [&BasicMeta, &TwitterCardMeta, &OpenGraphMeta, &JsonLdMeta]
}

#[cfg(test)]
pub(crate) fn test_site() -> SiteConfig {
    SiteConfig {
        base_url: "https://blog.example.com/".to_string(),
        site_title: "Example Blog".to_string(),
        site_description: "Notes on software".to_string(),
        site_keywords: vec!["software".to_string(), "notes".to_string()],
        twitter_account: Some("example".to_string()),
        github_account: Some("example-gh".to_string()),
        ..SiteConfig::default()
    }
}
