//! The blog post layout
//!
//! Rendering happens in two steps. [`PostLayout::configure`] takes the post
//! metadata and resolves every author and tag id through the injected
//! lookups; [`ConfiguredPost::render`] then wraps any content in the page:
//! head metadata, header, content slot, tag list and footer.
//!
//! ```ignore
//! let layout = PostLayout::new(&site, &authors, &tags, &renderer);
//! let page = layout.configure(props)?.render("<p>Hello</p>")?;
//! ```

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::config::SiteConfig;
use crate::error::LayoutError;
use crate::helpers::{date_iso, favicon_tag, full_date, post_path, tag_path};
use crate::lookup::{Author, AuthorLookup, Tag, TagLookup};
use crate::meta::{post_emitters, Head, MetaProps};
use crate::templates::{
    AuthorData, ConfigData, CopyrightData, DateData, SocialLink, TagData, TemplateRenderer,
};

/// Metadata of the post being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProps {
    pub title: String,
    pub date: DateTime<FixedOffset>,
    pub slug: String,
    pub description: String,
    /// Tag ids, in display order
    pub tags: Vec<String>,
    /// Author id
    pub author: String,
}

/// Output of a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Entries written to the document head
    pub head: Head,
    /// The complete HTML document
    pub html: String,
}

/// Post layout bound to its collaborators
#[derive(Clone, Copy)]
pub struct PostLayout<'a> {
    site: &'a SiteConfig,
    authors: &'a dyn AuthorLookup,
    tags: &'a dyn TagLookup,
    renderer: &'a TemplateRenderer,
}

impl<'a> PostLayout<'a> {
    pub fn new(
        site: &'a SiteConfig,
        authors: &'a dyn AuthorLookup,
        tags: &'a dyn TagLookup,
        renderer: &'a TemplateRenderer,
    ) -> Self {
        Self {
            site,
            authors,
            tags,
            renderer,
        }
    }

    /// Resolve the post's tag and author ids
    ///
    /// Tags are resolved first; every unknown tag id is reported together.
    pub fn configure(&self, props: PostProps) -> Result<ConfiguredPost<'a>, LayoutError> {
        let mut tags = Vec::with_capacity(props.tags.len());
        let mut missing = Vec::new();
        for id in &props.tags {
            match self.tags.tag(id) {
                Some(tag) => tags.push(tag.clone()),
                None => missing.push(id.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(LayoutError::UnknownTags { ids: missing });
        }

        let author = self
            .authors
            .author(&props.author)
            .cloned()
            .ok_or_else(|| LayoutError::UnknownAuthor {
                id: props.author.clone(),
            })?;

        let keywords = tags.iter().map(|t| t.name.clone()).collect();
        let url = post_path(&props.slug);

        Ok(ConfiguredPost {
            layout: *self,
            props,
            author,
            tags,
            keywords,
            url,
        })
    }
}

/// A post whose ids are resolved, ready to wrap content
pub struct ConfiguredPost<'a> {
    layout: PostLayout<'a>,
    props: PostProps,
    author: Author,
    tags: Vec<Tag>,
    keywords: Vec<String>,
    url: String,
}

impl ConfiguredPost<'_> {
    pub fn props(&self) -> &PostProps {
        &self.props
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tag display names, in post order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Site-relative post path
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run the metadata emitters
    pub fn head(&self) -> Result<Head, LayoutError> {
        let props = MetaProps::new(&self.url, &self.props.title, &self.props.description)
            .keywords(&self.keywords)
            .date(&self.props.date)
            .author(&self.author.name);

        let mut head = Head::new();
        for emitter in post_emitters() {
            emitter.emit(self.layout.site, &props, &mut head)?;
        }
        Ok(head)
    }

    /// Wrap `content` in the post page
    pub fn render(&self, content: &str) -> Result<RenderedPage, LayoutError> {
        let site = self.layout.site;
        let head = self.head()?;

        let mut context = Context::new();
        context.insert(
            "config",
            &ConfigData {
                language: site.language.clone(),
            },
        );
        context.insert("favicon", &favicon_tag(&site.favicon));
        context.insert("head", &head.to_html());
        context.insert("title", &self.props.title);
        context.insert(
            "date",
            &DateData {
                iso: date_iso(&self.props.date),
                display: full_date(&self.props.date),
            },
        );
        context.insert(
            "author",
            &AuthorData {
                slug: self.author.slug.clone(),
                name: self.author.name.clone(),
            },
        );
        context.insert("content", content);
        context.insert("tags", &self.tag_data());
        context.insert("social_links", &social_links(site));
        context.insert(
            "copyright",
            &CopyrightData {
                year: self.props.date.year(),
                holder: site.copyright_holder().to_string(),
            },
        );

        let html = self.layout.renderer.render("post.html", &context)?;
        tracing::debug!("Rendered post {} ({} bytes)", self.url, html.len());

        Ok(RenderedPage { head, html })
    }

    fn tag_data(&self) -> Vec<TagData> {
        self.tags
            .iter()
            .map(|tag| TagData {
                slug: tag.slug.clone(),
                name: tag.name.clone(),
                href: tag_path(&tag.slug),
            })
            .collect()
    }
}

/// Footer social links, for the configured accounts only
fn social_links(site: &SiteConfig) -> Vec<SocialLink> {
    let mut links = Vec::new();
    if let Some(account) = site.twitter_account.as_deref() {
        links.push(SocialLink {
            name: "Twitter".to_string(),
            href: format!("https://twitter.com/{}", account.trim_start_matches('@')),
        });
    }
    if let Some(account) = site.github_account.as_deref() {
        links.push(SocialLink {
            name: "GitHub".to_string(),
            href: format!("https://github.com/{}", account),
        });
    }
    links
}
