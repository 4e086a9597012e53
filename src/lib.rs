//! post-layout: renders blog post pages with SEO, social card and JSON-LD metadata
//!
//! The [`layout`] module is the core: a two-step post layout that resolves
//! author and tag ids through injected lookups, then wraps post content in a
//! complete page. The rest of the crate loads a blog directory and drives the
//! layout from the command line.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod layout;
pub mod lookup;
pub mod meta;
pub mod templates;

use anyhow::Result;
use std::path::Path;

pub use error::LayoutError;
pub use layout::{ConfiguredPost, PostLayout, PostProps, RenderedPage};

/// A blog directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Post sources
    pub content_dir: std::path::PathBuf,
    /// Author and tag registries
    pub meta_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Open a blog directory, reading `config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let meta_dir = base_dir.join(&config.meta_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            meta_dir,
            public_dir,
        })
    }

    /// Load `authors.yml` from the meta directory
    pub fn load_authors(&self) -> Result<lookup::AuthorRegistry> {
        lookup::AuthorRegistry::load(self.meta_dir.join("authors.yml"))
    }

    /// Load `tags.yml` from the meta directory
    pub fn load_tags(&self) -> Result<lookup::TagRegistry> {
        lookup::TagRegistry::load(self.meta_dir.join("tags.yml"))
    }

    /// Render every post into the public directory
    pub fn build(&self) -> Result<commands::build::BuildSummary> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("content/posts"));
        assert_eq!(blog.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.yml"),
            "site_title: Mine\npublic_dir: dist\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.site_title, "Mine");
        assert_eq!(blog.public_dir, dir.path().join("dist"));
        assert!(blog.load_authors().unwrap().is_empty());
        assert!(blog.load_tags().unwrap().is_empty());
    }
}
