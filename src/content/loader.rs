//! Content loader - loads posts from the content directory

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// Loads posts from the content directory
pub struct PostLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(&blog.config.highlight);
        Self { blog, renderer }
    }

    /// Load all posts, newest first
    ///
    /// Files that fail to load are skipped with a warning.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut slugs = HashSet::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !(path.is_file() && is_markdown_file(path)) {
                continue;
            }
            match self.load_post(path) {
                Ok(post) => {
                    if !slugs.insert(post.slug().to_string()) {
                        tracing::warn!("Duplicate slug {:?} in {:?}", post.slug(), path);
                    }
                    posts.push(post);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.props.date.cmp(&a.props.date));

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, body) =
            FrontMatter::parse(&content).with_context(|| format!("In {:?}", path))?;

        // slug defaults to the file name
        let default_slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slug::slugify)
            .unwrap_or_else(|| "untitled".to_string());
        let props = fm
            .into_props(&default_slug)
            .with_context(|| format!("Invalid front-matter in {:?}", path))?;

        let content_html = self.renderer.render(body)?;
        tracing::debug!("Loaded post {:?} from {:?}", props.slug, path);

        Ok(Post {
            props,
            content: content_html,
            source: path.to_path_buf(),
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
