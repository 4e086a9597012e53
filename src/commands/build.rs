//! Render every post into the public directory

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::loader::PostLoader;
use crate::content::Post;
use crate::layout::{PostLayout, RenderedPage};
use crate::templates::TemplateRenderer;
use crate::{Blog, LayoutError};

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: Vec<PathBuf>,
}

/// Render all posts
///
/// Every post is attempted; the build fails afterwards if any post could not
/// be rendered or written. Posts are visited newest first, so when two posts
/// share a slug the newer one is written and the older one counts as failed.
pub fn run(blog: &Blog) -> Result<BuildSummary> {
    let start = std::time::Instant::now();

    let authors = blog.load_authors()?;
    let tags = blog.load_tags()?;
    let renderer = TemplateRenderer::new().context("Failed to load templates")?;
    let layout = PostLayout::new(&blog.config, &authors, &tags, &renderer);

    let posts = PostLoader::new(blog).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let mut written = Vec::with_capacity(posts.len());
    let mut failed = Vec::new();
    let mut slugs = HashSet::new();

    for post in &posts {
        if !slugs.insert(post.slug()) {
            tracing::error!(
                "Duplicate slug {:?} in {:?}, page already generated",
                post.slug(),
                post.source
            );
            failed.push(post.slug().to_string());
            continue;
        }

        let page = match render_post(&layout, post) {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Failed to render {:?}: {}", post.source, e);
                failed.push(post.slug().to_string());
                continue;
            }
        };

        let output_path = output_path(&blog.public_dir, post.slug());
        match write_page(&output_path, &page.html) {
            Ok(()) => {
                tracing::debug!("Generated post: {:?}", output_path);
                written.push(output_path);
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                failed.push(post.slug().to_string());
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "Failed to build {} of {} posts: {}",
            failed.len(),
            posts.len(),
            failed.join(", ")
        );
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(BuildSummary { written })
}

/// Run one post through the layout
pub fn render_post(layout: &PostLayout<'_>, post: &Post) -> Result<RenderedPage, LayoutError> {
    layout.configure(post.props.clone())?.render(&post.content)
}

/// Where a post's page is written
pub fn output_path(public_dir: &Path, slug: &str) -> PathBuf {
    public_dir
        .join("posts")
        .join(slug.trim_start_matches('/'))
        .join("index.html")
}

pub(crate) fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::write_blog;

    #[test]
    fn test_build_writes_every_post() {
        let dir = tempfile::tempdir().unwrap();
        write_blog(dir.path());
        let blog = Blog::new(dir.path()).unwrap();

        let summary = blog.build().unwrap();
        assert_eq!(summary.written.len(), 2);

        let hello = fs::read_to_string(dir.path().join("public/posts/hello/index.html")).unwrap();
        assert!(hello.contains(
            r#"<link rel="canonical" href="https://blog.example.com/posts/hello">"#
        ));
        assert!(hello.contains("<strong>world</strong>"));
        assert!(hello.contains(r#"<span class="author">Jane Doe</span>"#));
        assert!(hello.contains(r#"<meta name="twitter:site" content="@example">"#));

        let second =
            fs::read_to_string(dir.path().join("public/posts/second/index.html")).unwrap();
        assert!(second.contains(">Web</a>"));
        assert!(second.contains("Richard Roe"));
    }

    #[test]
    fn test_build_fails_on_unknown_ids_but_writes_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        write_blog(dir.path());
        fs::write(
            dir.path().join("content/posts/ghost.md"),
            "---\ntitle: Ghost\ndate: 2020-05-01\ntags: [zig]\nauthor: jdoe\n---\nBoo.\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let err = blog.build().unwrap_err();
        assert!(err.to_string().contains("ghost"));
        assert!(dir.path().join("public/posts/hello/index.html").exists());
        assert!(!dir.path().join("public/posts/ghost/index.html").exists());
    }

    #[test]
    fn test_build_fails_on_duplicate_slug_and_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        write_blog(dir.path());
        fs::write(
            dir.path().join("content/posts/zzz.md"),
            "---\ntitle: Older Hello\ndate: 2019-01-01\nslug: hello\nauthor: jdoe\n---\nOld.\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let err = blog.build().unwrap_err();
        assert!(err.to_string().contains("Failed to build 1 of 3 posts: hello"));

        let hello = fs::read_to_string(dir.path().join("public/posts/hello/index.html")).unwrap();
        assert!(hello.contains("<strong>world</strong>"));
        assert!(!hello.contains("Older Hello"));
        assert!(dir.path().join("public/posts/second/index.html").exists());
    }

    #[test]
    fn test_build_continues_past_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_blog(dir.path());
        // a file where the post directory should go
        fs::create_dir_all(dir.path().join("public/posts")).unwrap();
        fs::write(dir.path().join("public/posts/hello"), "not a dir").unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let err = blog.build().unwrap_err();
        assert!(err.to_string().contains("Failed to build 1 of 2 posts: hello"));
        assert!(dir.path().join("public/posts/second/index.html").exists());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("public"), "hello"),
            PathBuf::from("public/posts/hello/index.html")
        );
    }
}
