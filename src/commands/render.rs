//! Render a single post file

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::build::{render_post, write_page};
use crate::content::loader::PostLoader;
use crate::layout::PostLayout;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Render `file` and write the page to `output`, or stdout when unset
pub fn run(blog: &Blog, file: &Path, output: Option<&Path>) -> Result<()> {
    let html = render_file(blog, file)?;

    match output {
        Some(path) => {
            write_page(path, &html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Render one post file to a complete HTML document
pub fn render_file(blog: &Blog, file: &Path) -> Result<String> {
    let authors = blog.load_authors()?;
    let tags = blog.load_tags()?;
    let renderer = TemplateRenderer::new().context("Failed to load templates")?;
    let layout = PostLayout::new(&blog.config, &authors, &tags, &renderer);

    let post = PostLoader::new(blog).load_post(file)?;
    let page =
        render_post(&layout, &post).with_context(|| format!("Failed to render {:?}", file))?;
    Ok(page.html)
}
