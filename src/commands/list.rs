//! List site content

use anyhow::{bail, Result};
use std::fmt::Write;

use crate::content::loader::PostLoader;
use crate::lookup::{AuthorLookup, TagLookup};
use crate::Blog;

/// Print site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    print!("{}", listing(blog, content_type)?);
    Ok(())
}

/// Format site content by type
pub fn listing(blog: &Blog, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = PostLoader::new(blog).load_posts()?;
            let authors = blog.load_authors()?;
            let tags = blog.load_tags()?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                let author = authors
                    .author(&post.props.author)
                    .map(|a| a.name.as_str())
                    .unwrap_or("?");
                let tag_names: Vec<&str> = post
                    .props
                    .tags
                    .iter()
                    .map(|id| tags.tag(id).map(|t| t.name.as_str()).unwrap_or("?"))
                    .collect();
                writeln!(
                    out,
                    "  {} - {} [{}] by {} ({})",
                    post.props.date.format("%Y-%m-%d"),
                    post.props.title,
                    post.slug(),
                    author,
                    tag_names.join(", ")
                )?;
            }
        }
        "author" | "authors" => {
            let authors = blog.load_authors()?;
            writeln!(out, "Authors ({}):", authors.len())?;
            for author in authors.iter() {
                writeln!(out, "  {} - {}", author.slug, author.name)?;
            }
        }
        "tag" | "tags" => {
            let tags = blog.load_tags()?;
            writeln!(out, "Tags ({}):", tags.len())?;
            for tag in tags.iter() {
                writeln!(out, "  {} - {}", tag.slug, tag.name)?;
            }
        }
        other => bail!("Unknown content type: {} (expected posts, authors or tags)", other),
    }

    Ok(out)
}
