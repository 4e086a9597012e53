//! Post model

use serde::Serialize;
use std::path::PathBuf;

use crate::layout::PostProps;

/// A blog post loaded from disk
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Metadata handed to the layout
    pub props: PostProps,

    /// Rendered HTML body
    pub content: String,

    /// Source file path
    pub source: PathBuf,
}

impl Post {
    pub fn slug(&self) -> &str {
        &self.props.slug
    }
}
