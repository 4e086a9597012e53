//! Errors raised while laying out a post

use thiserror::Error;

/// Layout error types
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unknown author id: {id}")]
    UnknownAuthor { id: String },

    #[error("Unknown tag ids: {}", .ids.join(", "))]
    UnknownTags { ids: Vec<String> },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON-LD serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
