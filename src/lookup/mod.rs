//! Author and tag lookups
//!
//! The layout never reaches for global state: it resolves ids through the
//! [`AuthorLookup`] and [`TagLookup`] it was constructed with. The registries
//! in this module are the file-backed implementations used by the CLI.

mod authors;
mod tags;

pub use authors::{Author, AuthorRegistry};
pub use tags::{Tag, TagRegistry};

/// Resolves an author id to its record
pub trait AuthorLookup: Send + Sync {
    fn author(&self, id: &str) -> Option<&Author>;
}

/// Resolves a tag id to its record
pub trait TagLookup: Send + Sync {
    fn tag(&self, id: &str) -> Option<&Tag>;
}
