//! Tag records and the registry loaded from `meta/tags.yml`

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::TagLookup;

/// A tag a post can carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub slug: String,
    pub name: String,
}

impl Tag {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TagsFile {
    #[serde(default)]
    tags: Vec<Tag>,
}

/// Tags keyed by slug, in file order
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: IndexMap<String, Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tags from a YAML file
    ///
    /// A missing file gives an empty registry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Tags file {:?} not found, no tags loaded", path);
            return Ok(Self::new());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read tags {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid tags file {:?}", path))
    }

    /// Parse the `tags:` document
    pub fn parse(content: &str) -> Result<Self> {
        let file: TagsFile = serde_yaml::from_str(content)?;
        let mut registry = Self::new();
        for tag in file.tags {
            if registry.tags.contains_key(&tag.slug) {
                bail!("Duplicate tag slug: {}", tag.slug);
            }
            registry.tags.insert(tag.slug.clone(), tag);
        }
        tracing::debug!("Loaded {} tags", registry.len());
        Ok(registry)
    }

    pub fn insert(&mut self, tag: Tag) -> Option<Tag> {
        self.tags.insert(tag.slug.clone(), tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Tag> for TagRegistry {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut registry = Self::new();
        for tag in iter {
            registry.insert(tag);
        }
        registry
    }
}

impl TagLookup for TagRegistry {
    fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }
}
