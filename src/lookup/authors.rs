//! Author records and the registry loaded from `meta/authors.yml`

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::AuthorLookup;

/// A post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
}

impl Author {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            introduction: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorsFile {
    #[serde(default)]
    authors: Vec<Author>,
}

/// Authors keyed by slug, in file order
#[derive(Debug, Clone, Default)]
pub struct AuthorRegistry {
    authors: IndexMap<String, Author>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load authors from a YAML file
    ///
    /// A missing file gives an empty registry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Authors file {:?} not found, no authors loaded", path);
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read authors {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid authors file {:?}", path))
    }

    /// Parse the `authors:` document
    pub fn parse(content: &str) -> Result<Self> {
        let file: AuthorsFile = serde_yaml::from_str(content)?;
        let mut registry = Self::new();
        for author in file.authors {
            if registry.authors.contains_key(&author.slug) {
                bail!("Duplicate author slug: {}", author.slug);
            }
            registry.authors.insert(author.slug.clone(), author);
        }
        tracing::debug!("Loaded {} authors", registry.len());
        Ok(registry)
    }

    pub fn insert(&mut self, author: Author) -> Option<Author> {
        self.authors.insert(author.slug.clone(), author)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

impl FromIterator<Author> for AuthorRegistry {
    fn from_iter<I: IntoIterator<Item = Author>>(iter: I) -> Self {
        let mut registry = Self::new();
        for author in iter {
            registry.insert(author);
        }
        registry
    }
}

impl AuthorLookup for AuthorRegistry {
    fn author(&self, id: &str) -> Option<&Author> {
        self.authors.get(id)
    }
}
