//! Post front-matter parsing

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::helpers::parse_date;
use crate::layout::PostProps;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a post file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub author: Option<String>,
}

impl FrontMatter {
    /// Parse YAML front-matter delimited by `---` lines
    ///
    /// Returns (front_matter, remaining_content). Content without a leading
    /// `---` has no front-matter.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();
        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // closing delimiter may sit on the very first line when the block is empty
        let (yaml, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end = rest
                .find("\n---")
                .ok_or_else(|| anyhow!("Unterminated front-matter block"))?;
            (&rest[..end], &rest[end + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter =
            serde_yaml::from_str(yaml).context("Failed to parse YAML front-matter")?;
        Ok((fm, remaining))
    }

    /// Turn the front-matter into layout props
    ///
    /// `default_slug` is used when no slug is given, normally the file stem.
    pub fn into_props(self, default_slug: &str) -> Result<PostProps> {
        let title = self.title.ok_or_else(|| anyhow!("Missing `title`"))?;
        let raw_date = self.date.ok_or_else(|| anyhow!("Missing `date`"))?;
        let date = parse_date(&raw_date).ok_or_else(|| anyhow!("Invalid `date`: {}", raw_date))?;
        let author = self.author.ok_or_else(|| anyhow!("Missing `author`"))?;

        Ok(PostProps {
            title,
            date,
            slug: self.slug.unwrap_or_else(|| default_slug.to_string()),
            description: self.description.unwrap_or_default(),
            tags: self.tags,
            author,
        })
    }
}
