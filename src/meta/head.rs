//! Document head collector

use serde::Serialize;

/// One tag destined for the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadEntry {
    /// Dedup key, e.g. `meta:description` or `property:og:url`
    pub key: String,
    /// Rendered tag
    pub html: String,
}

/// Ordered head entries
///
/// Pushing an entry whose key is already present replaces the earlier entry
/// in place, so the last writer wins without moving the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Head {
    entries: Vec<HeadEntry>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, html: impl Into<String>) {
        let key = key.into();
        let html = html.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                tracing::trace!("Replacing head entry {}", key);
                entry.html = html;
            }
            None => self.entries.push(HeadEntry { key, html }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.html.as_str())
    }

    pub fn entries(&self) -> &[HeadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries, one per line
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut head = Head::new();
        head.push("title", "<title>A</title>");
        head.push("meta:description", "<meta name=\"description\" content=\"d\">");
        assert_eq!(head.len(), 2);
        assert_eq!(head.entries()[0].key, "title");
        assert_eq!(head.entries()[1].key, "meta:description");
    }

    #[test]
    fn test_same_key_replaces_in_place() {
        let mut head = Head::new();
        head.push("title", "<title>A</title>");
        head.push("link:canonical", "<link>");
        head.push("title", "<title>B</title>");
        assert_eq!(head.len(), 2);
        assert_eq!(head.entries()[0].html, "<title>B</title>");
        assert_eq!(head.get("title"), Some("<title>B</title>"));
    }

    #[test]
    fn test_to_html() {
        let mut head = Head::new();
        assert!(head.is_empty());
        assert_eq!(head.to_html(), "");
        head.push("a", "<a>");
        head.push("b", "<b>");
        assert_eq!(head.to_html(), "<a>\n<b>");
    }
}
