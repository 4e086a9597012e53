//! Site configuration (config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub base_url: String,
    pub site_title: String,
    pub site_description: String,
    pub site_keywords: Vec<String>,
    pub language: String,

    // Social
    pub twitter_account: Option<String>,
    pub github_account: Option<String>,

    // Meta
    /// Default social card image, relative to `base_url`
    pub og_image: String,
    pub favicon: String,
    /// Copyright holder; the site title is used when unset
    pub copyright: Option<String>,

    // Directory
    pub content_dir: String,
    pub meta_dir: String,
    pub public_dir: String,

    // Writing
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://example.com".to_string(),
            site_title: "My Blog".to_string(),
            site_description: String::new(),
            site_keywords: Vec::new(),
            language: "en".to_string(),

            twitter_account: None,
            github_account: None,

            og_image: "/og_image.png".to_string(),
            favicon: "/favicon.ico".to_string(),
            copyright: None,

            content_dir: "content/posts".to_string(),
            meta_dir: "meta".to_string(),
            public_dir: "public".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Holder printed in the copyright line
    pub fn copyright_holder(&self) -> &str {
        self.copyright.as_deref().unwrap_or(&self.site_title)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.og_image, "/og_image.png");
        assert_eq!(config.content_dir, "content/posts");
        assert_eq!(config.copyright_holder(), "My Blog");
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
base_url: https://blog.example.com
site_title: Example Blog
site_keywords:
  - rust
  - web
twitter_account: example
copyright: Jane Doe
highlight:
  enable: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "https://blog.example.com");
        assert_eq!(config.site_keywords, vec!["rust", "web"]);
        assert_eq!(config.twitter_account.as_deref(), Some("example"));
        assert_eq!(config.github_account, None);
        assert_eq!(config.copyright_holder(), "Jane Doe");
        assert!(!config.highlight.enable);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_load_reports_path() {
        let err = SiteConfig::load("/nonexistent/config.yml").unwrap_err();
        assert!(format!("{:#}", err).contains("config.yml"));
    }
}
