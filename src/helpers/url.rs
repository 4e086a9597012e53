//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Path prefix every post page lives under
pub const POST_PATH_PREFIX: &str = "/posts/";

/// Path prefix of the per-tag listing pages
pub const TAG_PATH_PREFIX: &str = "/posts/tags/";

/// Characters escaped in a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Site-relative path of a post
///
/// The slug is appended verbatim.
///
/// # Examples
/// ```ignore
/// post_path("hello-world") // -> "/posts/hello-world"
/// ```
pub fn post_path(slug: &str) -> String {
    format!("{}{}", POST_PATH_PREFIX, slug)
}

/// Site-relative path of a tag listing page
pub fn tag_path(slug: &str) -> String {
    format!("{}{}", TAG_PATH_PREFIX, encode_segment(slug))
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/posts/a") // -> "https://example.com/posts/a"
/// ```
pub fn full_url_for(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_path() {
        assert_eq!(post_path("hello-world"), "/posts/hello-world");
    }

    #[test]
    fn test_tag_path_encodes() {
        assert_eq!(tag_path("rust"), "/posts/tags/rust");
        assert_eq!(tag_path("c sharp"), "/posts/tags/c%20sharp");
        assert_eq!(tag_path("a/b"), "/posts/tags/a%2Fb");
    }

    #[test]
    fn test_full_url_for() {
        assert_eq!(
            full_url_for("https://example.com/", "/posts/a"),
            "https://example.com/posts/a"
        );
        assert_eq!(
            full_url_for("https://example.com", "og_image.png"),
            "https://example.com/og_image.png"
        );
        assert_eq!(full_url_for("https://example.com/", ""), "https://example.com");
    }
}
