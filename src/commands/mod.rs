//! CLI commands

pub mod build;
pub mod clean;
pub mod list;
pub mod render;

#[cfg(test)]
pub(crate) mod fixture {
    use std::fs;
    use std::path::Path;

    /// Blog with two authors, three tags and two valid posts
    pub fn write_blog(root: &Path) {
        fs::create_dir_all(root.join("meta")).unwrap();
        fs::create_dir_all(root.join("content/posts")).unwrap();
        fs::write(
            root.join("config.yml"),
            "base_url: https://blog.example.com\nsite_title: Example Blog\ntwitter_account: example\n",
        )
        .unwrap();
        fs::write(
            root.join("meta/authors.yml"),
            "authors:\n  - slug: jdoe\n    name: Jane Doe\n  - slug: rroe\n    name: Richard Roe\n",
        )
        .unwrap();
        fs::write(
            root.join("meta/tags.yml"),
            "tags:\n  - slug: go\n    name: Go\n  - slug: rust\n    name: Rust\n  - slug: web\n    name: Web\n",
        )
        .unwrap();
        fs::write(
            root.join("content/posts/hello.md"),
            "---\ntitle: Hello\ndate: 2020-03-16\nslug: hello\ndescription: First post\ntags: [go, rust]\nauthor: jdoe\n---\nHello **world**.\n",
        )
        .unwrap();
        fs::write(
            root.join("content/posts/second.md"),
            "---\ntitle: Second\ndate: 2020-04-01\ntags: web\nauthor: rroe\n---\nMore.\n",
        )
        .unwrap();
    }
}
