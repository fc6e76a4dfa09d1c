//! Content items and site configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Page,
}

impl ContentKind {
    /// URL path segment for this kind
    pub fn route_segment(&self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Page => "pages",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Post => write!(f, "post"),
            ContentKind::Page => write!(f, "page"),
        }
    }
}

/// A single post or page loaded from the content store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub kind: ContentKind,
    pub slug: String,
    pub title: String,
    /// Raw stored body markup, before content filters
    pub body: String,
    /// Pre-rendered page builder output, when the builder produced any
    pub builder_body: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    /// Canonical URL of this item on the site
    pub fn permalink(&self, site: &SiteConfig) -> String {
        format!(
            "{}/{}/{}",
            site.base_url.trim_end_matches('/'),
            self.kind.route_segment(),
            self.slug
        )
    }
}

/// Site-wide configuration used for page and document assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub charset: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "PressPDF".to_string(),
            base_url: "http://localhost:3000".to_string(),
            language: "en-US".to_string(),
            charset: "UTF-8".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(kind: ContentKind, slug: &str) -> ContentItem {
        ContentItem {
            id: 1,
            kind,
            slug: slug.to_string(),
            title: "Title".to_string(),
            body: String::new(),
            builder_body: None,
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn permalink_for_post() {
        let site = SiteConfig {
            base_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            item(ContentKind::Post, "hello-world").permalink(&site),
            "https://example.com/posts/hello-world"
        );
    }

    #[test]
    fn permalink_strips_trailing_slash_from_base() {
        let site = SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            item(ContentKind::Page, "about").permalink(&site),
            "https://example.com/pages/about"
        );
    }
}
