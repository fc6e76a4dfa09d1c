//! Data models for the PressPDF server

use chrono::{DateTime, Utc};
use presspdf_core::{ContentItem, ContentKind};
use serde::Serialize;
use sqlx::FromRow;

/// Content item row as stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbItem {
    pub id: i64,
    pub kind: String,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub builder_body: Option<String>,
    pub status: String,
    pub published_at: DateTime<Utc>,
}

impl DbItem {
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }

    pub fn into_content_item(self) -> ContentItem {
        ContentItem {
            id: self.id,
            kind: parse_kind(&self.kind),
            slug: self.slug,
            title: self.title,
            body: self.body,
            builder_body: self.builder_body,
            published_at: self.published_at,
        }
    }
}

fn parse_kind(kind: &str) -> ContentKind {
    match kind {
        "page" => ContentKind::Page,
        _ => ContentKind::Post,
    }
}

/// Listing entry for archive and home views
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemSummary {
    pub kind: String,
    pub slug: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(kind: &str, status: &str) -> DbItem {
        DbItem {
            id: 1,
            kind: kind.to_string(),
            slug: "s".to_string(),
            title: "T".to_string(),
            body: String::new(),
            builder_body: None,
            status: status.to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn kind_parsing() {
        assert_eq!(row("page", "published").into_content_item().kind, ContentKind::Page);
        assert_eq!(row("post", "published").into_content_item().kind, ContentKind::Post);
        // Unknown kinds default to post
        assert_eq!(row("widget", "published").into_content_item().kind, ContentKind::Post);
    }

    #[test]
    fn published_check() {
        assert!(row("post", "published").is_published());
        assert!(!row("post", "draft").is_published());
    }
}
