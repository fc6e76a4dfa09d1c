//! HTML views for normal page rendering
//!
//! Minimal site chrome for the pass-through path. Interpolated values are
//! escaped; resolved item bodies are inserted as markup, same as in the
//! print document.

use html_escape::encode_text;
use presspdf_core::{ContentItem, SiteConfig};

use crate::models::ItemSummary;

/// Render a single post or page view.
pub fn item_page(item: &ContentItem, body: &str, site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="{charset}">
<title>{title} — {site_name}</title>
</head>
<body>
<header><a href="/">{site_name}</a></header>
<article>
<h1>{title}</h1>
{body}
</article>
<footer><a href="?generate_pdf=true">Download PDF</a></footer>
</body>
</html>
"#,
        lang = html_escape::encode_double_quoted_attribute(&site.language),
        charset = html_escape::encode_double_quoted_attribute(&site.charset),
        title = encode_text(&item.title),
        site_name = encode_text(&site.name),
        body = body,
    )
}

/// Render a listing view.
pub fn listing_page(heading: &str, items: &[ItemSummary], site: &SiteConfig) -> String {
    let mut entries = String::new();
    for item in items {
        entries.push_str(&format!(
            "<li><a href=\"/{kind}/{slug}\">{title}</a> <small>{date}</small></li>\n",
            kind = if item.kind == "page" { "pages" } else { "posts" },
            slug = encode_text(&item.slug),
            title = encode_text(&item.title),
            date = item.published_at.format("%Y-%m-%d"),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="{charset}">
<title>{heading} — {site_name}</title>
</head>
<body>
<header><a href="/">{site_name}</a></header>
<h1>{heading}</h1>
<ul>
{entries}</ul>
</body>
</html>
"#,
        lang = html_escape::encode_double_quoted_attribute(&site.language),
        charset = html_escape::encode_double_quoted_attribute(&site.charset),
        heading = encode_text(heading),
        site_name = encode_text(&site.name),
        entries = entries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use presspdf_core::ContentKind;

    #[test]
    fn item_page_escapes_title() {
        let item = ContentItem {
            id: 1,
            kind: ContentKind::Post,
            slug: "x".to_string(),
            title: "<script>".to_string(),
            body: String::new(),
            builder_body: None,
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        };
        let html = item_page(&item, "<p>ok</p>", &SiteConfig::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>ok</p>"));
    }

    #[test]
    fn item_page_links_pdf_download() {
        let item = ContentItem {
            id: 1,
            kind: ContentKind::Page,
            slug: "about".to_string(),
            title: "About".to_string(),
            body: String::new(),
            builder_body: None,
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        };
        let html = item_page(&item, "", &SiteConfig::default());
        assert!(html.contains("?generate_pdf=true"));
    }

    #[test]
    fn listing_links_by_kind() {
        let items = vec![
            ItemSummary {
                kind: "post".to_string(),
                slug: "a".to_string(),
                title: "A".to_string(),
                published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            },
            ItemSummary {
                kind: "page".to_string(),
                slug: "b".to_string(),
                title: "B".to_string(),
                published_at: Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap(),
            },
        ];
        let html = listing_page("All content", &items, &SiteConfig::default());
        assert!(html.contains("href=\"/posts/a\""));
        assert!(html.contains("href=\"/pages/b\""));
    }
}
