//! Body-source resolution for export
//!
//! An item's export body comes from one of two places: the page builder's
//! pre-rendered output (when the builder integration is enabled and the
//! item has any), or the raw stored body run through the content filter
//! pipeline. Resolution is a pure function of the item and the builder
//! flag; it never touches the page output path.

use serde::Serialize;

use crate::content::ContentItem;
use crate::filters::apply_content_filters;

/// Which source supplied the resolved body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySource {
    PageBuilder,
    RawFiltered,
}

/// Body HTML chosen for an export, with its source marker
#[derive(Debug, Clone)]
pub struct ResolvedBody {
    pub source: BodySource,
    pub html: String,
}

/// Resolve the body to export for `item`.
///
/// Builder output wins when the integration is enabled and the stored
/// output is non-empty. An empty builder body falls back to the filtered
/// raw body without distinguishing "builder never ran" from "builder
/// produced nothing".
pub fn resolve_body(item: &ContentItem, builder_enabled: bool) -> ResolvedBody {
    if builder_enabled {
        if let Some(builder) = &item.builder_body {
            if !builder.trim().is_empty() {
                return ResolvedBody {
                    source: BodySource::PageBuilder,
                    html: builder.clone(),
                };
            }
        }
    }

    ResolvedBody {
        source: BodySource::RawFiltered,
        html: apply_content_filters(&item.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use chrono::{TimeZone, Utc};

    fn item(body: &str, builder_body: Option<&str>) -> ContentItem {
        ContentItem {
            id: 7,
            kind: ContentKind::Post,
            slug: "test".to_string(),
            title: "Test".to_string(),
            body: body.to_string(),
            builder_body: builder_body.map(str::to_string),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn builder_output_preferred_when_enabled() {
        let it = item("raw text", Some("<section class=\"builder-section\">x</section>"));
        let resolved = resolve_body(&it, true);
        assert_eq!(resolved.source, BodySource::PageBuilder);
        assert_eq!(resolved.html, "<section class=\"builder-section\">x</section>");
    }

    #[test]
    fn builder_ignored_when_disabled() {
        let it = item("raw text", Some("<section>x</section>"));
        let resolved = resolve_body(&it, false);
        assert_eq!(resolved.source, BodySource::RawFiltered);
        assert_eq!(resolved.html, "<p>raw text</p>");
    }

    #[test]
    fn empty_builder_output_falls_back_to_raw() {
        let it = item("raw text", Some("   \n  "));
        let resolved = resolve_body(&it, true);
        assert_eq!(resolved.source, BodySource::RawFiltered);
        assert_eq!(resolved.html, "<p>raw text</p>");
    }

    #[test]
    fn missing_builder_output_falls_back_to_raw() {
        let it = item("raw text", None);
        let resolved = resolve_body(&it, true);
        assert_eq!(resolved.source, BodySource::RawFiltered);
    }

    #[test]
    fn fallback_applies_content_filters() {
        let it = item("one\n\ntwo", None);
        let resolved = resolve_body(&it, true);
        assert_eq!(resolved.html, "<p>one</p>\n<p>two</p>");
    }
}
