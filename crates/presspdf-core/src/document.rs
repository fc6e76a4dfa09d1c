//! Print document assembly
//!
//! Builds the complete HTML document handed to the render engine: doctype,
//! site language and charset, escaped title, the embedded print
//! stylesheet, the item heading, the resolved body, and a generation
//! footer. The body is the only value inserted as markup; every other
//! interpolated value is escaped.

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::content::{ContentItem, SiteConfig};
use crate::stylesheet::PRINT_STYLESHEET;

/// Assemble the print-ready HTML document for one item.
///
/// `body` is the already-resolved body HTML (builder output or filtered
/// raw content); `generated_at` stamps the footer.
pub fn assemble_document(
    item: &ContentItem,
    body: &str,
    site: &SiteConfig,
    generated_at: DateTime<Utc>,
) -> String {
    let title = encode_text(&item.title);
    let date = generated_at.format("%B %-d, %Y").to_string();
    let permalink = item.permalink(site);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="{charset}">
<title>{title}</title>
<style>
{stylesheet}</style>
</head>
<body>
<h1>{title}</h1>
{body}
<div class="footer">
<p>Generated on {date} from {site_name}</p>
<p>{permalink}</p>
</div>
</body>
</html>
"#,
        lang = encode_double_quoted_attribute(&site.language),
        charset = encode_double_quoted_attribute(&site.charset),
        title = title,
        stylesheet = PRINT_STYLESHEET,
        body = body,
        date = encode_text(&date),
        site_name = encode_text(&site.name),
        permalink = encode_text(&permalink),
    )
}
