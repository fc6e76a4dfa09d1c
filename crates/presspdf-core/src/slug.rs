//! Title slugs and attachment filenames

use chrono::NaiveDate;

/// Slug stem used when a title contains no usable characters
const FALLBACK_STEM: &str = "document";

/// Turn a title into a URL/filename-safe slug.
///
/// Lowercases, maps every run of non-alphanumeric characters to a single
/// hyphen, and trims hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Attachment filename for an export: `<slug>-<YYYY-MM-DD>.pdf`
pub fn attachment_filename(title: &str, date: NaiveDate) -> String {
    let slug = slugify(title);
    let stem = if slug.is_empty() { FALLBACK_STEM } else { &slug };
    format!("{}-{}.pdf", stem, date.format("%Y-%m-%d"))
}
