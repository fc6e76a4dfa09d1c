//! Content filter pipeline
//!
//! Raw stored bodies are plain prose with optional embedded markup. Before
//! a raw body is served or exported it passes through the same filters the
//! site applies when rendering a page: paragraph wrapping of prose blocks,
//! leaving existing block-level markup untouched.

/// Block-level tags that must not be wrapped in paragraphs
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li",
    "table", "thead", "tbody", "tr", "td", "th", "blockquote", "pre", "figure", "figcaption",
    "hr", "header", "footer", "nav", "aside",
];

/// Apply the content filter pipeline to a raw stored body.
///
/// Blocks are separated by blank lines. A block that already starts with a
/// block-level tag is passed through verbatim; anything else is wrapped in
/// `<p>` with single newlines becoming `<br>`.
pub fn apply_content_filters(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let mut out = String::with_capacity(normalized.len() + 64);

    for block in normalized.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        if starts_with_block_tag(block) {
            out.push_str(block);
        } else {
            out.push_str("<p>");
            out.push_str(&block.replace('\n', "<br>\n"));
            out.push_str("</p>");
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}

fn starts_with_block_tag(block: &str) -> bool {
    let rest = match block.strip_prefix('<') {
        Some(rest) => rest,
        None => return false,
    };
    let tag: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    BLOCK_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_prose_in_paragraphs() {
        let out = apply_content_filters("First paragraph.\n\nSecond paragraph.");
        assert_eq!(out, "<p>First paragraph.</p>\n<p>Second paragraph.</p>");
    }

    #[test]
    fn single_newlines_become_line_breaks() {
        let out = apply_content_filters("line one\nline two");
        assert_eq!(out, "<p>line one<br>\nline two</p>");
    }

    #[test]
    fn block_markup_passes_through() {
        let raw = "<h2>Heading</h2>\n\nSome text.\n\n<ul><li>a</li></ul>";
        let out = apply_content_filters(raw);
        assert_eq!(out, "<h2>Heading</h2>\n<p>Some text.</p>\n<ul><li>a</li></ul>");
    }

    #[test]
    fn inline_markup_is_wrapped() {
        let out = apply_content_filters("Some <em>emphatic</em> text.");
        assert_eq!(out, "<p>Some <em>emphatic</em> text.</p>");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(apply_content_filters(""), "");
        assert_eq!(apply_content_filters("\n\n\n"), "");
    }

    #[test]
    fn windows_line_endings_normalized() {
        let out = apply_content_filters("one\r\n\r\ntwo");
        assert_eq!(out, "<p>one</p>\n<p>two</p>");
    }
}
