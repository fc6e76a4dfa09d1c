//! Render invocation
//!
//! PDF generation is CPU-bound layout work proportional to document size,
//! so it runs on a blocking thread under a wall-clock ceiling. Timeout,
//! task panic, and engine failure are reported as distinct errors.

use std::collections::BTreeMap;
use std::time::Duration;

use printpdf::{Base64OrRaw, GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use tracing::debug;

use crate::assets::collect_assets;
use crate::error::EngineError;
use crate::options::EngineOptions;

/// A request to render one HTML document
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub html: String,
    pub options: EngineOptions,
}

/// A rendered PDF
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub warnings: Vec<String>,
}

/// Render an HTML document to PDF, bounded by `timeout_ms`.
pub async fn render_html(
    request: RenderRequest,
    timeout_ms: u64,
) -> Result<RenderedPdf, EngineError> {
    debug!(
        html5 = request.options.html5_parsing,
        media = %request.options.media_type,
        remote = request.options.remote_assets,
        subsetting = request.options.font_subsetting,
        "engine configuration"
    );

    let images = collect_assets(&request.html, &request.options).await?;

    let result = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(move || render_blocking(request, images)),
    )
    .await;

    match result {
        Ok(Ok(rendered)) => rendered,
        Ok(Err(join_error)) => Err(EngineError::TaskPanic(join_error.to_string())),
        Err(_elapsed) => Err(EngineError::Timeout(timeout_ms)),
    }
}

fn render_blocking(
    request: RenderRequest,
    images: BTreeMap<String, Base64OrRaw>,
) -> Result<RenderedPdf, EngineError> {
    let html = with_default_font(&request.html, &request.options.default_font);
    let (page_width, page_height) = request
        .options
        .paper
        .dimensions_mm(request.options.orientation);

    let pdf_options = GeneratePdfOptions {
        page_width: Some(page_width),
        page_height: Some(page_height),
        ..GeneratePdfOptions::default()
    };

    let fonts = BTreeMap::new();
    let mut warnings = Vec::new();
    let document = PdfDocument::from_html(&html, &images, &fonts, &pdf_options, &mut warnings)
        .map_err(|e| EngineError::Render(e.to_string()))?;

    let page_count = document.pages.len();
    let bytes = document.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(RenderedPdf {
        bytes,
        page_count,
        warnings: warnings.iter().map(|w| format!("{:?}", w)).collect(),
    })
}

/// Inject the fallback font when the document declares none of its own.
fn with_default_font(html: &str, font: &str) -> String {
    if html.contains("font-family") {
        return html.to_string();
    }
    let style = format!("<style>body {{ font-family: {}, sans-serif; }}</style>", font);
    match html.find("</head>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + style.len());
            out.push_str(&html[..idx]);
            out.push_str(&style);
            out.push_str(&html[idx..]);
            out
        }
        None => format!("{}{}", style, html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EngineOptions;

    fn simple_doc(body: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>t</title>\
             <style>body {{ font-family: Helvetica, sans-serif; }}</style>\
             </head><body>{}</body></html>",
            body
        )
    }

    #[tokio::test]
    async fn renders_simple_document() {
        let request = RenderRequest {
            html: simple_doc("<h1>Hello</h1><p>World</p>"),
            options: EngineOptions::default(),
        };

        let rendered = render_html(request, 30_000).await.unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert!(rendered.page_count >= 1);
    }

    #[tokio::test]
    async fn asset_violation_fails_before_rendering() {
        let request = RenderRequest {
            html: simple_doc(r#"<img src="../outside.png">"#),
            options: EngineOptions {
                asset_root: Some(std::env::temp_dir()),
                ..EngineOptions::default()
            },
        };

        let result = render_html(request, 30_000).await;
        assert!(matches!(result, Err(EngineError::PathViolation(_))));
    }

    #[test]
    fn default_font_injected_when_absent() {
        let html = "<html><head></head><body>x</body></html>";
        let out = with_default_font(html, "Helvetica");
        assert!(out.contains("font-family: Helvetica, sans-serif"));
        assert!(out.find("</head>").unwrap() > out.find("<style>").unwrap());
    }

    #[test]
    fn default_font_not_injected_when_declared() {
        let html = simple_doc("x");
        assert_eq!(with_default_font(&html, "Courier"), html);
    }
}
