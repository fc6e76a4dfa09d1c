//! Engine configuration

use std::path::PathBuf;

/// Media type the engine renders for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Print,
    Screen,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Print => write!(f, "print"),
            MediaType::Screen => write!(f, "screen"),
        }
    }
}

/// Supported paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl PaperSize {
    /// Page dimensions in millimeters for the given orientation
    pub fn dimensions_mm(&self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = match self {
            PaperSize::A4 => (210.0, 297.0),
        };
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Rendering engine configuration.
///
/// `html5_parsing`, `media_type`, and `font_subsetting` document backend
/// behavior that is not switchable per render (the HTML pipeline always
/// parses HTML5, lays out for print, and embeds subset fonts); the
/// remaining fields drive asset collection and PDF generation directly.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// HTML5-mode parsing
    pub html5_parsing: bool,
    /// Fetch http(s) image references while collecting assets
    pub remote_assets: bool,
    /// Fallback font injected when the document declares none
    pub default_font: String,
    /// Embed only the glyphs the document uses
    pub font_subsetting: bool,
    /// Media type used for layout
    pub media_type: MediaType,
    /// Root directory local asset references may resolve under. Local
    /// references are refused entirely when unset.
    pub asset_root: Option<PathBuf>,
    pub paper: PaperSize,
    pub orientation: Orientation,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            html5_parsing: true,
            remote_assets: true,
            default_font: "Helvetica".to_string(),
            font_subsetting: true,
            media_type: MediaType::Print,
            asset_root: None,
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}
