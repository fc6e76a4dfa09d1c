//! HTML-to-PDF rendering engine wrapper
//!
//! Wraps the `printpdf` HTML pipeline behind a small configuration
//! surface and an async render call with a wall-clock ceiling:
//! - `EngineOptions`: parser/asset/font/paper configuration
//! - asset collection with remote fetching and a filesystem root
//!   restriction for local references
//! - `render_html`: blocking-thread render bounded by a timeout

pub mod assets;
pub mod error;
pub mod options;
pub mod render;

pub use error::EngineError;
pub use options::{EngineOptions, MediaType, Orientation, PaperSize};
pub use render::{render_html, RenderRequest, RenderedPdf};
