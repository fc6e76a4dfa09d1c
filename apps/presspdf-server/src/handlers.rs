//! HTTP handlers for the PressPDF server
//!
//! Every content route passes the export gate: a request carrying
//! `generate_pdf=true` on a single-item route becomes a PDF download;
//! the same trigger on a listing route is refused; everything else is
//! normal page rendering.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use presspdf_core::{
    assemble_document, attachment_filename, resolve_body, ContentItem, ContentKind,
};
use print_engine::{render_html, RenderRequest};

use crate::error::ApiError;
use crate::models::{DbItem, ItemSummary};
use crate::state::AppState;
use crate::views;

const PDF_TRIGGER_PARAM: &str = "generate_pdf";
const PDF_TRIGGER_VALUE: &str = "true";

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Handler: GET /
pub async fn show_home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    if pdf_requested(&params) {
        return Err(ApiError::NotSingular);
    }

    let items = fetch_summaries(&state, None).await?;
    Ok(Html(views::listing_page("Latest content", &items, &state.site)).into_response())
}

/// Handler: GET /posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    if pdf_requested(&params) {
        return Err(ApiError::NotSingular);
    }

    let items = fetch_summaries(&state, Some(ContentKind::Post)).await?;
    Ok(Html(views::listing_page("Posts", &items, &state.site)).into_response())
}

/// Handler: GET /posts/:slug
pub async fn show_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    show_item(&state, ContentKind::Post, &slug, &params).await
}

/// Handler: GET /pages/:slug
pub async fn show_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    show_item(&state, ContentKind::Page, &slug, &params).await
}

/// Trigger check: the parameter must equal the expected value exactly.
fn pdf_requested(params: &HashMap<String, String>) -> bool {
    params.get(PDF_TRIGGER_PARAM).map(String::as_str) == Some(PDF_TRIGGER_VALUE)
}

/// Serve a single content item, as PDF export or normal page.
async fn show_item(
    state: &AppState,
    kind: ContentKind,
    slug: &str,
    params: &HashMap<String, String>,
) -> Result<Response, ApiError> {
    let item = fetch_item(state, kind, slug).await?;

    if pdf_requested(params) {
        export_pdf(state, &item).await
    } else {
        let resolved = resolve_body(&item, state.builder_enabled);
        Ok(Html(views::item_page(&item, &resolved.html, &state.site)).into_response())
    }
}

/// Run the export pipeline for one item and emit the PDF attachment.
async fn export_pdf(state: &AppState, item: &ContentItem) -> Result<Response, ApiError> {
    let resolved = resolve_body(item, state.builder_enabled);
    let now = Utc::now();
    let html = assemble_document(item, &resolved.html, &state.site, now);

    let request = RenderRequest {
        html,
        options: state.engine.clone(),
    };
    let rendered = render_html(request, state.render_timeout_ms).await?;

    if !rendered.warnings.is_empty() {
        warn!(slug = %item.slug, warnings = ?rendered.warnings, "render produced warnings");
    }

    let filename = attachment_filename(&item.title, now.date_naive());

    info!(
        slug = %item.slug,
        source = ?resolved.source,
        pages = rendered.page_count,
        bytes = rendered.bytes.len(),
        "pdf exported"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
            (
                header::CACHE_CONTROL,
                "no-cache, no-store, must-revalidate".to_string(),
            ),
            (header::PRAGMA, "no-cache".to_string()),
            (header::EXPIRES, "0".to_string()),
        ],
        rendered.bytes,
    )
        .into_response())
}

async fn fetch_item(
    state: &AppState,
    kind: ContentKind,
    slug: &str,
) -> Result<ContentItem, ApiError> {
    let row: Option<DbItem> = sqlx::query_as(
        r#"
        SELECT id, kind, slug, title, body, builder_body, status, published_at
        FROM items
        WHERE kind = ? AND slug = ?
        "#,
    )
    .bind(kind.to_string())
    .bind(slug)
    .fetch_optional(&state.db)
    .await?;

    let row = row.ok_or_else(|| ApiError::ItemNotFound(slug.to_string()))?;
    if !row.is_published() {
        return Err(ApiError::ItemNotFound(slug.to_string()));
    }

    Ok(row.into_content_item())
}

async fn fetch_summaries(
    state: &AppState,
    kind: Option<ContentKind>,
) -> Result<Vec<ItemSummary>, ApiError> {
    let rows: Vec<ItemSummary> = match kind {
        Some(kind) => {
            sqlx::query_as(
                r#"
                SELECT kind, slug, title, published_at
                FROM items
                WHERE kind = ? AND status = 'published'
                ORDER BY published_at DESC
                "#,
            )
            .bind(kind.to_string())
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT kind, slug, title, published_at
                FROM items
                WHERE status = 'published'
                ORDER BY published_at DESC
                "#,
            )
            .fetch_all(&state.db)
            .await?
        }
    };

    Ok(rows)
}
