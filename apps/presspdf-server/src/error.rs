//! Error types for the PressPDF server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use print_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("PDF generation is only available for single posts or pages")]
    NotSingular,

    #[error("render error: {0}")]
    Render(#[from] EngineError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ItemNotFound(slug) => {
                (StatusCode::NOT_FOUND, format!("Not found: {}", slug))
            }
            ApiError::NotSingular => (
                StatusCode::BAD_REQUEST,
                "PDF generation is only available for single posts or pages.".to_string(),
            ),
            ApiError::Render(e) => {
                tracing::error!("pdf render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error rendering PDF. Please try again later.".to_string(),
                )
            }
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
