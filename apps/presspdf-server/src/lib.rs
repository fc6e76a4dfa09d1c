//! PressPDF server library
//!
//! The binary in `main.rs` is a thin wrapper; the router and its
//! collaborators live here so integration tests can drive the service
//! in-process.

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Listing views
        .route("/", get(handlers::show_home))
        .route("/posts", get(handlers::list_posts))
        // Single-item views (and the PDF export gate)
        .route("/posts/:slug", get(handlers::show_post))
        .route("/pages/:slug", get(handlers::show_page))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
