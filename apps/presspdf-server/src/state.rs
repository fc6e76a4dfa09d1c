//! Application state for the PressPDF server

use std::path::PathBuf;

use anyhow::Result;
use presspdf_core::SiteConfig;
use print_engine::EngineOptions;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct AppState {
    pub db: SqlitePool,
    pub site: SiteConfig,
    pub engine: EngineOptions,
    pub render_timeout_ms: u64,
    /// Page builder integration toggle; when off, stored builder output
    /// is ignored and exports always use filtered raw bodies
    pub builder_enabled: bool,
}

impl AppState {
    pub async fn new(render_timeout_ms: u64) -> Result<Self> {
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:presspdf.db?mode=rwc".to_string());
        Self::connect(&db_url, render_timeout_ms).await
    }

    /// Connect to an explicit database URL. Used by `new` and by tests.
    pub async fn connect(db_url: &str, render_timeout_ms: u64) -> Result<Self> {
        tracing::info!("Connecting to database: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self {
            db: pool,
            site: site_config_from_env(),
            engine: engine_options_from_env(),
            render_timeout_ms,
            builder_enabled: env_flag("BUILDER_ENABLED", true),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                kind TEXT NOT NULL DEFAULT 'post',
                slug TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                body TEXT NOT NULL DEFAULT '',
                builder_body TEXT,
                status TEXT NOT NULL DEFAULT 'published',
                published_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Index for listing views
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_items_kind_status ON items(kind, status)
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}

fn site_config_from_env() -> SiteConfig {
    let defaults = SiteConfig::default();
    SiteConfig {
        name: std::env::var("SITE_NAME").unwrap_or(defaults.name),
        base_url: std::env::var("SITE_BASE_URL").unwrap_or(defaults.base_url),
        language: std::env::var("SITE_LANGUAGE").unwrap_or(defaults.language),
        charset: std::env::var("SITE_CHARSET").unwrap_or(defaults.charset),
    }
}

fn engine_options_from_env() -> EngineOptions {
    let asset_root = std::env::var("ASSET_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"));

    EngineOptions {
        asset_root: Some(asset_root),
        ..EngineOptions::default()
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
