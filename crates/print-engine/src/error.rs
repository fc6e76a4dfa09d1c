//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("render failed: {0}")]
    Render(String),

    #[error("render timeout after {0}ms")]
    Timeout(u64),

    #[error("render task panicked: {0}")]
    TaskPanic(String),

    #[error("failed to fetch remote asset '{0}': {1}")]
    AssetFetch(String, String),

    #[error("path security violation: {0}")]
    PathViolation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
