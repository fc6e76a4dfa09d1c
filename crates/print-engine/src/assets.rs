//! Asset collection
//!
//! The render engine receives image bytes up front rather than touching
//! the network or filesystem itself. Remote references are fetched over
//! http(s) when enabled; local references resolve strictly under the
//! configured asset root, with traversal rejected.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use lazy_static::lazy_static;
use printpdf::Base64OrRaw;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::options::EngineOptions;

/// Ceiling on a single fetched remote asset
const MAX_REMOTE_ASSET_BYTES: usize = 10 * 1024 * 1024;

/// Wall-clock limit for a single remote fetch
const REMOTE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref IMG_SRC: Regex = Regex::new(r#"<img[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Extract `<img src>` references from an HTML document, in order,
/// without duplicates.
pub fn image_sources(html: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for cap in IMG_SRC.captures_iter(html) {
        let src = cap[1].to_string();
        if !seen.contains(&src) {
            seen.push(src);
        }
    }
    seen
}

/// Collect the image assets referenced by `html` into the engine's image
/// map. Unreachable assets are skipped with a warning; references that
/// escape the asset root fail the render.
pub async fn collect_assets(
    html: &str,
    options: &EngineOptions,
) -> Result<BTreeMap<String, Base64OrRaw>, EngineError> {
    let mut assets = BTreeMap::new();

    for src in image_sources(html) {
        if src.starts_with("data:") {
            continue;
        }

        if src.starts_with("http://") || src.starts_with("https://") {
            if !options.remote_assets {
                debug!(src = %src, "remote assets disabled, skipping");
                continue;
            }
            match fetch_remote(&src).await {
                Ok(bytes) => {
                    assets.insert(src, Base64OrRaw::Raw(bytes));
                }
                Err(e) => warn!(src = %src, "remote asset skipped: {e}"),
            }
            continue;
        }

        let root = options.asset_root.as_deref().ok_or_else(|| {
            EngineError::PathViolation(format!(
                "local asset '{}' referenced but no asset root is configured",
                src
            ))
        })?;
        let path = resolve_local(&src, root)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                assets.insert(src, Base64OrRaw::Raw(bytes));
            }
            Err(e) => warn!(src = %src, path = %path.display(), "local asset skipped: {e}"),
        }
    }

    Ok(assets)
}

/// Fetch one remote asset with a bounded timeout and size.
async fn fetch_remote(src: &str) -> Result<Vec<u8>, EngineError> {
    let client = reqwest::Client::builder()
        .timeout(REMOTE_FETCH_TIMEOUT)
        .build()
        .map_err(|e| EngineError::AssetFetch(src.to_string(), e.to_string()))?;

    let response = client
        .get(src)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| EngineError::AssetFetch(src.to_string(), e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| EngineError::AssetFetch(src.to_string(), e.to_string()))?;

    if bytes.len() > MAX_REMOTE_ASSET_BYTES {
        return Err(EngineError::AssetFetch(
            src.to_string(),
            format!("asset exceeds {} byte limit", MAX_REMOTE_ASSET_BYTES),
        ));
    }

    Ok(bytes.to_vec())
}

/// Resolve a local reference strictly under the asset root.
///
/// A leading `/` is treated as the asset root itself; `..` and path
/// prefixes are rejected outright.
fn resolve_local(src: &str, root: &Path) -> Result<PathBuf, EngineError> {
    let relative = src.trim_start_matches('/');

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(EngineError::PathViolation(format!(
                    "asset path '{}' escapes the asset root",
                    src
                )));
            }
        }
    }

    Ok(root.join(relative))
}
