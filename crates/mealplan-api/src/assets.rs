//! # Static Bundle Fallback
//!
//! When a prebuilt front-end bundle directory exists, every path no other
//! route claims is served from it. Paths with no matching file get the
//! bundle's `index.html` so client-side routing works.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Attach the static fallback to `router` if `dir` is an existing directory.
pub fn attach(router: Router<AppState>, dir: Option<&Path>) -> Router<AppState> {
    match dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "serving static bundle");
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "no static bundle found");
            router
        }
        None => router,
    }
}
