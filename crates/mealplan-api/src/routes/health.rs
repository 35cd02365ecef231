//! Health probes. Mounted without any request validation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// Liveness probe. 200 whenever the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 when the document loads, 503 otherwise.
async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.load() {
        Ok(_) => (StatusCode::OK, "ready"),
        Err(err) => {
            tracing::warn!(store = %state.store_location(), error = %err, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
        }
    }
}
