//! # Middleware
//!
//! Tower layers applied to the whole router:
//!
//! - `tracing_layer` — request/response spans via `tower_http::trace`.
//! - `cors` — permissive CORS so a separately served front end can call the API.

pub mod cors;
pub mod tracing_layer;
