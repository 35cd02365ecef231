//! CORS policy: any origin, any method, any header.

use tower_http::cors::CorsLayer;

/// Build the CORS layer.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
