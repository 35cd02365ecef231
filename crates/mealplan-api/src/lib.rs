//! # mealplan-api — Axum Service for the Weekly Meal Planner
//!
//! Exposes the three collections of the persisted document over JSON and
//! serves the form UI that edits them.
//!
//! ## API Surface
//!
//! | Prefix            | Module                 | Purpose                    |
//! |-------------------|------------------------|----------------------------|
//! | `/api/recipes`    | [`routes::recipes`]    | list / add recipes         |
//! | `/api/plan`       | [`routes::plan`]       | read / replace the plan    |
//! | `/api/grocery`    | [`routes::grocery`]    | read / replace groceries   |
//! | `/`, `/ui/*`      | [`ui`]                 | server-rendered forms      |
//! | `/health/*`       | [`routes::health`]     | liveness / readiness       |
//! | `/openapi.json`   | [`openapi`]            | OpenAPI document           |
//! | anything else     | [`assets`]             | static bundle, if present  |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```

pub mod assets;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod ui;

use axum::Router;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::recipes::router())
        .merge(routes::plan::router())
        .merge(routes::grocery::router())
        .merge(ui::router())
        .merge(openapi::router());

    assets::attach(router, static_dir.as_deref())
        .layer(middleware::cors::layer())
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}
