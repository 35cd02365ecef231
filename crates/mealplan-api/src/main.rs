//! # mealplan-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the meal planner. Configuration comes from
//! flags or their environment variables; the port defaults to 3000.

use std::path::PathBuf;

use clap::Parser;
use mealplan_api::state::{AppConfig, AppState};
use mealplan_core::{DocumentStore, FileStore};
use tracing_subscriber::EnvFilter;

/// Weekly meal planner server.
#[derive(Parser, Debug)]
#[command(name = "mealplan-api", version, about, long_about = None)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Path of the JSON document holding recipes, plan, and grocery list.
    #[arg(long = "data", env = "MEALPLAN_DATA", default_value = "data.json")]
    data_path: PathBuf,

    /// Prebuilt front-end bundle served for unmatched paths, if it exists.
    #[arg(long, env = "MEALPLAN_STATIC_DIR", default_value = "dist")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = AppConfig {
        port: args.port,
        data_path: args.data_path,
        static_dir: Some(args.static_dir),
    };

    // Load once up front: a malformed document stops the process here.
    let store = FileStore::new(&config.data_path);
    let document = store.load().map_err(|e| {
        tracing::error!("Cannot load meal plan document: {e}");
        e
    })?;
    tracing::info!(
        path = %config.data_path.display(),
        recipes = document.recipes.len(),
        grocery = document.grocery.len(),
        "document loaded"
    );

    let port = config.port;
    let state = AppState::with_config(config, store);
    let app = mealplan_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on http://localhost:{port}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
