//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. It holds the injected [`DocumentStore`] and the
//! runtime configuration; the document itself is never cached, every
//! request re-loads it.

use std::path::PathBuf;
use std::sync::Arc;

use mealplan_core::{Document, DocumentStore, StoreError};
use parking_lot::Mutex;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Location of the persisted document.
    pub data_path: PathBuf,
    /// Prebuilt static bundle served for unmatched paths, if the directory
    /// exists at startup.
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_path: PathBuf::from("data.json"),
            static_dir: None,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    /// Serializes load-modify-save cycles within this process. Never held
    /// across an `.await`.
    write_lock: Arc<Mutex<()>>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.location())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// State over `store` with default configuration.
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self::with_config(AppConfig::default(), store)
    }

    /// State over `store` with the given configuration.
    pub fn with_config(config: AppConfig, store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    /// Human-readable location of the backing store.
    pub fn store_location(&self) -> String {
        self.store.location()
    }

    /// Load the current document.
    ///
    /// Takes the write lock too: a first load persists the default document,
    /// and that write must not land in the middle of an [`update`](Self::update).
    pub fn load(&self) -> Result<Document, StoreError> {
        let _guard = self.write_lock.lock();
        self.store.load()
    }

    /// Load the document, apply `f`, and save the result.
    ///
    /// Nothing is saved if `f` fails. The whole cycle runs under the write
    /// lock so two requests in this process cannot interleave their load and
    /// save.
    pub fn update<R, E>(&self, f: impl FnOnce(&mut Document) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock();
        let mut document = self.store.load()?;
        let out = f(&mut document)?;
        self.store.save(&document)?;
        Ok(out)
    }
}
