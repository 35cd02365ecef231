//! # mealplan-cli — Operator CLI for the Meal Planner
//!
//! Reads and edits the same JSON document the service uses, without the
//! service running. Every mutating command is one load, mutate, save cycle
//! through a [`DocumentStore`], with the same validation the HTTP API applies.
//!
//! ## Subcommands
//!
//! - `mealplan recipes` — list or add recipes.
//! - `mealplan plan` — show the week or set/clear one day.
//! - `mealplan grocery` — show, add, check off, remove, or clear checked items.
//!
//! ```bash
//! mealplan recipes add --title Tacos --url https://example.com/tacos --tags quick,beef
//! mealplan plan set tue 3f2a...
//! mealplan --data ~/meals.json grocery clear-done
//! ```

pub mod grocery;
pub mod plan;
pub mod recipes;

use anyhow::{Context, Result};
use mealplan_core::{Document, DocumentStore};

/// Load the document with the store location attached to any failure.
pub fn load(store: &dyn DocumentStore) -> Result<Document> {
    store
        .load()
        .with_context(|| format!("failed to load {}", store.location()))
}

/// Load, apply `f`, save. Nothing is written if `f` fails.
pub fn update<R>(
    store: &dyn DocumentStore,
    f: impl FnOnce(&mut Document) -> Result<R>,
) -> Result<R> {
    let mut document = load(store)?;
    let out = f(&mut document)?;
    store
        .save(&document)
        .with_context(|| format!("failed to save {}", store.location()))?;
    tracing::debug!(location = %store.location(), "document saved");
    Ok(out)
}
