#![deny(missing_docs)]

//! # mealplan-core — Foundational Types for the Weekly Meal Planner
//!
//! Every other crate in the workspace builds on the types defined here. The
//! crate has no internal dependencies and performs no logging; it only
//! models the household's data and knows how to persist it.
//!
//! ## Design Principles
//!
//! 1. **One document.** All state lives in a single [`Document`] with three
//!    collections: recipes, the Sun–Thu [`Plan`], and the [`GroceryList`].
//!    Every mutation is a load, an edit, and a save of the whole document.
//!
//! 2. **One identifier policy.** Recipe and grocery identifiers are both
//!    drawn from [`generate_id`], so client- and server-created records can
//!    never disagree about the id format.
//!
//! 3. **Injected persistence.** [`DocumentStore`] is the only way to read or
//!    write the document. [`FileStore`] backs the running service and the
//!    CLI; [`MemoryStore`] backs tests.
//!
//! 4. **Structured errors.** [`ValidationError`] carries the exact messages
//!    the HTTP API returns; [`StoreError`] carries the failing location.

pub mod document;
pub mod error;
pub mod grocery;
pub mod identity;
pub mod plan;
pub mod recipe;
pub mod store;

// Re-export primary types at crate root for ergonomic imports.
pub use document::Document;
pub use error::{MealplanError, StoreError, ValidationError};
pub use grocery::{GroceryItem, GroceryList};
pub use identity::{generate_id, GroceryItemId, RecipeId};
pub use plan::{Day, Plan};
pub use recipe::{split_tags, NewRecipe, Recipe};
pub use store::{DocumentStore, FileStore, MemoryStore};
