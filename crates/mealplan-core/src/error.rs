//! # Error Hierarchy
//!
//! Structured error types for the meal planner, built with `thiserror`.
//!
//! [`ValidationError`] display strings for the three request-shape failures
//! are the exact messages the HTTP API puts in its `{"error": ...}` bodies.

use thiserror::Error;

/// Top-level error type for the meal planner.
#[derive(Error, Debug)]
pub enum MealplanError {
    /// Input was rejected before the document was touched.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the persisted document failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A recipe was submitted without a title or without a url.
    #[error("title and url required")]
    RecipeFieldsRequired,

    /// A plan update carried no plan.
    #[error("plan required")]
    PlanRequired,

    /// A grocery update carried something other than a list of items.
    #[error("items array required")]
    GroceryItemsRequired,

    /// A day name outside the fixed Sun–Thu set.
    #[error("unknown day \"{0}\" (expected one of Sun, Mon, Tue, Wed, Thu)")]
    UnknownDay(String),

    /// No grocery item carries the given identifier.
    #[error("no grocery item with id \"{0}\"")]
    UnknownGroceryItem(String),
}

/// Failures while loading or saving the document.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("cannot access document at {location}: {source}")]
    Io {
        /// Where the document lives (a path, or `memory`).
        location: String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The persisted content is not a meal plan document.
    #[error("document at {location} is malformed: {source}")]
    Malformed {
        /// Where the document lives (a path, or `memory`).
        location: String,
        /// The underlying parse failure.
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("cannot serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}
