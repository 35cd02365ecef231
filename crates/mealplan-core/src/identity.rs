//! # Identity Newtypes
//!
//! Identifiers for recipes and grocery items. Each is a distinct type: you
//! cannot pass a [`GroceryItemId`] where a [`RecipeId`] is expected.
//!
//! ## Generation
//!
//! Both types draw fresh values from [`generate_id`] (UUIDv4, simple hex
//! form). On the wire they are plain strings, so documents written by other
//! tools with shorter ids (`"r1"`) still load.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Generate a fresh opaque identifier: 32 lowercase hex characters.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// ---------------------------------------------------------------------------
// Recipe identifiers
// ---------------------------------------------------------------------------

/// Identifier of a [`Recipe`](crate::Recipe). Assigned by the store side on
/// creation and never changed afterwards. `Default` is the blank id.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Create a new random recipe identifier.
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Wrap an existing identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Grocery item identifiers
// ---------------------------------------------------------------------------

/// Identifier of a [`GroceryItem`](crate::GroceryItem).
///
/// `Default` generates a fresh value, so items deserialized without an `id`
/// field receive one automatically.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct GroceryItemId(String);

impl GroceryItemId {
    /// Create a new random grocery item identifier.
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Wrap an existing identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for GroceryItemId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for GroceryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
