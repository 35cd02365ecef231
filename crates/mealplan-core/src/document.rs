//! # The Persisted Document
//!
//! The single root object holding all application state. It is always
//! written whole; there is no partial-field persistence.
//!
//! ```json
//! {
//!   "recipes": [],
//!   "plan": { "Sun": [], "Mon": [], "Tue": [], "Wed": [], "Thu": [] },
//!   "grocery": []
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{StoreError, ValidationError};
use crate::grocery::GroceryList;
use crate::identity::RecipeId;
use crate::plan::Plan;
use crate::recipe::{NewRecipe, Recipe};

/// All persisted state.
///
/// Missing top-level keys deserialize to their empty defaults, so every
/// loaded document has all three collections. Keys this crate does not know
/// about are kept in [`Document::extra`] and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    /// Every recipe ever added, in creation order.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// The week's dinner plan.
    #[serde(default)]
    pub plan: Plan,
    /// The grocery list.
    #[serde(default)]
    pub grocery: GroceryList,
    /// Top-level keys written by other tools.
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Validate a submission, mint a recipe, and append it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RecipeFieldsRequired`] without touching
    /// the document if `title` or `url` is blank.
    pub fn add_recipe(&mut self, new: NewRecipe) -> Result<Recipe, ValidationError> {
        let recipe = new.into_recipe()?;
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    /// Look up a recipe by identifier.
    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Serialize as pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self).map_err(StoreError::Serialize)
    }

    /// Parse a document read from `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] if `raw` is not a document.
    pub fn from_json(raw: &str, location: &str) -> Result<Self, StoreError> {
        serde_json::from_str(raw).map_err(|source| StoreError::Malformed {
            location: location.to_string(),
            source,
        })
    }
}
