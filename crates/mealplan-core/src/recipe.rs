//! # Recipes
//!
//! A [`Recipe`] is immutable once created. [`NewRecipe`] is the submitted
//! shape: every field optional on the wire, with `title` and `url` checked
//! before a recipe is minted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::identity::RecipeId;

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, generated on creation. Recipes written by other
    /// tools without one load with a blank id, which is not written back.
    #[serde(default, skip_serializing_if = "RecipeId::is_blank")]
    pub id: RecipeId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Where the full recipe lives.
    #[serde(default)]
    pub url: String,
    /// Free-form tags, in the order entered.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Main protein ("chicken", "veg", "beef", ...).
    #[serde(default)]
    pub protein: String,
    /// Whether the household's kids will eat it.
    #[serde(default)]
    pub kid_friendly: bool,
    /// Whether it is gluten-free.
    #[serde(default)]
    pub gluten_free: bool,
    /// Fields written by other tools, kept as-is.
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Short summary line: protein, `GF`, `Kid`, joined by ` · `, skipping
    /// the parts that do not apply.
    pub fn meta_line(&self) -> String {
        let parts = [
            self.protein.trim(),
            if self.gluten_free { "GF" } else { "" },
            if self.kid_friendly { "Kid" } else { "" },
        ];
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// A recipe submission.
///
/// Missing or `null` fields take their defaults: empty strings, no tags,
/// both flags `false`. `title` and `url` default to empty so that a missing,
/// `null` and empty field all fail validation the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Display title (required).
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Recipe url (required).
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Tags, default none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Notes, default empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// Protein, default empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein: String,
    /// Kid-friendly flag, default `false`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub kid_friendly: bool,
    /// Gluten-free flag, default `false`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gluten_free: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewRecipe {
    /// Check that `title` and `url` are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RecipeFieldsRequired`] if either is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() || self.url.trim().is_empty() {
            return Err(ValidationError::RecipeFieldsRequired);
        }
        Ok(())
    }

    /// Validate and mint a recipe with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RecipeFieldsRequired`] if `title` or `url`
    /// is blank.
    pub fn into_recipe(self) -> Result<Recipe, ValidationError> {
        self.validate()?;
        Ok(Recipe {
            id: RecipeId::generate(),
            title: self.title,
            url: self.url,
            tags: self.tags,
            notes: self.notes,
            protein: self.protein,
            kid_friendly: self.kid_friendly,
            gluten_free: self.gluten_free,
            extra: Map::new(),
        })
    }
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
