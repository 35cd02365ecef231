//! Form payloads posted by the UI and their translation into model edits.

use std::collections::BTreeMap;

use mealplan_core::{split_tags, GroceryItem, GroceryItemId, GroceryList, NewRecipe};
use serde::Deserialize;

use crate::error::AppError;

/// Recipe entry form. Checkboxes arrive only when checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub protein: String,
    /// Comma-separated.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, rename = "kidFriendly")]
    pub kid_friendly: Option<String>,
    #[serde(default, rename = "glutenFree")]
    pub gluten_free: Option<String>,
}

impl RecipeForm {
    /// The blank form shown on a fresh page: both flags pre-checked.
    pub fn fresh() -> Self {
        Self {
            kid_friendly: Some("on".into()),
            gluten_free: Some("on".into()),
            ..Self::default()
        }
    }

    pub fn kid_friendly(&self) -> bool {
        self.kid_friendly.is_some()
    }

    pub fn gluten_free(&self) -> bool {
        self.gluten_free.is_some()
    }

    pub fn to_new_recipe(&self) -> NewRecipe {
        NewRecipe {
            title: self.title.clone(),
            url: self.url.clone(),
            tags: split_tags(&self.tags),
            notes: self.notes.clone(),
            protein: self.protein.clone(),
            kid_friendly: self.kid_friendly(),
            gluten_free: self.gluten_free(),
        }
    }
}

/// One day's selector in the planner. An empty `recipe` clears the day.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanForm {
    pub day: String,
    #[serde(default)]
    pub recipe: String,
}

/// What the grocery editor asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroceryAction {
    /// Append a blank row to the working copy.
    Add,
    /// Drop the row at this position from the working copy.
    Remove(usize),
    /// Persist the working copy.
    Save,
}

impl GroceryAction {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "add" => Ok(Self::Add),
            "save" => Ok(Self::Save),
            other => other
                .strip_prefix("remove:")
                .and_then(|n| n.parse().ok())
                .map(Self::Remove)
                .ok_or_else(|| AppError::BadRequest(format!("unknown grocery action \"{other}\""))),
        }
    }
}

#[derive(Default)]
struct Row {
    id: String,
    text: String,
    done: bool,
}

/// The grocery editor's working copy plus the requested action.
#[derive(Debug, Clone)]
pub struct GroceryEdit {
    pub items: GroceryList,
    pub action: GroceryAction,
}

impl GroceryEdit {
    /// Rebuild the working copy from urlencoded pairs.
    ///
    /// Each row's fields are keyed by its position: `id:<n>`, `text:<n>` and
    /// (when checked) `done:<n>`. Rows come back in position order. A single
    /// `action` names what to do; a missing action means the form was
    /// submitted with Enter, which saves. Blank or repeated ids are replaced.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut rows: BTreeMap<usize, Row> = BTreeMap::new();
        let mut action = None;

        for (key, value) in pairs {
            if key == "action" {
                action = Some(GroceryAction::parse(&value)?);
                continue;
            }
            let Some((field, index)) = key.split_once(':') else {
                continue;
            };
            let index: usize = index
                .parse()
                .map_err(|_| AppError::BadRequest(format!("bad grocery field \"{key}\"")))?;
            let row = rows.entry(index).or_default();
            match field {
                "id" => row.id = value,
                "text" => row.text = value,
                "done" => row.done = true,
                _ => {}
            }
        }

        let items: Vec<GroceryItem> = rows
            .into_values()
            .map(|row| GroceryItem::with_id(GroceryItemId::new(row.id), row.text, row.done))
            .collect();
        let mut items = GroceryList::from(items);
        items.normalize_ids();

        Ok(Self {
            items,
            action: action.unwrap_or(GroceryAction::Save),
        })
    }
}
