//! # Grocery List
//!
//! An ordered list of [`GroceryItem`]s. Order is insertion order and is what
//! the UI displays. The whole list is replaced on every save; the editing
//! helpers here operate on a working copy before that happens.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::identity::GroceryItemId;

/// One line on the grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItem {
    /// Unique identifier. Generated when absent from submitted JSON.
    #[serde(default)]
    pub id: GroceryItemId,
    /// What to buy.
    #[serde(default)]
    pub text: String,
    /// Whether it is in the cart.
    #[serde(default)]
    pub done: bool,
    /// Fields written by other tools, kept as-is.
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl GroceryItem {
    /// A new unchecked item with a fresh identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(GroceryItemId::generate(), text, false)
    }

    /// An item with every field given and no extra fields.
    pub fn with_id(id: GroceryItemId, text: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            text: text.into(),
            done,
            extra: Map::new(),
        }
    }
}

/// The household grocery list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct GroceryList(Vec<GroceryItem>);

impl GroceryList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The items in display order.
    pub fn items(&self) -> &[GroceryItem] {
        &self.0
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list, returning its items.
    pub fn into_items(self) -> Vec<GroceryItem> {
        self.0
    }

    /// Append an item with the given text; returns its identifier.
    pub fn push_text(&mut self, text: impl Into<String>) -> GroceryItemId {
        let item = GroceryItem::new(text);
        let id = item.id.clone();
        self.0.push(item);
        id
    }

    /// Append a blank item; returns its identifier.
    pub fn push_blank(&mut self) -> GroceryItemId {
        self.push_text("")
    }

    /// Patch an item's text and/or done flag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownGroceryItem`] if no item has `id`.
    pub fn update(
        &mut self,
        id: &GroceryItemId,
        text: Option<String>,
        done: Option<bool>,
    ) -> Result<&GroceryItem, ValidationError> {
        let item = self
            .0
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| ValidationError::UnknownGroceryItem(id.to_string()))?;
        if let Some(text) = text {
            item.text = text;
        }
        if let Some(done) = done {
            item.done = done;
        }
        Ok(item)
    }

    /// Remove an item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownGroceryItem`] if no item has `id`.
    pub fn remove(&mut self, id: &GroceryItemId) -> Result<GroceryItem, ValidationError> {
        let pos = self
            .0
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| ValidationError::UnknownGroceryItem(id.to_string()))?;
        Ok(self.0.remove(pos))
    }

    /// Remove the item at display position `index`, if there is one.
    pub fn remove_at(&mut self, index: usize) -> Option<GroceryItem> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Drop every checked item; returns how many were removed.
    pub fn clear_done(&mut self) -> usize {
        let before = self.0.len();
        self.0.retain(|i| !i.done);
        before - self.0.len()
    }

    /// Make identifiers unique: blank ids, and every repeat of an id after
    /// its first occurrence, get a fresh value. Returns how many changed.
    pub fn normalize_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut changed = 0;
        for item in &mut self.0 {
            if item.id.is_blank() || !seen.insert(item.id.clone()) {
                item.id = GroceryItemId::generate();
                seen.insert(item.id.clone());
                changed += 1;
            }
        }
        changed
    }

    /// Copy unknown fields from `previous` onto items with the same id.
    ///
    /// Used when the list was rebuilt from a source that only carries
    /// `id`, `text` and `done`.
    pub fn adopt_extras(&mut self, previous: &GroceryList) {
        for item in self.0.iter_mut().filter(|i| i.extra.is_empty()) {
            if let Some(old) = previous.0.iter().find(|old| old.id == item.id) {
                item.extra = old.extra.clone();
            }
        }
    }
}

impl From<Vec<GroceryItem>> for GroceryList {
    fn from(items: Vec<GroceryItem>) -> Self {
        Self(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(list: &'a GroceryList, id: &GroceryItemId) -> Option<&'a GroceryItem> {
        list.items().iter().find(|i| &i.id == id)
    }

    fn ids(list: &GroceryList) -> Vec<String> {
        list.items().iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = GroceryList::new();
        list.push_text("milk");
        list.push_text("eggs");
        list.push_blank();
        let texts: Vec<_> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["milk", "eggs", ""]);
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut list = GroceryList::new();
        let id = list.push_text("milk");
        list.update(&id, None, Some(true)).unwrap();
        let item = find(&list, &id).unwrap();
        assert_eq!(item.text, "milk");
        assert!(item.done);

        list.update(&id, Some("oat milk".into()), None).unwrap();
        let item = find(&list, &id).unwrap();
        assert_eq!(item.text, "oat milk");
        assert!(item.done);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut list = GroceryList::new();
        let err = list
            .update(&GroceryItemId::new("nope"), None, Some(true))
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownGroceryItem("nope".into()));
    }

    #[test]
    fn remove_takes_out_one_item() {
        let mut list = GroceryList::new();
        let a = list.push_text("a");
        let b = list.push_text("b");
        let removed = list.remove(&a).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 1);
        assert!(find(&list, &b).is_some());
        assert!(list.remove(&a).is_err());
    }

    #[test]
    fn remove_at_uses_position() {
        let mut list = GroceryList::new();
        list.push_text("a");
        list.push_text("b");
        assert_eq!(list.remove_at(1).unwrap().text, "b");
        assert!(list.remove_at(1).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_done_counts_removed() {
        let mut list = GroceryList::new();
        let a = list.push_text("a");
        list.push_text("b");
        let c = list.push_text("c");
        list.update(&a, None, Some(true)).unwrap();
        list.update(&c, None, Some(true)).unwrap();
        assert_eq!(list.clear_done(), 2);
        assert_eq!(list.items()[0].text, "b");
    }

    #[test]
    fn items_without_ids_get_one_on_deserialize() {
        let list: GroceryList =
            serde_json::from_str(r#"[{"text":"bread"},{"id":"","text":"jam"}]"#).unwrap();
        assert!(!list.items()[0].id.is_blank());
        assert!(list.items()[1].id.is_blank());
        assert!(!list.items()[0].done);

        let mut list = list;
        assert_eq!(list.normalize_ids(), 1);
        assert!(list.items().iter().all(|i| !i.id.is_blank()));
    }

    #[test]
    fn explicit_ids_survive() {
        let mut list: GroceryList =
            serde_json::from_str(r#"[{"id":"g1","text":"bread","done":true}]"#).unwrap();
        assert_eq!(list.normalize_ids(), 0);
        assert_eq!(list.items()[0].id, GroceryItemId::new("g1"));
        assert!(list.items()[0].done);
    }

    #[test]
    fn repeated_ids_are_reassigned_after_the_first() {
        let mut list: GroceryList = serde_json::from_str(
            r#"[{"id":"g","text":"milk"},{"id":"g","text":"eggs","done":true},{"id":"g","text":"rice"}]"#,
        )
        .unwrap();
        assert_eq!(list.normalize_ids(), 2);

        let ids = ids(&list);
        assert_eq!(ids[0], "g");
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);
        // Content stays with its row.
        assert_eq!(list.items()[1].text, "eggs");
        assert!(list.items()[1].done);
        assert!(!list.items()[0].done);
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = r#"[{"id":"g1","text":"bread","done":false,"aisle":7,"note":"rye"}]"#;
        let list: GroceryList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.items()[0].extra["aisle"], 7);
        let back = serde_json::to_value(&list).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn adopt_extras_matches_by_id() {
        let previous: GroceryList =
            serde_json::from_str(r#"[{"id":"g1","text":"bread","aisle":7}]"#).unwrap();
        let mut rebuilt = GroceryList::from(vec![
            GroceryItem::with_id(GroceryItemId::new("g1"), "rye bread", true),
            GroceryItem::with_id(GroceryItemId::new("g2"), "jam", false),
        ]);
        rebuilt.adopt_extras(&previous);
        assert_eq!(rebuilt.items()[0].extra["aisle"], 7);
        assert_eq!(rebuilt.items()[0].text, "rye bread");
        assert!(rebuilt.items()[1].extra.is_empty());
    }
}
