//! # Weekly Plan
//!
//! Dinners for the five fixed days, Sunday through Thursday. Each day holds a
//! list of recipe identifiers so the shape can grow, but every editing path
//! in this workspace writes zero or one entries.
//!
//! The plan does not check that referenced recipes exist.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::identity::RecipeId;

/// A planned day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Day {
    /// Sunday.
    Sun,
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
}

impl Day {
    /// All planned days in display order.
    pub const ALL: [Day; 5] = [Day::Sun, Day::Mon, Day::Tue, Day::Wed, Day::Thu];

    /// The day's wire name (`"Sun"`, `"Mon"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    /// Parse a day name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownDay(s.to_string()))
    }
}

/// The week's dinner plan, keyed by day name on the wire.
///
/// Days missing from submitted JSON deserialize as empty; unknown keys are
/// ignored. Serialization always emits all five days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Plan {
    /// Sunday's recipes.
    #[serde(rename = "Sun", default)]
    pub sun: Vec<RecipeId>,
    /// Monday's recipes.
    #[serde(rename = "Mon", default)]
    pub mon: Vec<RecipeId>,
    /// Tuesday's recipes.
    #[serde(rename = "Tue", default)]
    pub tue: Vec<RecipeId>,
    /// Wednesday's recipes.
    #[serde(rename = "Wed", default)]
    pub wed: Vec<RecipeId>,
    /// Thursday's recipes.
    #[serde(rename = "Thu", default)]
    pub thu: Vec<RecipeId>,
}

impl Plan {
    /// Recipes scheduled on `day`.
    pub fn day(&self, day: Day) -> &[RecipeId] {
        match day {
            Day::Sun => &self.sun,
            Day::Mon => &self.mon,
            Day::Tue => &self.tue,
            Day::Wed => &self.wed,
            Day::Thu => &self.thu,
        }
    }

    fn day_mut(&mut self, day: Day) -> &mut Vec<RecipeId> {
        match day {
            Day::Sun => &mut self.sun,
            Day::Mon => &mut self.mon,
            Day::Tue => &mut self.tue,
            Day::Wed => &mut self.wed,
            Day::Thu => &mut self.thu,
        }
    }

    /// Replace `day`'s entry with the single recipe, or clear it.
    pub fn set_day(&mut self, day: Day, recipe: Option<RecipeId>) {
        *self.day_mut(day) = recipe.into_iter().collect();
    }

    /// The first recipe scheduled on `day`, if any.
    pub fn recipe_for(&self, day: Day) -> Option<&RecipeId> {
        self.day(day).first()
    }

    /// Iterate days in display order with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[RecipeId])> + '_ {
        Day::ALL.into_iter().map(move |d| (d, self.day(d)))
    }

    /// Every recipe id referenced anywhere in the plan.
    pub fn scheduled_ids(&self) -> BTreeSet<&RecipeId> {
        self.iter().flat_map(|(_, ids)| ids.iter()).collect()
    }

    /// Days on which `recipe` is scheduled, in display order.
    pub fn days_for(&self, recipe: &RecipeId) -> Vec<Day> {
        self.iter()
            .filter(|(_, ids)| ids.contains(recipe))
            .map(|(day, _)| day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_five_empty_days() {
        let json = serde_json::to_value(Plan::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Sun": [], "Mon": [], "Tue": [], "Wed": [], "Thu": []})
        );
    }

    #[test]
    fn set_day_writes_single_entry_or_clears() {
        let mut plan = Plan::default();
        plan.set_day(Day::Tue, Some(RecipeId::new("r1")));
        assert_eq!(plan.day(Day::Tue), &[RecipeId::new("r1")]);

        plan.set_day(Day::Tue, Some(RecipeId::new("r2")));
        assert_eq!(plan.day(Day::Tue), &[RecipeId::new("r2")]);

        plan.set_day(Day::Tue, None);
        assert!(plan.day(Day::Tue).is_empty());
    }

    #[test]
    fn set_day_leaves_other_days_alone() {
        let mut plan = Plan::default();
        plan.set_day(Day::Sun, Some(RecipeId::new("a")));
        plan.set_day(Day::Thu, Some(RecipeId::new("b")));
        assert_eq!(plan.recipe_for(Day::Sun), Some(&RecipeId::new("a")));
        assert_eq!(plan.recipe_for(Day::Thu), Some(&RecipeId::new("b")));
        assert_eq!(plan.recipe_for(Day::Mon), None);
    }

    #[test]
    fn multi_recipe_days_round_trip() {
        let raw = r#"{"Sun":["a","b"],"Mon":[],"Tue":[],"Wed":[],"Thu":[]}"#;
        let plan: Plan = serde_json::from_str(raw).unwrap();
        assert_eq!(plan.day(Day::Sun).len(), 2);
        assert_eq!(plan.recipe_for(Day::Sun), Some(&RecipeId::new("a")));
        assert_eq!(serde_json::to_string(&plan).unwrap(), raw);
    }

    #[test]
    fn missing_days_default_and_unknown_keys_ignored() {
        let plan: Plan = serde_json::from_str(r#"{"Wed":["x"],"Fri":["y"]}"#).unwrap();
        assert_eq!(plan.day(Day::Wed), &[RecipeId::new("x")]);
        assert!(plan.day(Day::Sun).is_empty());
    }

    #[test]
    fn scheduled_ids_deduplicates() {
        let mut plan = Plan::default();
        plan.set_day(Day::Sun, Some(RecipeId::new("a")));
        plan.set_day(Day::Mon, Some(RecipeId::new("a")));
        plan.set_day(Day::Tue, Some(RecipeId::new("b")));
        let ids = plan.scheduled_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&RecipeId::new("b")));

        assert_eq!(plan.days_for(&RecipeId::new("a")), vec![Day::Sun, Day::Mon]);
        assert!(plan.days_for(&RecipeId::new("zzz")).is_empty());
    }

    #[test]
    fn day_parsing() {
        assert_eq!("Sun".parse::<Day>().unwrap(), Day::Sun);
        assert_eq!("thu".parse::<Day>().unwrap(), Day::Thu);
        assert_eq!(" Wed ".parse::<Day>().unwrap(), Day::Wed);
        assert_eq!(
            "Fri".parse::<Day>().unwrap_err(),
            ValidationError::UnknownDay("Fri".into())
        );
    }

    #[test]
    fn iter_is_in_display_order() {
        let days: Vec<_> = Plan::default().iter().map(|(d, _)| d).collect();
        assert_eq!(days, Day::ALL.to_vec());
    }
}
