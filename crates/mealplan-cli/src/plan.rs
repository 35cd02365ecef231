//! # Plan Subcommand
//!
//! - `show` — print each day with the title of its recipe.
//! - `set <day> [<recipe-id>]` — schedule a recipe, or clear the day when
//!   the id is omitted.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use mealplan_core::{Day, DocumentStore, RecipeId};

/// Arguments for the `mealplan plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommand,
}

/// Plan subcommands.
#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Show the Sun–Thu plan.
    Show,

    /// Set or clear one day.
    Set {
        /// Day name: Sun, Mon, Tue, Wed or Thu (case-insensitive).
        day: String,
        /// Recipe to schedule. Omit to clear the day.
        recipe: Option<String>,
        /// Accept an id that does not match any recipe.
        #[arg(long)]
        allow_unknown: bool,
    },
}

/// Execute the plan subcommand.
pub fn run_plan(args: &PlanArgs, store: &dyn DocumentStore) -> Result<u8> {
    match &args.command {
        PlanCommand::Show => cmd_show(store),
        PlanCommand::Set {
            day,
            recipe,
            allow_unknown,
        } => cmd_set(store, day, recipe.as_deref(), *allow_unknown),
    }
}

fn cmd_show(store: &dyn DocumentStore) -> Result<u8> {
    let document = crate::load(store)?;
    for (day, ids) in document.plan.iter() {
        let entry = match ids.first() {
            None => "-".to_string(),
            Some(id) => match document.recipe(id) {
                Some(recipe) => format!("{} ({id})", recipe.title),
                None => format!("{id} (not in recipe list)"),
            },
        };
        println!("{day}: {entry}");
    }
    Ok(0)
}

fn cmd_set(
    store: &dyn DocumentStore,
    day: &str,
    recipe: Option<&str>,
    allow_unknown: bool,
) -> Result<u8> {
    let day: Day = day.parse()?;
    let recipe = recipe
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(RecipeId::new);

    crate::update(store, |doc| {
        if let Some(id) = &recipe {
            if !allow_unknown && doc.recipe(id).is_none() {
                bail!("no recipe with id \"{id}\" (pass --allow-unknown to schedule it anyway)");
            }
        }
        doc.plan.set_day(day, recipe.clone());
        Ok(())
    })?;

    match &recipe {
        Some(id) => println!("OK: {day} set to {id}"),
        None => println!("OK: {day} cleared"),
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_core::{FileStore, NewRecipe};

    fn store_with_recipe(dir: &tempfile::TempDir) -> (FileStore, RecipeId) {
        let store = FileStore::new(dir.path().join("data.json"));
        let mut doc = store.load().unwrap();
        let recipe = doc
            .add_recipe(NewRecipe {
                title: "Soup".into(),
                url: "http://soup".into(),
                ..NewRecipe::default()
            })
            .unwrap();
        store.save(&doc).unwrap();
        (store, recipe.id)
    }

    fn set(day: &str, recipe: Option<&RecipeId>) -> PlanArgs {
        PlanArgs {
            command: PlanCommand::Set {
                day: day.into(),
                recipe: recipe.map(|id| id.to_string()),
                allow_unknown: false,
            },
        }
    }

    #[test]
    fn set_and_clear_day() {
        let dir = tempfile::tempdir().unwrap();
        let (store, id) = store_with_recipe(&dir);

        assert_eq!(run_plan(&set("mon", Some(&id)), &store).unwrap(), 0);
        assert_eq!(store.load().unwrap().plan.recipe_for(Day::Mon), Some(&id));

        run_plan(&set("Mon", None), &store).unwrap();
        assert!(store.load().unwrap().plan.day(Day::Mon).is_empty());

        let show = PlanArgs {
            command: PlanCommand::Show,
        };
        assert_eq!(run_plan(&show, &store).unwrap(), 0);
    }

    #[test]
    fn unknown_day_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (store, id) = store_with_recipe(&dir);
        let err = run_plan(&set("Fri", Some(&id)), &store).unwrap_err();
        assert!(err.to_string().contains("unknown day"));
    }

    #[test]
    fn unknown_recipe_needs_override() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_with_recipe(&dir);
        let ghost = RecipeId::new("ghost");

        assert!(run_plan(&set("Sun", Some(&ghost)), &store).is_err());
        assert!(store.load().unwrap().plan.day(Day::Sun).is_empty());

        let forced = PlanArgs {
            command: PlanCommand::Set {
                day: "Sun".into(),
                recipe: Some("ghost".into()),
                allow_unknown: true,
            },
        };
        run_plan(&forced, &store).unwrap();
        assert_eq!(store.load().unwrap().plan.recipe_for(Day::Sun), Some(&ghost));
    }
}
