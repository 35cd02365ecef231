//! # Recipes Subcommand
//!
//! - `list` — print every recipe with its id.
//! - `add` — append a recipe; `--title` and `--url` must be non-blank.

use anyhow::Result;
use clap::{Args, Subcommand};

use mealplan_core::{split_tags, DocumentStore, NewRecipe};

/// Arguments for the `mealplan recipes` subcommand.
#[derive(Args, Debug)]
pub struct RecipesArgs {
    #[command(subcommand)]
    pub command: RecipesCommand,
}

/// Recipe subcommands.
#[derive(Subcommand, Debug)]
pub enum RecipesCommand {
    /// List all recipes in insertion order.
    List {
        /// Print the recipes as JSON instead of one line each.
        #[arg(long)]
        json: bool,
    },

    /// Add a recipe.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        /// Main protein (chicken, veg, beef, ...).
        #[arg(long, default_value = "")]
        protein: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long)]
        kid_friendly: bool,
        #[arg(long)]
        gluten_free: bool,
    },
}

/// Execute the recipes subcommand.
pub fn run_recipes(args: &RecipesArgs, store: &dyn DocumentStore) -> Result<u8> {
    match &args.command {
        RecipesCommand::List { json } => cmd_list(store, *json),
        RecipesCommand::Add {
            title,
            url,
            protein,
            tags,
            notes,
            kid_friendly,
            gluten_free,
        } => {
            let new = NewRecipe {
                title: title.clone(),
                url: url.clone(),
                tags: split_tags(tags),
                notes: notes.clone(),
                protein: protein.clone(),
                kid_friendly: *kid_friendly,
                gluten_free: *gluten_free,
            };
            cmd_add(store, new)
        }
    }
}

fn cmd_list(store: &dyn DocumentStore, json: bool) -> Result<u8> {
    let document = crate::load(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document.recipes)?);
        return Ok(0);
    }

    if document.recipes.is_empty() {
        println!("No recipes yet.");
        return Ok(0);
    }
    println!("Recipes ({}):", document.recipes.len());
    for recipe in &document.recipes {
        let meta = recipe.meta_line();
        if meta.is_empty() {
            println!("  {}  {}", recipe.id, recipe.title);
        } else {
            println!("  {}  {} [{meta}]", recipe.id, recipe.title);
        }
        println!("      {}", recipe.url);
    }
    Ok(0)
}

fn cmd_add(store: &dyn DocumentStore, new: NewRecipe) -> Result<u8> {
    let recipe = crate::update(store, |doc| Ok(doc.add_recipe(new)?))?;
    tracing::info!(id = %recipe.id, title = %recipe.title, "recipe added");
    println!("OK: added recipe {} ({})", recipe.title, recipe.id);
    Ok(0)
}
