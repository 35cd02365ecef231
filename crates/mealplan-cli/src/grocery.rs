//! # Grocery Subcommand
//!
//! Items are addressed by id; `show` prints them. Checked items stay on the
//! list until `clear-done`.

use anyhow::{ensure, Result};
use clap::{Args, Subcommand};

use mealplan_core::{DocumentStore, GroceryItemId};

/// Arguments for the `mealplan grocery` subcommand.
#[derive(Args, Debug)]
pub struct GroceryArgs {
    #[command(subcommand)]
    pub command: GroceryCommand,
}

/// Grocery subcommands.
#[derive(Subcommand, Debug)]
pub enum GroceryCommand {
    /// Show the list in order.
    Show,

    /// Append an item.
    Add {
        /// Item text, e.g. "chicken thighs".
        text: String,
    },

    /// Check an item off (or back on with `--undo`).
    Done {
        id: String,
        #[arg(long)]
        undo: bool,
    },

    /// Remove an item.
    Remove { id: String },

    /// Remove every checked item.
    ClearDone,
}

/// Execute the grocery subcommand.
pub fn run_grocery(args: &GroceryArgs, store: &dyn DocumentStore) -> Result<u8> {
    match &args.command {
        GroceryCommand::Show => cmd_show(store),
        GroceryCommand::Add { text } => cmd_add(store, text),
        GroceryCommand::Done { id, undo } => cmd_done(store, &GroceryItemId::new(id.as_str()), !undo),
        GroceryCommand::Remove { id } => cmd_remove(store, &GroceryItemId::new(id.as_str())),
        GroceryCommand::ClearDone => cmd_clear_done(store),
    }
}

fn cmd_show(store: &dyn DocumentStore) -> Result<u8> {
    let document = crate::load(store)?;
    if document.grocery.is_empty() {
        println!("Grocery list is empty.");
        return Ok(0);
    }
    for item in document.grocery.items() {
        let mark = if item.done { "x" } else { " " };
        println!("[{mark}] {}  {}", item.id, item.text);
    }
    Ok(0)
}

fn cmd_add(store: &dyn DocumentStore, text: &str) -> Result<u8> {
    let text = text.trim();
    ensure!(!text.is_empty(), "item text must not be blank");
    let id = crate::update(store, |doc| Ok(doc.grocery.push_text(text)))?;
    println!("OK: added {id}");
    Ok(0)
}

fn cmd_done(store: &dyn DocumentStore, id: &GroceryItemId, done: bool) -> Result<u8> {
    crate::update(store, |doc| {
        doc.grocery.update(id, None, Some(done))?;
        Ok(())
    })?;
    println!("OK: {id} marked {}", if done { "done" } else { "not done" });
    Ok(0)
}

fn cmd_remove(store: &dyn DocumentStore, id: &GroceryItemId) -> Result<u8> {
    let removed = crate::update(store, |doc| Ok(doc.grocery.remove(id)?))?;
    println!("OK: removed {}", removed.text);
    Ok(0)
}

fn cmd_clear_done(store: &dyn DocumentStore) -> Result<u8> {
    let cleared = crate::update(store, |doc| Ok(doc.grocery.clear_done()))?;
    println!("OK: cleared {cleared} item(s)");
    Ok(0)
}
