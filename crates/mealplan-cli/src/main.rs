//! # mealplan CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers, all
//! of which operate on the data file named by `--data`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mealplan_cli::grocery::{run_grocery, GroceryArgs};
use mealplan_cli::plan::{run_plan, PlanArgs};
use mealplan_cli::recipes::{run_recipes, RecipesArgs};
use mealplan_core::FileStore;

/// Weekly meal planner CLI.
///
/// Edits the same data file the `mealplan-api` service reads. Avoid running
/// both against one file at the same time: the last writer wins.
#[derive(Parser, Debug)]
#[command(name = "mealplan", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the data file.
    #[arg(long = "data", env = "MEALPLAN_DATA", default_value = "data.json", global = true)]
    data_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List or add recipes.
    Recipes(RecipesArgs),

    /// Show or edit the Sun–Thu plan.
    Plan(PlanArgs),

    /// Show or edit the grocery list.
    Grocery(GroceryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(data = %cli.data_path.display(), "mealplan CLI starting");

    let store = FileStore::new(&cli.data_path);
    let result = match cli.command {
        Commands::Recipes(args) => run_recipes(&args, &store),
        Commands::Plan(args) => run_plan(&args, &store),
        Commands::Grocery(args) => run_grocery(&args, &store),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
