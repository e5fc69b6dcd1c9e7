use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::matcher::MatchPolicy;
use crate::pantry::PantryStatus;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank recipes by what is in your pantry", long_about = None)]
pub struct Cli {
    /// Directory holding pantry.json and recipes.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// CSV catalog (Category,Ingredient) replacing the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Line matching policy: substring or whole-word
    #[arg(long, global = true)]
    pub policy: Option<MatchPolicy>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank recipes by the share of ingredient lines the pantry covers
    Rank {
        /// Only show recipes whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// List the missing ingredient lines under each recipe
        #[arg(short, long)]
        missing: bool,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the ingredient names currently counted as available
    Available {
        /// Only list names filed under this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Manage pantry classifications
    #[command(subcommand)]
    Pantry(PantryCommand),
    /// Manage the recipe collection
    #[command(subcommand)]
    Recipe(RecipeCommand),
}

#[derive(Subcommand, Debug)]
pub enum PantryCommand {
    /// Add a custom ingredient (stocked)
    Add {
        name: String,
        #[arg(short, long, default_value = crate::catalog::DEFAULT_CATEGORY)]
        category: String,
    },
    /// Set an ingredient's status: have, dont_have or seldom
    Set {
        name: String,
        status: PantryStatus,
    },
    /// Advance an ingredient to the next status
    Cycle { name: String },
    /// Move a pantry ingredient to another category
    Move { name: String, category: String },
    /// Delete a custom ingredient
    Remove { name: String },
    /// Show the have / don't have / seldom columns of a category
    Show {
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// List stored recipes
    List,
    /// Add a recipe; ingredients are newline-separated
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ingredients: String,
        #[arg(long, default_value = "")]
        instructions: String,
        /// Where the recipe came from (book, website, person)
        #[arg(long)]
        source: Option<String>,
    },
    /// Change the name, ingredients, instructions or source of a recipe
    Edit {
        name: String,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
        #[arg(long)]
        source: Option<String>,
    },
    /// Import a recipe from a plain text file
    ImportText { file: PathBuf },
    /// Extract recipes from JPEG photos
    ImportImage {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Delete a recipe by name
    Remove { name: String },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
