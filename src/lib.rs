pub mod api_connection;
pub mod availability;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod import;
pub mod logging;
pub mod matcher;
pub mod pantry;
pub mod recipe;
pub mod scorer;
pub mod store;

pub use availability::AvailabilityIndex;
pub use catalog::MasterCatalog;
pub use matcher::{is_line_available, MatchPolicy};
pub use pantry::{PantryItem, PantryStatus};
pub use recipe::{IngredientSpec, Recipe};
pub use scorer::{score_recipes, RecipeScorer, ScoredRecipe};
