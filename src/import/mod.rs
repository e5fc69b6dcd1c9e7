pub mod ai_json;
pub mod image;
pub mod text;

pub use ai_json::{recipe_from_ai_text, sanitize_ai_json, ExtractedRecipe};
pub use image::{extract_recipe_from_image, EXTRACTION_PROMPT};
pub use text::parse_recipe_text;

use thiserror::Error;

use crate::api_connection::ApiConnectionError;

pub const SOURCE_TEXT_IMPORT: &str = "Manual Text Import";
pub const SOURCE_PHOTO_SCAN: &str = "AI Photo Scan";
pub const SOURCE_BATCH_SCAN: &str = "AI Batch Scan";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not enough text found: need a title and at least one more line")]
    NotEnoughText,
    #[error("found JSON-like block but failed to parse: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("invalid JSON format from AI")]
    InvalidJson,
    #[error("no recipe found in the extraction result")]
    NoRecipeFound,
    #[error("no text returned from AI")]
    EmptyResponse,
    #[error(transparent)]
    Api(#[from] ApiConnectionError),
}
