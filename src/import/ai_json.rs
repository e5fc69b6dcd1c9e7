use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ImportError;
use crate::recipe::{IngredientSpec, Recipe};

const FALLBACK_NAME: &str = "Scanned Recipe";

/// Parses JSON produced by a language model, tolerating code fences and
/// surrounding prose.
pub fn sanitize_ai_json(text: &str) -> Result<Value, ImportError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    let cleaned = text.replace("```json", "").replace("```", "");
    if let Ok(value) = serde_json::from_str(cleaned.trim()) {
        debug!("parsed AI JSON after stripping code fences");
        return Ok(value);
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str(&text[start..=end]).map_err(ImportError::MalformedJson)
        }
        _ => Err(ImportError::InvalidJson),
    }
}

/// String or list-of-strings field in an extraction payload.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TextOrLines {
    Text(String),
    Lines(Vec<String>),
    Other(Value),
}

impl TextOrLines {
    fn into_text(self) -> String {
        match self {
            TextOrLines::Text(text) => text,
            TextOrLines::Lines(lines) => lines.join("\n"),
            TextOrLines::Other(_) => String::new(),
        }
    }
}

/// `{name, ingredients, instructions}` as returned by the extraction prompt.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ExtractedRecipe {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub ingredients: Option<TextOrLines>,
    #[serde(default)]
    pub instructions: Option<TextOrLines>,
}

impl ExtractedRecipe {
    pub fn from_value(value: Value) -> Result<Self, ImportError> {
        if !value.is_object() {
            return Err(ImportError::NoRecipeFound);
        }
        serde_json::from_value(value).map_err(ImportError::MalformedJson)
    }

    /// Non-string names fall back to a placeholder; list fields are joined by newlines.
    pub fn into_recipe(self, source: &str) -> Recipe {
        let name = match self.name {
            Some(Value::String(name)) => name,
            _ => FALLBACK_NAME.to_string(),
        };
        let ingredients = self.ingredients.map(TextOrLines::into_text).unwrap_or_default();
        let instructions = self.instructions.map(TextOrLines::into_text).unwrap_or_default();

        let mut recipe = Recipe::new(name, IngredientSpec::FreeText(ingredients), instructions);
        recipe.source = Some(source.to_string());
        recipe
    }
}

/// Sanitizes model output and turns it into a recipe.
pub fn recipe_from_ai_text(text: &str, source: &str) -> Result<Recipe, ImportError> {
    let value = sanitize_ai_json(text)?;
    Ok(ExtractedRecipe::from_value(value)?.into_recipe(source))
}
