use tracing::debug;

use super::{ImportError, SOURCE_TEXT_IMPORT};
use crate::recipe::{IngredientSpec, Recipe};

const INSTRUCTION_HEADERS: &[&str] = &["instruction", "step", "method", "direction"];
const INGREDIENT_HEADERS: &[&str] = &["ingredient", "items", "need"];

fn mentions_any(line: &str, words: &[&str]) -> bool {
    let lower = line.to_lowercase();
    words.iter().any(|w| lower.contains(w))
}

/// Splits pasted recipe text into title, ingredients and instructions.
///
/// The first non-empty line is the title. Header lines mentioning instructions
/// (or steps, method, directions) switch to the instruction section; header lines
/// mentioning ingredients (or items, need) switch back. Header lines themselves
/// are dropped.
pub fn parse_recipe_text(raw: &str) -> Result<Recipe, ImportError> {
    let lines: Vec<&str> = raw.split('\n').map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.len() < 2 {
        return Err(ImportError::NotEnoughText);
    }

    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();
    let mut in_instructions = false;

    for line in &lines[1..] {
        if mentions_any(line, INSTRUCTION_HEADERS) {
            in_instructions = true;
            continue;
        }
        if mentions_any(line, INGREDIENT_HEADERS) {
            in_instructions = false;
            continue;
        }
        if in_instructions {
            instructions.push(*line);
        } else {
            ingredients.push(*line);
        }
    }

    debug!(
        ingredients = ingredients.len(),
        instructions = instructions.len(),
        "parsed recipe text"
    );
    let mut recipe = Recipe::new(
        lines[0],
        IngredientSpec::FreeText(ingredients.join("\n")),
        instructions.join("\n"),
    );
    recipe.source = Some(SOURCE_TEXT_IMPORT.to_string());
    Ok(recipe)
}
