use serde::{Deserialize, Deserializer, Serialize};

/// The two shapes a recipe's ingredient list arrives in.
///
/// `FreeText` is one newline-delimited string; `StructuredLines` holds entries of
/// the form `"Amount, Name, Info, Category"`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum IngredientSpec {
    FreeText(String),
    StructuredLines(Vec<String>),
}

impl Default for IngredientSpec {
    fn default() -> Self {
        IngredientSpec::FreeText(String::new())
    }
}

/// A single ingredient line: `text` is shown to the user, `match_text` is what
/// gets compared against the availability index.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IngredientLine {
    pub text: String,
    pub match_text: String,
}

impl IngredientSpec {
    pub fn lines(&self) -> Vec<IngredientLine> {
        match self {
            IngredientSpec::FreeText(text) => text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| IngredientLine {
                    text: line.to_string(),
                    match_text: line.to_string(),
                })
                .collect(),
            IngredientSpec::StructuredLines(entries) => entries
                .iter()
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .map(|entry| IngredientLine {
                    text: entry.to_string(),
                    match_text: StructuredIngredient::parse(entry).match_name().to_string(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// Fields of an `"Amount, Name, Info, Category"` entry. Trailing fields are optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StructuredIngredient {
    pub amount: String,
    pub name: Option<String>,
    pub info: Option<String>,
    pub category: Option<String>,
}

impl StructuredIngredient {
    pub fn parse(entry: &str) -> Self {
        let mut parts = entry.split(',').map(|p| p.trim().to_string());
        Self {
            amount: parts.next().unwrap_or_default(),
            name: parts.next(),
            info: parts.next(),
            category: parts.next(),
        }
    }

    /// The second field when present, otherwise the first.
    pub fn match_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.amount)
    }
}

// Stored documents may carry explicit nulls; treat them like absent fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: IngredientSpec,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: IngredientSpec,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
            source: None,
        }
    }

    /// Overwrites the fields set in `edit`; free-text ingredients replace either shape.
    pub fn apply_edit(&mut self, edit: RecipeEdit) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(ingredients) = edit.ingredients {
            self.ingredients = IngredientSpec::FreeText(ingredients);
        }
        if let Some(instructions) = edit.instructions {
            self.instructions = instructions;
        }
        if let Some(source) = edit.source {
            self.source = Some(source);
        }
    }

    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        self.ingredients.lines()
    }

    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }
}

/// Fields to replace on an existing recipe. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeEdit {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub source: Option<String>,
}

/// Index of the first recipe named `name`, ignoring case.
pub fn position_by_name(recipes: &[Recipe], name: &str) -> Option<usize> {
    let lower = name.trim().to_lowercase();
    recipes.iter().position(|r| r.name.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_lines_trimmed_and_filtered() {
        let spec = IngredientSpec::FreeText("  2 eggs \n\n\t\n1 cup flour\n".to_string());
        let lines = spec.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "2 eggs");
        assert_eq!(lines[1].match_text, "1 cup flour");
        assert!(IngredientSpec::default().is_empty());
    }

    #[test]
    fn test_structured_extracts_second_field() {
        let parsed = StructuredIngredient::parse("2 cups, Tomato Sauce, Marinara, Pantry");
        assert_eq!(parsed.amount, "2 cups");
        assert_eq!(parsed.match_name(), "Tomato Sauce");
        assert_eq!(parsed.category.as_deref(), Some("Pantry"));

        let single = StructuredIngredient::parse("Salt");
        assert_eq!(single.match_name(), "Salt");
        assert_eq!(single.info, None);
    }

    #[test]
    fn test_structured_lines_keep_whole_entry_for_display() {
        let spec = IngredientSpec::StructuredLines(vec![
            "2 cups, Tomato Sauce, Marinara, Pantry".to_string(),
            "  ".to_string(),
            "1, Onion".to_string(),
        ]);
        let lines = spec.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "2 cups, Tomato Sauce, Marinara, Pantry");
        assert_eq!(lines[0].match_text, "Tomato Sauce");
        assert_eq!(lines[1].match_text, "Onion");
    }

    #[test]
    fn test_recipe_deserializes_both_shapes() {
        let text: Recipe = serde_json::from_str(
            r#"{"name":"Toast","ingredients":"Bread\nButter","instructions":"Toast it"}"#,
        )
        .unwrap();
        assert_eq!(text.ingredient_lines().len(), 2);

        let structured: Recipe = serde_json::from_str(
            r#"{"name":"Soup","ingredients":["1, Onion","2 cups, Chicken Stock"]}"#,
        )
        .unwrap();
        assert!(matches!(structured.ingredients, IngredientSpec::StructuredLines(_)));
        assert_eq!(structured.instructions, "");

        let bare: Recipe = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.name, "");
        assert!(bare.ingredients.is_empty());
    }

    #[test]
    fn test_instruction_steps() {
        let recipe = Recipe::new("X", IngredientSpec::default(), "Boil water\n\n  Add pasta  \n");
        assert_eq!(recipe.instruction_steps(), vec!["Boil water", "Add pasta"]);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"name":null,"ingredients":null,"instructions":null,"source":null}"#,
        )
        .unwrap();
        assert_eq!(recipe.name, "");
        assert!(recipe.ingredient_lines().is_empty());
        assert!(recipe.instruction_steps().is_empty());
        assert_eq!(recipe.source, None);
    }

    #[test]
    fn test_apply_edit_keeps_unset_fields() {
        let mut recipe = Recipe::new(
            "Soup",
            IngredientSpec::StructuredLines(vec!["1, Onion".into()]),
            "Simmer",
        );
        recipe.apply_edit(RecipeEdit {
            ingredients: Some("1 onion\n2 carrots".into()),
            ..RecipeEdit::default()
        });
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.instructions, "Simmer");
        assert_eq!(recipe.ingredients, IngredientSpec::FreeText("1 onion\n2 carrots".into()));

        recipe.apply_edit(RecipeEdit {
            name: Some("Carrot Soup".into()),
            source: Some("Grandma".into()),
            ..RecipeEdit::default()
        });
        assert_eq!(recipe.name, "Carrot Soup");
        assert_eq!(recipe.source.as_deref(), Some("Grandma"));
    }

    #[test]
    fn test_position_by_name_ignores_case() {
        let recipes = vec![
            Recipe::new("Toast", IngredientSpec::default(), ""),
            Recipe::new("Pad Thai", IngredientSpec::default(), ""),
        ];
        assert_eq!(position_by_name(&recipes, "pad thai"), Some(1));
        assert_eq!(position_by_name(&recipes, "Ramen"), None);
    }
}
