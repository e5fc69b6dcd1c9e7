use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::AvailabilityIndex;
use crate::matcher::MatchPolicy;
use crate::recipe::Recipe;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineMatch {
    pub text: String,
    pub matched: bool,
}

/// Per-recipe result of matching every ingredient line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeScore {
    pub lines: Vec<LineMatch>,
    pub matched: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub percent: u8,
    pub lines: Vec<LineMatch>,
}

impl ScoredRecipe {
    /// Ingredient lines not satisfied by the pantry.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter(|l| !l.matched).map(|l| l.text.as_str())
    }
}

/// `round(100 * matched / total)` with halves rounded up, computed exactly.
pub fn match_percent(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    ((200 * matched + total) / (2 * total)) as u8
}

pub fn score_recipe(
    recipe: &Recipe,
    index: &AvailabilityIndex,
    policy: MatchPolicy,
) -> RecipeScore {
    let lines: Vec<LineMatch> = recipe
        .ingredient_lines()
        .into_iter()
        .map(|line| LineMatch {
            matched: policy.is_line_available(&line.match_text, index),
            text: line.text,
        })
        .collect();
    let matched = lines.iter().filter(|l| l.matched).count();
    let total = lines.len();
    RecipeScore {
        percent: match_percent(matched, total),
        lines,
        matched,
        total,
    }
}

/// Ranks recipes by how much of each can be cooked from the pantry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeScorer {
    pub policy: MatchPolicy,
}

impl RecipeScorer {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Scores every recipe, keeps those whose name contains `search`
    /// (case-insensitive), and orders them by percent, highest first. Recipes
    /// with equal percent keep their input order.
    pub fn rank(
        &self,
        recipes: &[Recipe],
        index: &AvailabilityIndex,
        search: Option<&str>,
    ) -> Vec<ScoredRecipe> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();

        let mut scored: Vec<ScoredRecipe> = recipes
            .par_iter()
            .map(|recipe| {
                let score = score_recipe(recipe, index, self.policy);
                ScoredRecipe {
                    recipe: recipe.clone(),
                    percent: score.percent,
                    lines: score.lines,
                }
            })
            .collect();

        scored.retain(|r| r.recipe.name.to_lowercase().contains(&needle));
        // Vec::sort_by_key is stable.
        scored.sort_by_key(|r| std::cmp::Reverse(r.percent));

        debug!(recipes = recipes.len(), shown = scored.len(), "ranked recipes");
        scored
    }
}

/// Ranks with the default substring policy.
pub fn score_recipes(
    recipes: &[Recipe],
    index: &AvailabilityIndex,
    search: Option<&str>,
) -> Vec<ScoredRecipe> {
    RecipeScorer::default().rank(recipes, index, search)
}
