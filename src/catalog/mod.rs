mod builtin;
pub mod data_loader;

pub use data_loader::load_catalog_csv;

use serde::{Deserialize, Serialize};

/// Category used for pantry items whose category is missing or unknown.
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogCategory {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// The fixed reference list of ingredient names, grouped by category.
///
/// Catalog ingredients are treated as available by default: a user only has to
/// classify the ones they lack. Categories keep their insertion order, which is
/// also the tab order shown by hosts.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MasterCatalog {
    categories: Vec<CatalogCategory>,
}

impl MasterCatalog {
    pub fn new(categories: Vec<CatalogCategory>) -> Self {
        Self { categories }
    }

    /// The built-in table of seven categories.
    pub fn builtin() -> Self {
        let categories = builtin::BUILTIN_CATEGORIES
            .iter()
            .map(|(name, ingredients)| CatalogCategory {
                name: name.to_string(),
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Appends `ingredient` to `category`, creating the category at the end if needed.
    pub fn insert(&mut self, category: &str, ingredient: &str) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.ingredients.push(ingredient.to_string()),
            None => self.categories.push(CatalogCategory {
                name: category.to_string(),
                ingredients: vec![ingredient.to_string()],
            }),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn ingredients(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.ingredients.as_slice())
            .unwrap_or(&[])
    }

    /// Every ingredient name across all categories, in catalog order.
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.ingredients.iter().map(String::as_str))
    }

    /// Case-insensitive lookup of the category an ingredient belongs to.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.ingredients.iter().any(|i| i.to_lowercase() == wanted))
            .map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.category_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.ingredients.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
