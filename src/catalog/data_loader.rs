use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, warn};

use super::MasterCatalog;

// Expected column headers
const CATEGORY_COL: &str = "Category";
const INGREDIENT_COL: &str = "Ingredient";

/// Loads a catalog from a CSV file with `Category,Ingredient` headers.
///
/// Rows keep file order; a category is created the first time it is seen.
pub fn load_catalog_csv(csv_path: &Path) -> Result<MasterCatalog> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Catalog CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open catalog CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(file);

    let headers = rdr.headers()?.clone();
    let category_idx = headers
        .iter()
        .position(|h| h == CATEGORY_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", CATEGORY_COL))?;
    let ingredient_idx = headers
        .iter()
        .position(|h| h == INGREDIENT_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", INGREDIENT_COL))?;

    let mut catalog = MasterCatalog::default();
    for (row_index, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let ingredient = record.get(ingredient_idx).unwrap_or("").trim();
        if ingredient.is_empty() {
            warn!(row = row_index + 1, "skipping catalog row with empty ingredient name");
            continue;
        }
        let category = match record.get(category_idx).map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => super::DEFAULT_CATEGORY,
        };
        catalog.insert(category, ingredient);
    }

    if catalog.is_empty() {
        return Err(anyhow::anyhow!("No valid catalog data loaded from {:?}", csv_path));
    }

    debug!(ingredients = catalog.len(), "loaded catalog from {:?}", csv_path);
    Ok(catalog)
}
