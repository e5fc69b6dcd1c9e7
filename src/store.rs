use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::pantry::{Pantry, PantryRecord};
use crate::recipe::Recipe;

fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!("{:?} does not exist yet, starting empty", path);
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse JSON in {:?}", path))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}

/// Reads pantry records and normalizes legacy fields. A missing file is an empty pantry.
pub fn load_pantry(path: &Path) -> Result<Pantry> {
    let records: Vec<PantryRecord> = read_json_list(path)?;
    let total = records.len();
    let pantry = Pantry::from_records(records);
    debug!(records = total, items = pantry.items().len(), "loaded pantry from {:?}", path);
    Ok(pantry)
}

/// Writes the pantry with both `status` and the legacy `available` flag.
pub fn save_pantry(path: &Path, pantry: &Pantry) -> Result<()> {
    let records: Vec<PantryRecord> = pantry.items().iter().map(PantryRecord::from).collect();
    write_json(path, &records)
}

pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    read_json_list(path)
}

pub fn save_recipes(path: &Path, recipes: &[Recipe]) -> Result<()> {
    write_json(path, recipes)
}
