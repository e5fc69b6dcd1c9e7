use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::{info, warn};

use pantry_match::api_connection::GeminiClient;
use pantry_match::availability::AvailabilityIndex;
use pantry_match::catalog::{load_catalog_csv, MasterCatalog, DEFAULT_CATEGORY};
use pantry_match::cli::{parse_args, Command, PantryCommand, RecipeCommand};
use pantry_match::config::AppConfig;
use pantry_match::import::{self, SOURCE_BATCH_SCAN, SOURCE_PHOTO_SCAN};
use pantry_match::pantry::{Pantry, PantryStatus};
use pantry_match::recipe::{position_by_name, IngredientSpec, Recipe, RecipeEdit};
use pantry_match::scorer::RecipeScorer;
use pantry_match::{logging, store};

// Pause between photos in a batch import to stay under API rate limits.
const BATCH_DELAY: Duration = Duration::from_secs(1);

fn category_for(name: &str, pantry: &Pantry, catalog: &MasterCatalog) -> String {
    pantry
        .get(name)
        .map(|item| item.category.clone())
        .or_else(|| catalog.category_of(name).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

fn print_columns(pantry: &Pantry, catalog: &MasterCatalog, category: &str) {
    println!("== {} ==", category);
    for status in PantryStatus::ALL {
        let entries = pantry.column(category, status, catalog);
        let names: Vec<String> = entries
            .iter()
            .map(|e| if e.is_custom { format!("{}*", e.name) } else { e.name.clone() })
            .collect();
        println!("  {:<10} {}", status.as_str(), names.join(", "));
    }
}

fn handle_pantry(
    command: PantryCommand,
    config: &AppConfig,
    catalog: &MasterCatalog,
) -> Result<()> {
    let path = config.pantry_path();
    let mut pantry = store::load_pantry(&path)?;

    match command {
        PantryCommand::Add { name, category } => {
            let item = pantry.add_custom(&name, &category, catalog)?;
            println!("Added: {} ({})", item.name, item.category);
        }
        PantryCommand::Set { name, status } => {
            let category = category_for(&name, &pantry, catalog);
            let item = pantry.set_status(&name, status, &category)?;
            println!("{} -> {}", item.name, item.status);
        }
        PantryCommand::Cycle { name } => {
            // Unclassified catalog items sit in the "have" column.
            let current = pantry.get(&name).map_or(PantryStatus::Have, |item| item.status);
            let category = category_for(&name, &pantry, catalog);
            let item = pantry.cycle_status(&name, current, &category)?;
            println!("{} -> {}", item.name, item.status);
        }
        PantryCommand::Move { name, category } => {
            let item = pantry.recategorize(&name, &category)?;
            println!("Moved {} to {}", item.name, item.category);
        }
        PantryCommand::Remove { name } => {
            let removed = pantry.remove(&name, catalog)?;
            println!("Deleted: {}", removed.name);
        }
        PantryCommand::Show { category } => {
            match category {
                Some(category) => print_columns(&pantry, catalog, &category),
                None => {
                    for category in catalog.categories() {
                        print_columns(&pantry, catalog, category);
                    }
                }
            }
            return Ok(());
        }
    }

    store::save_pantry(&path, &pantry)
}

async fn import_images(files: &[PathBuf], client: &GeminiClient) -> Vec<Recipe> {
    let source = if files.len() > 1 { SOURCE_BATCH_SCAN } else { SOURCE_PHOTO_SCAN };
    let mut imported = Vec::new();

    for (idx, file) in files.iter().enumerate() {
        info!("Processing file {} of {}: {:?}", idx + 1, files.len(), file);
        if idx > 0 {
            tokio::time::sleep(BATCH_DELAY).await;
        }
        let bytes = match fs::read(file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read {:?}: {}", file, e);
                continue;
            }
        };
        match import::extract_recipe_from_image(&bytes, client, source).await {
            Ok(recipe) => {
                info!("Extracted: {}", recipe.name);
                imported.push(recipe);
            }
            // A failed photo does not stop the batch.
            Err(e) => warn!("File {} returned no recipe: {}", idx + 1, e),
        }
    }
    imported
}

async fn handle_recipe(command: RecipeCommand, config: &AppConfig) -> Result<()> {
    let path = config.recipes_path();
    let mut recipes = store::load_recipes(&path)?;

    match command {
        RecipeCommand::List => {
            for recipe in &recipes {
                println!(
                    "{} ({} ingredients, {} steps)",
                    recipe.name,
                    recipe.ingredient_lines().len(),
                    recipe.instruction_steps().len()
                );
            }
            return Ok(());
        }
        RecipeCommand::Add {
            name,
            ingredients,
            instructions,
            source,
        } => {
            if name.trim().is_empty() {
                return Err(anyhow!("Recipe name must not be empty"));
            }
            let mut recipe = Recipe::new(name, IngredientSpec::FreeText(ingredients), instructions);
            recipe.source = source.filter(|s| !s.trim().is_empty());
            recipes.push(recipe);
        }
        RecipeCommand::Edit {
            name,
            new_name,
            ingredients,
            instructions,
            source,
        } => {
            if new_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(anyhow!("Recipe name must not be empty"));
            }
            let idx = position_by_name(&recipes, &name)
                .ok_or_else(|| anyhow!("No recipe named '{}'", name))?;
            recipes[idx].apply_edit(RecipeEdit {
                name: new_name,
                ingredients,
                instructions,
                source,
            });
            println!("Recipe updated: {}", recipes[idx].name);
        }
        RecipeCommand::ImportText { file } => {
            let raw = fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read recipe file '{}'", file.display()))?;
            let recipe = import::parse_recipe_text(&raw)?;
            println!("Imported: {}", recipe.name);
            recipes.push(recipe);
        }
        RecipeCommand::ImportImage { files } => {
            let client = GeminiClient::from_config(config);
            let imported = import_images(&files, &client).await;
            if imported.is_empty() {
                return Err(anyhow!("No recipes could be extracted from {} file(s)", files.len()));
            }
            println!("Imported {} of {} photo(s)", imported.len(), files.len());
            recipes.extend(imported);
        }
        RecipeCommand::Remove { name } => {
            let idx = position_by_name(&recipes, &name)
                .ok_or_else(|| anyhow!("No recipe named '{}'", name))?;
            let removed = recipes.remove(idx);
            println!("Deleted: {}", removed.name);
        }
    }

    store::save_recipes(&path, &recipes)
}

fn load_catalog(config: &AppConfig) -> Result<MasterCatalog> {
    match &config.catalog_path {
        Some(path) => load_catalog_csv(path),
        None => Ok(MasterCatalog::builtin()),
    }
}

fn rank(
    config: &AppConfig,
    catalog: &MasterCatalog,
    search: Option<&str>,
    missing: bool,
    json: bool,
) -> Result<()> {
    let pantry = store::load_pantry(&config.pantry_path())?;
    let recipes = store::load_recipes(&config.recipes_path())?;
    let index = AvailabilityIndex::build(pantry.items(), catalog);

    let ranked = RecipeScorer::new(config.match_policy).rank(&recipes, &index, search);
    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }
    if ranked.is_empty() {
        println!("No recipes found.");
    }
    for scored in &ranked {
        println!("{:>3}%  {}", scored.percent, scored.recipe.name);
        if missing {
            for line in scored.missing() {
                println!("        - {}", line);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    logging::init(cli.verbose);

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(policy) = cli.policy {
        config.match_policy = policy;
    }
    let catalog = load_catalog(&config)?;

    match cli.command {
        Command::Rank {
            search,
            missing,
            json,
        } => rank(&config, &catalog, search.as_deref(), missing, json),
        Command::Available { category } => {
            let pantry = store::load_pantry(&config.pantry_path())?;
            let index = AvailabilityIndex::build(pantry.items(), &catalog);
            for name in index.sorted() {
                let in_category = category.as_deref().map_or(true, |c| {
                    category_for(name, &pantry, &catalog).eq_ignore_ascii_case(c)
                });
                if in_category {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        Command::Pantry(command) => handle_pantry(command, &config, &catalog),
        Command::Recipe(command) => handle_recipe(command, &config).await,
    }
}
