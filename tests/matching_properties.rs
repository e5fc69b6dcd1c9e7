use pantry_match::availability::AvailabilityIndex;
use pantry_match::catalog::MasterCatalog;
use pantry_match::pantry::{Pantry, PantryItem, PantryRecord, PantryStatus};
use pantry_match::recipe::{IngredientSpec, Recipe};
use pantry_match::scorer::score_recipes;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn text_recipe(name: &str, lines: &[&str]) -> Recipe {
    Recipe::new(name, IngredientSpec::FreeText(lines.join("\n")), "")
}

fn sample_pantry() -> Vec<PantryItem> {
    vec![
        PantryItem::new("Garlic", "Produce", PantryStatus::DontHave),
        PantryItem::new("Heavy Cream", "Dairy", PantryStatus::Seldom),
        PantryItem::new("Gochujang", "Sauces", PantryStatus::Have),
        PantryItem::new("Truffle Oil", "Pantry", PantryStatus::DontHave),
    ]
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        text_recipe("Garlic Bread", &["1 loaf White Bread", "4 cloves garlic", "3 tbsp butter"]),
        text_recipe("Creamy Pasta", &["200g pasta", "1 cup heavy cream", "parmesan cheese"]),
        text_recipe("Spicy Rice", &["2 cups jasmine rice", "1 tbsp gochujang"]),
        text_recipe("Empty", &[]),
        text_recipe("Truffle Fries", &["russet potato", "truffle oil", "sea salt"]),
    ]
}

#[test]
fn scoring_is_idempotent() {
    let catalog = MasterCatalog::builtin();
    let pantry = sample_pantry();
    let recipes = sample_recipes();

    let first = score_recipes(&recipes, &AvailabilityIndex::build(&pantry, &catalog), None);
    let second = score_recipes(&recipes, &AvailabilityIndex::build(&pantry, &catalog), None);
    assert_eq!(first, second);
}

#[test]
fn unclassified_catalog_ingredients_are_available() {
    let catalog = MasterCatalog::builtin();
    let pantry = sample_pantry();
    let index = AvailabilityIndex::build(&pantry, &catalog);

    let classified: Vec<String> = pantry.iter().map(|p| p.name.to_lowercase()).collect();
    for name in catalog.iter_names() {
        let lower = name.to_lowercase();
        if !classified.contains(&lower) {
            assert!(index.contains(&lower), "{} should default to available", name);
        }
    }
}

#[test]
fn non_have_pantry_items_are_never_available() {
    let catalog = MasterCatalog::builtin();
    let pantry = sample_pantry();
    let index = AvailabilityIndex::build(&pantry, &catalog);

    for item in pantry.iter().filter(|p| p.status != PantryStatus::Have) {
        assert!(!index.iter().any(|n| n == item.name.to_lowercase()), "{} leaked", item.name);
    }
    assert!(index.contains("gochujang"));
}

#[test]
fn empty_pantry_makes_the_whole_catalog_available() {
    let catalog = MasterCatalog::builtin();
    let index = AvailabilityIndex::build(&[], &catalog);
    let mut expected: Vec<String> = catalog.iter_names().map(str::to_lowercase).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(index.len(), expected.len());
}

#[test]
fn pantry_order_does_not_change_availability() {
    let catalog = MasterCatalog::builtin();
    let mut pantry = sample_pantry();
    let expected = AvailabilityIndex::build(&pantry, &catalog);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        pantry.shuffle(&mut rng);
        assert_eq!(AvailabilityIndex::build(&pantry, &catalog), expected);
    }
}

#[test]
fn empty_ingredient_string_scores_zero() {
    let index = AvailabilityIndex::build(&[], &MasterCatalog::builtin());
    let recipes = vec![Recipe::new("Nothing", IngredientSpec::FreeText(String::new()), "")];
    assert_eq!(score_recipes(&recipes, &index, None)[0].percent, 0);
}

#[test]
fn two_of_three_rounds_to_67() {
    let index = AvailabilityIndex::from_names(["garlic", "olive oil", "pasta"]);
    let recipes = vec![text_recipe(
        "Aglio e Olio",
        &["3 cloves Garlic, minced", "1 cup Heavy Cream", "2 tbsp Olive Oil"],
    )];
    assert_eq!(score_recipes(&recipes, &index, None)[0].percent, 67);
}

#[test]
fn ranking_is_descending_and_stable() {
    // Percentages 40, 90, 90, 10 for A, B, C, D.
    let index = AvailabilityIndex::from_names(["hit"]);
    let build = |name: &str, hits: usize, total: usize| {
        let lines: Vec<&str> = (0..total).map(|i| if i < hits { "hit" } else { "miss" }).collect();
        text_recipe(name, &lines)
    };
    let recipes = vec![build("A", 2, 5), build("B", 9, 10), build("C", 9, 10), build("D", 1, 10)];

    let names: Vec<String> = score_recipes(&recipes, &index, None)
        .into_iter()
        .map(|r| r.recipe.name)
        .collect();
    assert_eq!(names, vec!["B", "C", "A", "D"]);
}

#[test]
fn uppercase_pantry_item_satisfies_lowercase_line() {
    let pantry = Pantry::from_records(vec![PantryRecord {
        name: Some("TOMATO".into()),
        status: Some("have".into()),
        ..Default::default()
    }]);
    let index = AvailabilityIndex::build(pantry.items(), &MasterCatalog::default());
    let recipes = vec![text_recipe("Salad", &["2 fresh tomatoes"])];
    assert_eq!(score_recipes(&recipes, &index, None)[0].percent, 100);
}

#[test]
fn structured_entries_match_on_the_name_field() {
    let index = AvailabilityIndex::from_names(["tomato sauce"]);
    let recipes = vec![Recipe::new(
        "Marinara",
        IngredientSpec::StructuredLines(vec!["2 cups, Tomato Sauce, Marinara, Pantry".into()]),
        "",
    )];
    let ranked = score_recipes(&recipes, &index, None);
    assert_eq!(ranked[0].percent, 100);
    assert_eq!(ranked[0].lines[0].text, "2 cups, Tomato Sauce, Marinara, Pantry");
}

#[test]
fn opting_out_of_a_catalog_item_lowers_the_score() {
    let catalog = MasterCatalog::builtin();
    // "cloves" would also hit the catalog's "Clove", so name the garlic by the head.
    let recipes = vec![text_recipe("Garlic Bread", &["1 loaf White Bread", "1 head garlic"])];

    let before = score_recipes(&recipes, &AvailabilityIndex::build(&[], &catalog), None);
    assert_eq!(before[0].percent, 100);

    let mut pantry = Pantry::default();
    pantry.set_status("Garlic", PantryStatus::DontHave, "Produce").unwrap();
    let after = score_recipes(&recipes, &AvailabilityIndex::build(pantry.items(), &catalog), None);
    assert_eq!(after[0].percent, 50);
    assert_eq!(after[0].missing().collect::<Vec<_>>(), vec!["1 head garlic"]);
}

#[test]
fn legacy_and_unstated_statuses() {
    let records: Vec<PantryRecord> = serde_json::from_str(
        r#"[
            {"name": "Saffron Threads", "available": true},
            {"name": "Garlic", "available": false},
            {"name": "Onion"},
            {"name": "Salt", "status": "out_of_stock", "available": true}
        ]"#,
    )
    .unwrap();
    let pantry = Pantry::from_records(records);
    let index = AvailabilityIndex::build(pantry.items(), &MasterCatalog::builtin());

    assert!(index.contains("saffron threads"));
    assert!(!index.contains("garlic"));
    // No status and no legacy flag fails closed.
    assert!(!index.contains("onion"));
    assert!(!index.contains("salt"));
}

#[test]
fn null_recipe_fields_score_zero() {
    let recipes: Vec<Recipe> =
        serde_json::from_str(r#"[{"name":null,"ingredients":null,"instructions":null}]"#).unwrap();
    let index = AvailabilityIndex::build(&[], &MasterCatalog::builtin());
    let ranked = score_recipes(&recipes, &index, None);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].percent, 0);
    assert_eq!(ranked[0].recipe.name, "");
}
