//! End-to-end checks of the combining engine through the public API.

use std::collections::BTreeSet;
use std::sync::Arc;

use grocer::combiner::SequentialIds;
use grocer::models::MergeStatus;
use grocer::registry::{parse_registries, Registries};
use grocer::{CombineEngine, CombinedItem, GroceryItem};

fn engine() -> CombineEngine {
    CombineEngine::new(Registries::builtin(), Arc::new(SequentialIds::default()))
}

fn shopping_list() -> Vec<GroceryItem> {
    vec![
        GroceryItem::new("1", "2 cloves garlic").with_recipe_ids(["stir-fry"]),
        GroceryItem::new("2", "1 yellow onion, diced"),
        GroceryItem::new("3", "1 head garlic").with_checked(true),
        GroceryItem::new("4", "8 tablespoons butter"),
        GroceryItem::new("5", "2 tomatoes"),
        GroceryItem::new("6", "minced garlic, 2 tablespoons").with_recipe_ids(["pasta"]),
        GroceryItem::new("7", "1 stick butter"),
        GroceryItem::new("8", "1 tomato"),
        GroceryItem::new("9", "1 cup rice"),
    ]
}

/// Everything but the generated ID, with sources in a stable order
fn comparable(items: &[CombinedItem]) -> Vec<(String, bool, BTreeSet<String>, String)> {
    items
        .iter()
        .map(|c| {
            (
                c.display_name.clone(),
                c.checked,
                c.source_item_ids.iter().cloned().collect(),
                c.section.clone(),
            )
        })
        .collect()
}

#[test]
fn every_source_id_appears_exactly_once() {
    let list = shopping_list();
    let combined = engine().combine(&list);

    let mut seen: Vec<&str> = combined
        .iter()
        .flat_map(|c| c.source_item_ids.iter().map(String::as_str))
        .collect();
    seen.sort_unstable();
    let mut expected: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn checked_when_any_source_is_checked() {
    let combined = engine().combine(&shopping_list());
    for entry in &combined {
        let any_checked = shopping_list()
            .iter()
            .filter(|i| entry.source_item_ids.contains(&i.id))
            .any(|i| i.checked);
        assert_eq!(entry.checked, any_checked, "{}", entry.display_name);
    }
    let garlic = combined.iter().find(|c| c.family == "garlic").unwrap();
    assert!(garlic.checked);
}

#[test]
fn combined_flag_matches_source_count() {
    for entry in engine().combine(&shopping_list()) {
        assert_eq!(entry.is_combined, entry.source_item_ids.len() > 1);
    }
}

#[test]
fn input_order_does_not_change_result() {
    let forward = engine().combine(&shopping_list());
    let mut reversed_list = shopping_list();
    reversed_list.reverse();
    let reversed = engine().combine(&reversed_list);
    assert_eq!(comparable(&forward), comparable(&reversed));
}

#[test]
fn recombining_distinct_families_is_stable() {
    let first = engine().combine(&[
        GroceryItem::new("a", "garlic"),
        GroceryItem::new("b", "onion"),
        GroceryItem::new("c", "tomato"),
    ]);
    let again: Vec<GroceryItem> = first
        .iter()
        .map(|c| GroceryItem::new(c.id.clone(), c.display_name.clone()))
        .collect();
    let second = engine().combine(&again);
    let names = |items: &[CombinedItem]| items.iter().map(|c| c.display_name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&first), names(&second));
}

#[test]
fn full_list_merges_and_sorts_by_section() {
    let combined = engine().combine(&shopping_list());
    let names: Vec<&str> = combined.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "1 yellow onion, diced",
            "18 cloves garlic (some minced)",
            "3 tomato",
            "16 tablespoon butter",
            "1 cup rice",
        ]
    );
    let garlic = &combined[1];
    assert_eq!(garlic.merge_status, MergeStatus::Exact);
    assert_eq!(
        garlic.recipe_ids,
        BTreeSet::from(["pasta".to_string(), "stir-fry".to_string()])
    );
}

#[test]
fn custom_registry_changes_grouping() {
    let registries = parse_registries(
        r#"{
            "families": [
                {"name": "scallion", "variations": ["scallion", "green onion"], "section": "produce"}
            ],
            "conversions": [
                {"family": "scallion", "base_unit": "stalk",
                 "multipliers": [{"unit": "bunch", "factor": 6.0}]}
            ]
        }"#,
    )
    .unwrap();
    let engine = CombineEngine::new(registries, Arc::new(SequentialIds::default()));
    let combined = engine.combine(&[
        GroceryItem::new("1", "1 bunch green onion"),
        GroceryItem::new("2", "2 stalk scallions"),
    ]);
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].display_name, "8 stalk scallion");
    assert_eq!(combined[0].section, "produce");
}
