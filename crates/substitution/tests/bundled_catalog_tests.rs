use serde::Deserialize;
use subkitchen_substitution::catalog::bundled;
use subkitchen_substitution::{
    normalize, AliasGroup, CatalogStore, Resolver, SubstitutionSource, MAX_SEARCH_RESULTS,
};

fn resolver() -> Resolver {
    Resolver::new(CatalogStore::bundled().expect("bundled catalogs must load"))
}

fn normalized_names(resolver: &Resolver, ingredient: &str) -> Vec<String> {
    resolver
        .get_substitutions(ingredient)
        .iter()
        .map(|item| normalize(&item.substitute_ingredient))
        .collect()
}

/// Sample inputs touching every catalog key plus a few awkward strings
fn sample_inputs(resolver: &Resolver) -> Vec<String> {
    let mut inputs: Vec<String> = resolver.store().all_known_keys().to_vec();
    inputs.extend(
        resolver
            .store()
            .aliases()
            .iter()
            .map(|(alias, _)| alias.to_string()),
    );
    inputs.extend(
        [
            "",
            "   ",
            "xyzzy-not-a-real-ingredient",
            "2% Milk!!",
            "EGGS",
            "Crème--Fraîche",
            "b",
        ]
        .map(String::from),
    );
    inputs
}

#[test]
fn test_butter_scenario() {
    let resolver = resolver();
    let items = resolver.get_substitutions("butter");

    assert!(!items.is_empty());
    assert_eq!(items[0].substitute_ingredient, "Margarine");
    assert_eq!(
        normalized_names(&resolver, "butter")
            .iter()
            .filter(|name| *name == "coconut oil")
            .count(),
        1
    );
}

#[test]
fn test_milk_aliases_share_results() {
    let resolver = resolver();
    let milk = resolver.get_substitutions("milk");

    assert!(!milk.is_empty());
    for variant in ["2% milk", "Whole Milk", "skim milk", "nonfat milk", "  2%   MILK "] {
        assert_eq!(resolver.get_substitutions(variant), milk, "variant {variant:?}");
    }
}

#[test]
fn test_search_but_ranks_butter_first() {
    let resolver = resolver();
    let results = resolver.search_ingredients("but");

    let butter = results
        .iter()
        .position(|key| key == "butter")
        .expect("butter must be found");
    let first_contains = results
        .iter()
        .position(|key| !key.starts_with("but"))
        .unwrap_or(results.len());

    assert!(butter < first_contains);
    assert!(results.contains(&"peanut butter".to_string()));
}

#[test]
fn test_eggs_flax_and_applesauce_once() {
    let resolver = resolver();
    let names = normalized_names(&resolver, "eggs");

    assert_eq!(names.iter().filter(|name| name.contains("flax")).count(), 1);
    assert_eq!(
        names
            .iter()
            .filter(|name| name.contains("applesauce"))
            .count(),
        1
    );

    // Both catalogs define applesauce; primary's ratio is kept
    let applesauce = resolver
        .get_substitutions("egg")
        .into_iter()
        .find(|item| normalize(&item.substitute_ingredient) == "unsweetened applesauce")
        .unwrap();
    assert_eq!(applesauce.ratio, "¼ cup = 1 egg");
    assert!(applesauce.nutrition.is_some());
}

#[test]
fn test_sour_cream_suggestions() {
    let suggestions = resolver().generate_suggestions("  Sour Cream  ");

    assert_eq!(suggestions.query, "Sour Cream");
    assert!(!suggestions.substitutions.is_empty());
}

#[test]
fn test_empty_and_unknown_inputs() {
    let resolver = resolver();

    assert!(resolver.get_substitutions("").is_empty());
    assert!(resolver
        .get_substitutions("xyzzy-not-a-real-ingredient")
        .is_empty());
    assert!(resolver.search_ingredients("").is_empty());
    assert!(resolver.search_ingredients("   ").is_empty());
}

#[test]
fn test_unicode_keys_reachable_from_ascii_spelling() {
    let resolver = resolver();

    assert!(!resolver.get_substitutions("creme fraiche").is_empty());
    assert_eq!(
        resolver.get_substitutions("Jalapeno"),
        resolver.get_substitutions("jalapeño")
    );
}

#[test]
fn test_normalization_idempotent_over_samples() {
    let resolver = resolver();

    for input in sample_inputs(&resolver) {
        let once = normalize(&input);
        assert_eq!(normalize(&once), once, "input {input:?}");
    }
}

#[test]
fn test_alias_closure() {
    let resolver = resolver();
    let aliases = resolver.store().aliases();

    for (alias, canonical) in aliases.iter() {
        assert_eq!(aliases.to_canonical_key(alias), canonical);
        assert_eq!(aliases.to_canonical_key(canonical), canonical);
    }
}

#[test]
fn test_authored_alias_table_has_no_conflicts() {
    let groups: Vec<AliasGroup> = serde_json::from_str(bundled::ALIASES_JSON).unwrap();
    let mut targets = std::collections::HashMap::new();

    for group in &groups {
        for alias in &group.aliases {
            let previous = targets.insert(normalize(alias), normalize(&group.canonical));
            assert!(
                previous.is_none() || previous == Some(normalize(&group.canonical)),
                "alias {alias:?} points at two canonical keys"
            );
        }
    }
}

#[test]
fn test_every_supplemental_key_is_reachable() {
    #[derive(Deserialize)]
    struct Record {
        key: String,
    }

    let resolver = resolver();
    let records: Vec<Record> = serde_json::from_str(bundled::SUPPLEMENTAL_JSON).unwrap();

    for record in records {
        assert_eq!(resolver.canonical_key(&record.key), record.key);
        assert!(
            !resolver.get_substitutions(&record.key).is_empty(),
            "{} has no substitutes",
            record.key
        );
    }
}

#[test]
fn test_results_never_repeat_a_substitute() {
    let resolver = resolver();

    for input in sample_inputs(&resolver) {
        let names = normalized_names(&resolver, &input);
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicates for {input:?}");
        assert!(names.iter().all(|name| !name.is_empty()));
    }
}

#[test]
fn test_primary_precedence_on_name_collision() {
    let resolver = resolver();
    let store = resolver.store();

    for key in store.all_known_keys() {
        let canonical = resolver.canonical_key(key);
        let Some(entry) = store.find_primary_entry(&canonical) else {
            continue;
        };

        let merged = resolver.get_substitutions(&canonical);
        for supplemental in store.find_supplemental_items(&canonical) {
            let name = normalize(&supplemental.substitute_ingredient);
            let Some(primary) = entry
                .substitutions
                .iter()
                .find(|item| normalize(&item.substitute_ingredient) == name)
            else {
                continue;
            };

            let returned = merged
                .iter()
                .find(|item| normalize(&item.substitute_ingredient) == name)
                .unwrap();
            assert_eq!(returned, primary);
        }
    }
}

#[test]
fn test_search_cap_and_partition() {
    let resolver = resolver();
    let queries = ["", "a", "e", "r", "but", "milk", "oil", "sugar", "zzz", "%"];

    for query in queries {
        let results = resolver.search_ingredients(query);
        assert!(results.len() <= MAX_SEARCH_RESULTS);

        let normalized = normalize(query);
        let first_contains = results
            .iter()
            .position(|key| !key.starts_with(&normalized))
            .unwrap_or(results.len());
        assert!(
            results[first_contains..]
                .iter()
                .all(|key| !key.starts_with(&normalized) && key.contains(&normalized)),
            "partition broken for {query:?}"
        );
    }
}

#[test]
fn test_search_results_resolve_to_substitutions() {
    let resolver = resolver();

    for key in resolver.search_ingredients("cream") {
        assert!(
            !resolver.get_substitutions(&key).is_empty(),
            "search returned {key} without substitutes"
        );
    }
}

#[test]
fn test_sources_in_precedence_order() {
    let resolver = resolver();
    let names: Vec<&str> = resolver
        .store()
        .sources()
        .iter()
        .map(|source| source.name())
        .collect();

    assert_eq!(names, ["primary", "supplemental"]);
}
