use std::collections::HashMap;

use crate::catalog::SubstitutionSource;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{CatalogEntry, SubstitutionItem};
use crate::normalize::normalize;

/// Synonym-aware catalog of original ingredients
///
/// Entries are matched by their normalized original name or any normalized synonym.
/// When two entries claim the same key, the one declared first wins.
#[derive(Debug, Clone, Default)]
pub struct PrimaryCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
    keys: Vec<String>,
}

impl PrimaryCatalog {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                document: "primary catalog",
                source,
            })?;

        Self::new(entries)
    }

    pub fn new(entries: Vec<CatalogEntry>) -> CatalogResult<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut keys = Vec::new();

        for (position, entry) in entries.iter().enumerate() {
            let original = normalize(&entry.original_ingredient);
            if original.is_empty() {
                return Err(CatalogError::EmptyOriginal(position));
            }

            for item in &entry.substitutions {
                item.validate(&entry.original_ingredient)?;
            }

            let synonyms = entry.synonyms.iter().map(|synonym| normalize(synonym));
            for key in std::iter::once(original).chain(synonyms) {
                if key.is_empty() {
                    continue;
                }

                match index.get(&key) {
                    Some(&owner) if owner != position => {
                        tracing::warn!(
                            key = %key,
                            winner = %entries[owner].original_ingredient,
                            shadowed = %entry.original_ingredient,
                            "Primary catalog key claimed by two entries"
                        );
                    }
                    Some(_) => {}
                    None => {
                        index.insert(key.clone(), position);
                        keys.push(key);
                    }
                }
            }
        }

        Ok(Self {
            entries,
            index,
            keys,
        })
    }

    /// Entry whose original name or synonym normalizes to `canonical_key`
    pub fn find_entry(&self, canonical_key: &str) -> Option<&CatalogEntry> {
        self.index
            .get(canonical_key)
            .map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl SubstitutionSource for PrimaryCatalog {
    fn name(&self) -> &str {
        "primary"
    }

    fn lookup(&self, canonical_key: &str) -> &[SubstitutionItem] {
        self.find_entry(canonical_key)
            .map(|entry| entry.substitutions.as_slice())
            .unwrap_or_default()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(original: &str, synonyms: &[&str], substitutes: &[&str]) -> CatalogEntry {
        CatalogEntry {
            original_ingredient: original.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            category: None,
            substitutions: substitutes
                .iter()
                .map(|name| SubstitutionItem::new(*name, "1:1"))
                .collect(),
        }
    }

    #[test]
    fn test_find_by_original_and_synonym() {
        let catalog = PrimaryCatalog::new(vec![entry(
            "Heavy Cream",
            &["Whipping-Cream"],
            &["Coconut cream"],
        )])
        .unwrap();

        assert!(catalog.find_entry("heavy cream").is_some());
        assert!(catalog.find_entry("whipping cream").is_some());
        assert!(catalog.find_entry("Heavy Cream").is_none());
        assert!(catalog.find_entry("cream").is_none());
    }

    #[test]
    fn test_first_declared_entry_wins() {
        let catalog = PrimaryCatalog::new(vec![
            entry("Cream", &["single cream"], &["Milk"]),
            entry("Single cream", &[], &["Half and half"]),
        ])
        .unwrap();

        let found = catalog.find_entry("single cream").unwrap();
        assert_eq!(found.original_ingredient, "Cream");
        assert_eq!(catalog.keys(), ["cream", "single cream"]);
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let catalog = PrimaryCatalog::new(vec![entry("Butter", &[], &["Ghee"])]).unwrap();

        assert_eq!(catalog.lookup("butter").len(), 1);
        assert!(catalog.lookup("lard").is_empty());
    }

    #[test]
    fn test_empty_original_rejected() {
        let result = PrimaryCatalog::new(vec![
            entry("Butter", &[], &["Ghee"]),
            entry(" ?! ", &[], &["Anything"]),
        ]);

        assert!(matches!(result, Err(CatalogError::EmptyOriginal(1))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = PrimaryCatalog::from_json(r#"[{"originalIngredient": "Butter"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_null_optionals_accepted() {
        let catalog = PrimaryCatalog::from_json(
            r#"[{"originalIngredient": "Butter", "synonyms": null, "category": null,
                 "substitutions": [{"substituteIngredient": "Ghee", "ratio": "1:1", "notes": null}]}]"#,
        )
        .unwrap();

        assert_eq!(catalog.keys(), ["butter"]);
        assert_eq!(catalog.lookup("butter").len(), 1);
    }
}
