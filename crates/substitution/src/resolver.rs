use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{CatalogStore, SubstitutionSource};
use crate::model::{Suggestions, SubstitutionItem};
use crate::normalize::normalize;
use crate::search::{rank_keys, MAX_SEARCH_RESULTS};

/// Answers "what can I use instead of X" and "which ingredients start with X"
///
/// Every operation is total: empty, malformed or unknown input yields an empty
/// result, never an error.
pub struct Resolver {
    store: CatalogStore,
}

impl Resolver {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn canonical_key(&self, raw: &str) -> String {
        self.store.aliases().to_canonical_key(raw)
    }

    /// Substitutes for a free-text ingredient
    ///
    /// Candidates from every source are concatenated in precedence order and
    /// deduplicated by normalized substitute name, keeping the first occurrence.
    /// Items whose name normalizes to nothing are dropped.
    pub fn get_substitutions(&self, raw_ingredient: &str) -> Vec<SubstitutionItem> {
        let key = self.canonical_key(raw_ingredient);
        if key.is_empty() {
            return Vec::new();
        }

        let substitutions = merge_sources(self.store.sources(), &key);

        tracing::debug!(
            key = %key,
            count = substitutions.len(),
            "Resolved substitutions"
        );

        substitutions
    }

    /// Autocomplete over every known key, at most [`MAX_SEARCH_RESULTS`]
    pub fn search_ingredients(&self, query: &str) -> Vec<String> {
        let normalized = normalize(query);
        let results: Vec<String> = rank_keys(
            self.store.all_known_keys(),
            &normalized,
            MAX_SEARCH_RESULTS,
        )
        .into_iter()
        .map(str::to_string)
        .collect();

        tracing::debug!(query = %normalized, count = results.len(), "Searched ingredients");

        results
    }

    /// Pair the trimmed query with its substitutes
    pub fn generate_suggestions(&self, query: &str) -> Suggestions {
        let query = query.trim();
        if query.is_empty() {
            return Suggestions {
                query: String::new(),
                substitutions: Vec::new(),
            };
        }

        Suggestions {
            query: query.to_string(),
            substitutions: self.get_substitutions(query),
        }
    }
}

fn merge_sources(sources: &[Arc<dyn SubstitutionSource>], key: &str) -> Vec<SubstitutionItem> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for source in sources {
        for item in source.lookup(key) {
            let name = normalize(&item.substitute_ingredient);
            if name.is_empty() {
                tracing::debug!(source = source.name(), key = %key, "Skipping unnamed substitute");
                continue;
            }

            if seen.insert(name) {
                merged.push(item.clone());
            }
        }
    }

    merged
}
