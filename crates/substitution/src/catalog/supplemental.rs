use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::SubstitutionSource;
use crate::error::{CatalogError, CatalogResult};
use crate::model::SubstitutionItem;
use crate::normalize::normalize;

#[derive(Debug, Clone, Deserialize)]
pub struct SupplementalRecord {
    pub key: String,
    pub substitutions: Vec<SubstitutionItem>,
}

/// Flat catalog keyed directly by canonical key
#[derive(Debug, Clone, Default)]
pub struct SupplementalCatalog {
    keys: Vec<String>,
    items: HashMap<String, Vec<SubstitutionItem>>,
}

impl SupplementalCatalog {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: Vec<SupplementalRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                document: "supplemental catalog",
                source,
            })?;

        Self::new(records)
    }

    /// Keys must already be in normalized form and appear once
    pub fn new(records: Vec<SupplementalRecord>) -> CatalogResult<Self> {
        let mut keys = Vec::with_capacity(records.len());
        let mut items = HashMap::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            if record.key.trim().is_empty() {
                return Err(CatalogError::EmptyKey(position));
            }

            let expected = normalize(&record.key);
            if expected != record.key {
                return Err(CatalogError::UnnormalizedKey {
                    key: record.key,
                    expected,
                });
            }

            if items.contains_key(&record.key) {
                return Err(CatalogError::DuplicateKey(record.key));
            }

            for item in &record.substitutions {
                item.validate(&record.key)?;
            }

            keys.push(record.key.clone());
            items.insert(record.key, record.substitutions);
        }

        Ok(Self { keys, items })
    }
}

impl SubstitutionSource for SupplementalCatalog {
    fn name(&self) -> &str {
        "supplemental"
    }

    fn lookup(&self, canonical_key: &str) -> &[SubstitutionItem] {
        self.items
            .get(canonical_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }
}
