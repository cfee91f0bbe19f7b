//! Static substitution catalogs
//!
//! Two differently shaped datasets are exposed through one [`SubstitutionSource`]
//! capability and merged by the resolver in source order:
//! - [`PrimaryCatalog`]: rich entries with synonyms and nutrition comparisons
//! - [`SupplementalCatalog`]: broader coverage keyed directly by canonical key
//!
//! Everything is built once at startup and never mutated afterwards.

mod primary;
mod supplemental;

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CatalogResult;
use crate::model::{CatalogEntry, SubstitutionItem};
use crate::normalize::AliasTable;

pub use primary::PrimaryCatalog;
pub use supplemental::{SupplementalCatalog, SupplementalRecord};

/// Catalog documents compiled into the binary
pub mod bundled {
    pub const PRIMARY_JSON: &str = include_str!("../../data/primary.json");
    pub const SUPPLEMENTAL_JSON: &str = include_str!("../../data/supplemental.json");
    pub const ALIASES_JSON: &str = include_str!("../../data/aliases.json");
}

/// A read-only source of substitution candidates keyed by canonical key
pub trait SubstitutionSource: Send + Sync {
    fn name(&self) -> &str;

    /// Candidates for `canonical_key` in preference order, empty when unknown
    fn lookup(&self, canonical_key: &str) -> &[SubstitutionItem];

    /// Every key this source can answer for, in declaration order
    fn keys(&self) -> &[String];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub sources: usize,
    pub primary_entries: usize,
    pub supplemental_keys: usize,
    pub aliases: usize,
    pub known_keys: usize,
}

/// Immutable union of the alias table and every substitution source
pub struct CatalogStore {
    aliases: AliasTable,
    primary: Arc<PrimaryCatalog>,
    supplemental: Arc<SupplementalCatalog>,
    sources: Vec<Arc<dyn SubstitutionSource>>,
    known_keys: Vec<String>,
}

impl CatalogStore {
    pub fn new(
        aliases: AliasTable,
        primary: PrimaryCatalog,
        supplemental: SupplementalCatalog,
    ) -> Self {
        let checked: [&dyn SubstitutionSource; 2] = [&primary, &supplemental];
        for source in checked {
            for (key, canonical) in shadowed_keys(&aliases, source) {
                tracing::warn!(
                    source = source.name(),
                    key = %key,
                    canonical = %canonical,
                    "Catalog key is an alias and can never be looked up"
                );
            }
        }

        let primary = Arc::new(primary);
        let supplemental = Arc::new(supplemental);
        let sources: Vec<Arc<dyn SubstitutionSource>> = vec![primary.clone(), supplemental.clone()];
        let known_keys = collect_known_keys(&sources);

        Self {
            aliases,
            primary,
            supplemental,
            sources,
            known_keys,
        }
    }

    /// Parse and validate the three catalog documents
    pub fn from_json(
        primary_json: &str,
        supplemental_json: &str,
        aliases_json: &str,
    ) -> CatalogResult<Self> {
        let aliases = AliasTable::from_json(aliases_json)?;
        let primary = PrimaryCatalog::from_json(primary_json)?;
        let supplemental = SupplementalCatalog::from_json(supplemental_json)?;

        Ok(Self::new(aliases, primary, supplemental))
    }

    /// The catalogs shipped with the crate
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(
            bundled::PRIMARY_JSON,
            bundled::SUPPLEMENTAL_JSON,
            bundled::ALIASES_JSON,
        )
    }

    /// Append a lower-precedence source. Must be called while building the store.
    pub fn with_source(mut self, source: Arc<dyn SubstitutionSource>) -> Self {
        self.sources.push(source);
        self.known_keys = collect_known_keys(&self.sources);
        self
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Sources in precedence order, primary first
    pub fn sources(&self) -> &[Arc<dyn SubstitutionSource>] {
        &self.sources
    }

    pub fn find_primary_entry(&self, canonical_key: &str) -> Option<&CatalogEntry> {
        self.primary.find_entry(canonical_key)
    }

    pub fn find_supplemental_items(&self, canonical_key: &str) -> &[SubstitutionItem] {
        self.supplemental.lookup(canonical_key)
    }

    /// Union of every key across all sources, first occurrence order
    ///
    /// Primary originals and synonyms come first (in declaration order), then
    /// supplemental keys, then keys of any extra sources.
    pub fn all_known_keys(&self) -> &[String] {
        &self.known_keys
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            sources: self.sources.len(),
            primary_entries: self.primary.entries().len(),
            supplemental_keys: self.supplemental.keys().len(),
            aliases: self.aliases.len(),
            known_keys: self.known_keys.len(),
        }
    }
}

/// Keys whose alias target lands somewhere else in `source`, paired with that target
///
/// A synonym aliased onto its own entry's canonical key still reaches the same
/// items and is not reported.
fn shadowed_keys<'a>(
    aliases: &AliasTable,
    source: &'a dyn SubstitutionSource,
) -> Vec<(&'a str, String)> {
    source
        .keys()
        .iter()
        .filter_map(|key| {
            let canonical = aliases.resolve_alias(key);
            let redirected = canonical != *key
                && !std::ptr::eq(source.lookup(key), source.lookup(&canonical));
            redirected.then_some((key.as_str(), canonical))
        })
        .collect()
}

fn collect_known_keys(sources: &[Arc<dyn SubstitutionSource>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();

    for source in sources {
        for key in source.keys() {
            if seen.insert(key.as_str()) {
                keys.push(key.clone());
            }
        }
    }

    keys
}
