//! Ingredient name normalization and alias resolution
//!
//! Every lookup goes through [`AliasTable::to_canonical_key`], which lowercases and
//! cleans free text with [`normalize`] and then folds spelling variants
//! ("whole milk", "2% milk") onto one canonical key ("milk").

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_\s]+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s%]").unwrap());

/// Normalize free-text ingredient input
///
/// Lowercases, turns runs of `-`, `_` and whitespace into single spaces, drops every
/// character that is not a word character, whitespace or `%`, and trims.
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let spaced = SEPARATORS.replace_all(&lowered, " ");
    let stripped = DISALLOWED.replace_all(&spaced, "");

    // Stripping can leave double spaces behind ("salt & pepper")
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One authored alias group: every variant resolves to `canonical`.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasGroup {
    pub canonical: String,
    pub aliases: Vec<String>,
}

/// Many-to-one mapping from normalized spelling variants to canonical keys.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Parse and validate an alias document (a JSON array of [`AliasGroup`]).
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let groups: Vec<AliasGroup> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                document: "alias",
                source,
            })?;

        Self::from_groups(groups)
    }

    /// Build the table from alias groups
    ///
    /// Both sides are normalized. Fails when one alias points at two different
    /// canonical keys, or when a canonical key is itself an alias of another key
    /// (canonical keys must resolve to themselves).
    pub fn from_groups(groups: Vec<AliasGroup>) -> CatalogResult<Self> {
        let mut aliases: HashMap<String, String> = HashMap::new();

        for group in &groups {
            let canonical = normalize(&group.canonical);
            if canonical.is_empty() {
                return Err(CatalogError::EmptyAlias(group.canonical.clone()));
            }

            for alias in &group.aliases {
                let variant = normalize(alias);
                if variant.is_empty() {
                    return Err(CatalogError::EmptyAlias(alias.clone()));
                }

                // A group may list its own canonical spelling; that's a no-op
                if variant == canonical {
                    continue;
                }

                match aliases.get(&variant) {
                    Some(existing) if *existing != canonical => {
                        return Err(CatalogError::ConflictingAlias {
                            alias: variant,
                            first: existing.clone(),
                            second: canonical,
                        });
                    }
                    Some(_) => {
                        tracing::warn!(alias = %variant, canonical = %canonical, "Alias declared twice");
                    }
                    None => {
                        aliases.insert(variant, canonical.clone());
                    }
                }
            }
        }

        for target in aliases.values() {
            if let Some(resolves_to) = aliases.get(target) {
                return Err(CatalogError::ChainedAlias {
                    target: target.clone(),
                    resolves_to: resolves_to.clone(),
                });
            }
        }

        Ok(Self { aliases })
    }

    /// Resolve an already normalized string. Unknown strings are their own key.
    pub fn resolve_alias(&self, normalized: &str) -> String {
        self.aliases
            .get(normalized)
            .cloned()
            .unwrap_or_else(|| normalized.to_string())
    }

    /// Normalize then resolve aliases
    pub fn to_canonical_key(&self, input: &str) -> String {
        self.resolve_alias(&normalize(input))
    }

    /// Iterate `(alias, canonical)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
