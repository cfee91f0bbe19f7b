//! Build the resolver from bundled or operator-supplied catalog documents

use std::path::Path;

use subkitchen_substitution::catalog::bundled;
use subkitchen_substitution::{CatalogStore, Resolver};

use crate::config::CatalogConfig;
use crate::error::AppError;

/// Load, validate and index the catalogs once
pub fn load_resolver(config: &CatalogConfig) -> Result<Resolver, AppError> {
    let primary = read_or_bundled(config.primary_path.as_deref(), bundled::PRIMARY_JSON)?;
    let supplemental = read_or_bundled(
        config.supplemental_path.as_deref(),
        bundled::SUPPLEMENTAL_JSON,
    )?;
    let aliases = read_or_bundled(config.aliases_path.as_deref(), bundled::ALIASES_JSON)?;

    let store = CatalogStore::from_json(&primary, &supplemental, &aliases)?;
    let stats = store.stats();

    tracing::info!(
        sources = stats.sources,
        primary_entries = stats.primary_entries,
        supplemental_keys = stats.supplemental_keys,
        aliases = stats.aliases,
        known_keys = stats.known_keys,
        "Substitution catalogs loaded"
    );

    Ok(Resolver::new(store))
}

fn read_or_bundled(path: Option<&Path>, bundled: &str) -> Result<String, AppError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Reading catalog override");
            std::fs::read_to_string(path).map_err(|source| AppError::CatalogFile {
                path: path.to_path_buf(),
                source,
            })
        }
        None => Ok(bundled.to_string()),
    }
}
