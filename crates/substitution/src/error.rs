use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Problems detected while building the static catalogs.
///
/// These only ever surface at startup. Lookups on a built store are total.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed {document} document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Alias '{alias}' maps to both '{first}' and '{second}'")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Alias target '{target}' is itself an alias of '{resolves_to}'")]
    ChainedAlias { target: String, resolves_to: String },

    #[error("Alias entry for '{0}' normalizes to an empty key")]
    EmptyAlias(String),

    #[error("Primary catalog entry #{0} has an empty original ingredient")]
    EmptyOriginal(usize),

    #[error("Supplemental record #{0} has an empty key")]
    EmptyKey(usize),

    #[error("Supplemental key '{key}' is not normalized (expected '{expected}')")]
    UnnormalizedKey { key: String, expected: String },

    #[error("Supplemental key '{0}' is declared more than once")]
    DuplicateKey(String),

    #[error("Invalid nutrition for '{ingredient}': {reason}")]
    InvalidNutrition { ingredient: String, reason: String },
}
