//! Ingredient substitution lookup
//!
//! Free-text ingredient names are normalized, folded onto canonical keys through an
//! alias table, and answered from the merged primary and supplemental catalogs.

pub mod catalog;
pub mod error;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod search;

pub use catalog::{
    CatalogStats, CatalogStore, PrimaryCatalog, SubstitutionSource, SupplementalCatalog,
};
pub use error::{CatalogError, CatalogResult};
pub use model::{
    CatalogEntry, Nutrition, NutritionComparison, NutritionDelta, Suggestions, SubstitutionItem,
};
pub use normalize::{normalize, AliasGroup, AliasTable};
pub use resolver::Resolver;
pub use search::MAX_SEARCH_RESULTS;
