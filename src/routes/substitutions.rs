//! Ingredient substitution JSON API
//!
//! Unknown ingredients and empty queries are answered with empty collections and a
//! 200 status. Absence of data is not an error here.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use subkitchen_substitution::{Suggestions, SubstitutionItem};

use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubstitutionsResponse {
    pub substitutions: Vec<SubstitutionItem>,
}

/// GET /api/ingredients/substitutions/search?q=
#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<SearchResponse> {
    Json(SearchResponse {
        results: state.resolver.search_ingredients(&params.q),
    })
}

/// GET /api/ingredients/{ingredient}/substitutions
#[tracing::instrument(skip(state))]
pub async fn lookup(
    State(state): State<AppState>,
    Path(ingredient): Path<String>,
) -> Json<SubstitutionsResponse> {
    Json(SubstitutionsResponse {
        substitutions: state.resolver.get_substitutions(&ingredient),
    })
}

/// GET /api/ingredients/ai-substitution?q=
#[tracing::instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<Suggestions> {
    Json(state.resolver.generate_suggestions(&params.q))
}
