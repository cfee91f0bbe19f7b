use std::sync::Arc;

use axum::{Router, routing::get};
use subkitchen_substitution::Resolver;

mod health;
mod substitutions;

pub use substitutions::{QueryParams, SearchResponse, SubstitutionsResponse};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub resolver: Arc<Resolver>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Static search path is matched before the {ingredient} capture
        .route(
            "/api/ingredients/substitutions/search",
            get(substitutions::search),
        )
        .route(
            "/api/ingredients/ai-substitution",
            get(substitutions::suggest),
        )
        .route(
            "/api/ingredients/{ingredient}/substitutions",
            get(substitutions::lookup),
        )
        .with_state(app_state)
}
