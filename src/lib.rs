pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::AppError;
pub use routes::AppState;

/// Create app router for testing
///
/// Builds the router over the given catalog configuration without binding a
/// listener, useful for integration testing.
pub fn create_app(config: Config) -> Result<axum::Router, AppError> {
    config.validate().map_err(AppError::InvalidConfig)?;

    let resolver = catalog::load_resolver(&config.catalog)?;
    let state = AppState {
        config,
        resolver: std::sync::Arc::new(resolver),
    };

    Ok(routes::router(state))
}
