use anyhow::Result;
use clap::Parser;
use subkitchen::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = subkitchen::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    subkitchen::observability::init_observability("subkitchen", &config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => subkitchen::server::serve(config, host, port).await,
        Commands::Lookup { ingredient } => subkitchen::cli::catalog::lookup(config, &ingredient),
        Commands::Search { query } => subkitchen::cli::catalog::search(config, &query),
        Commands::Check => subkitchen::cli::catalog::check(config),
    }
}
