use clap::{Parser, Subcommand};

pub mod catalog;

/// subkitchen - Ingredient substitution service
#[derive(Parser)]
#[command(name = "subkitchen")]
#[command(about = "Find substitutes for cooking ingredients", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print substitutes for an ingredient
    Lookup {
        /// Ingredient name, e.g. "2% milk"
        ingredient: String,
    },
    /// Print known ingredients matching a query
    Search { query: String },
    /// Load and validate the catalogs, then print their sizes
    Check,
}
