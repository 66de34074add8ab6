//! `streetfood` — recipe cost estimates and supplier orders from the command line.
//!
//! Usage:
//! ```bash
//! # List built-in recipes
//! streetfood templates
//!
//! # Search the catalog (English or Hindi)
//! streetfood search प्याज
//!
//! # Estimate a template for 20 servings at a 40% margin
//! streetfood estimate --template vada-pav --servings 20 --margin 40
//!
//! # Custom recipe, then place one order per supplier
//! streetfood estimate --name "Masala Chai" -i "Ginger:0.2:kg" -i "Bread:1:packets" --order --vendor-id 5
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use streetfood_infra::AppConfig;

#[derive(Parser)]
#[command(
    name = "streetfood",
    about = "Street-food recipe cost estimator",
    long_about = "Estimate recipe costs against the raw-material catalog and split orders by supplier"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in recipe templates
    Templates,

    /// Search catalog items by name or localized name
    Search {
        term: String,
    },

    /// Estimate a recipe's cost and suggested price
    Estimate(commands::EstimateArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    streetfood_observability::init_with_default(if cli.verbose { "debug" } else { "warn" });

    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let output = match cli.command {
        Command::Templates => commands::templates()?,
        Command::Search { term } => commands::search(&config, &term)?,
        Command::Estimate(args) => commands::estimate(&config, args).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
