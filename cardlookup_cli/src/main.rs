mod commands;
mod output;

use anyhow::Result;
use cardlookup_lib::LookupConfig;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cardlookup")]
#[command(about = "Look up Magic: The Gathering card prices on Scryfall")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Scryfall API base URL (overrides SCRYFALL_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one card's metadata and every price
    Card(commands::card::CardArgs),
    /// Show USD/EUR/TIX prices for one or more cards
    Prices(commands::prices::PricesArgs),
    /// Print a single field of the card object
    Field(commands::field::FieldArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardlookup=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = LookupConfig::from_env();
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = config.client()?;

    match &cli.command {
        Commands::Card(args) => commands::card::run(args, &client, &format).await?,
        Commands::Prices(args) => commands::prices::run(args, &client, &format).await?,
        Commands::Field(args) => commands::field::run(args, &client, &format).await?,
    }

    Ok(())
}
