use anyhow::Result;
use cardlookup_lib::validation;
use cardlookup_lib::{CardLookup, Client};
use clap::Args;

use crate::output::{print_prices, OutputFormat};

#[derive(Args)]
pub struct PricesArgs {
    /// One or more exact card names
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
}

pub async fn run(args: &PricesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let names = args
        .names
        .iter()
        .map(|n| validation::validate_card_name(n))
        .collect::<Result<Vec<_>, _>>()?;

    let lookups = CardLookup::lookup_all(names, client).await;

    let found = lookups.iter().filter(|l| l.is_found()).count();
    eprintln!("{}/{} cards found", found, lookups.len());

    print_prices(&lookups, format)?;

    Ok(())
}
