use anyhow::Result;
use cardlookup_lib::validation;
use cardlookup_lib::{CardLookup, Client, NamedQuery};
use clap::Args;

use crate::output::{print_card, OutputFormat};

#[derive(Args)]
pub struct CardArgs {
    /// Card name (exact match unless --fuzzy is given)
    pub name: String,

    /// Restrict the match to one set code (e.g. lea, m21)
    #[arg(long)]
    pub set: Option<String>,

    /// Use Scryfall's fuzzy name matching instead of an exact match
    #[arg(long)]
    pub fuzzy: bool,
}

pub async fn run(args: &CardArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let name = validation::validate_card_name(&args.name)?;

    let mut query = if args.fuzzy {
        NamedQuery::fuzzy(&name)
    } else {
        NamedQuery::exact(&name)
    };

    if let Some(ref set) = args.set {
        let validated = validation::validate_set_code(set)?;
        query = query.with_set(&validated);
    }

    let lookup = CardLookup::with_query(query, client).await;
    print_card(&lookup, format)?;

    Ok(())
}
