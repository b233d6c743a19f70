use anyhow::Result;
use cardlookup_lib::validation;
use cardlookup_lib::{CardLookup, Client};
use clap::Args;

use crate::output::{print_field, OutputFormat};

#[derive(Args)]
pub struct FieldArgs {
    /// Exact card name
    pub name: String,

    /// Top-level key of the card object (e.g. prices, set_name, legalities)
    pub key: String,

    /// Key inside the object at KEY (e.g. usd, vintage)
    pub sub_key: Option<String>,
}

pub async fn run(args: &FieldArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let name = validation::validate_card_name(&args.name)?;
    let key = validation::validate_field_key(&args.key)?;
    let sub_key = match args.sub_key {
        Some(ref sub_key) => Some(validation::validate_field_key(sub_key)?),
        None => None,
    };

    let lookup = CardLookup::new(name, client).await;

    let path = match sub_key {
        Some(ref sub_key) => format!("{}.{}", key, sub_key),
        None => key.clone(),
    };
    print_field(&path, lookup.get_field(&key, sub_key.as_deref()), format)?;

    Ok(())
}
