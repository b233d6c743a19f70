use anyhow::Result;
use cardlookup_lib::{CardLookup, Currency, Document};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

const MISSING: &str = "-";

#[derive(Tabled, Serialize)]
struct PriceRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Card")]
    #[serde(rename = "Card")]
    card: String,
    #[tabled(rename = "USD")]
    #[serde(rename = "USD")]
    usd: String,
    #[tabled(rename = "EUR")]
    #[serde(rename = "EUR")]
    eur: String,
    #[tabled(rename = "TIX")]
    #[serde(rename = "TIX")]
    tix: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

/// JSON shape for one lookup in `prices` output. `name` is the name asked
/// for, `card` the canonical name the API returned. Absent values are `null`.
#[derive(Serialize)]
struct PriceRecord<'a> {
    name: &'a str,
    card: Option<&'a str>,
    status: String,
    usd: Option<&'a str>,
    eur: Option<&'a str>,
    tix: Option<&'a str>,
}

/// JSON shape for `card` output: the raw document plus lookup metadata.
#[derive(Serialize)]
struct CardRecord<'a> {
    name: &'a str,
    card: Option<&'a str>,
    status: String,
    url: Option<&'a str>,
    fetched_at: String,
    document: Option<&'a Document>,
}

// -- Row builders --

fn build_price_rows(lookups: &[CardLookup]) -> Vec<PriceRow> {
    lookups
        .iter()
        .map(|l| PriceRow {
            name: l.name().to_string(),
            card: or_missing(l.card_name()),
            usd: or_missing(l.usd_price()),
            eur: or_missing(l.eur_price()),
            tix: or_missing(l.tix_price()),
            status: l.status().to_string(),
        })
        .collect()
}

fn build_detail_rows(lookup: &CardLookup) -> Vec<DetailRow> {
    let mut rows = vec![
        detail("Name", lookup.name()),
        detail("Card", lookup.card_name().unwrap_or(MISSING)),
        detail("Set", lookup.set_name().unwrap_or(MISSING)),
        detail("Set Code", lookup.set_code().unwrap_or(MISSING)),
        detail("Type", lookup.type_line().unwrap_or(MISSING)),
    ];
    for currency in Currency::ALL {
        rows.push(detail(
            &format!("Price ({})", currency),
            lookup.price(currency).unwrap_or(MISSING),
        ));
    }
    rows.push(detail("Status", &lookup.status().to_string()));
    if let Some(uri) = lookup.scryfall_uri() {
        rows.push(detail("Scryfall", uri));
    }
    rows
}

fn build_price_records(lookups: &[CardLookup]) -> Vec<PriceRecord<'_>> {
    lookups
        .iter()
        .map(|l| PriceRecord {
            name: l.name(),
            card: l.card_name(),
            status: l.status().to_string(),
            usd: l.usd_price(),
            eur: l.eur_price(),
            tix: l.tix_price(),
        })
        .collect()
}

fn build_card_record(lookup: &CardLookup) -> CardRecord<'_> {
    CardRecord {
        name: lookup.name(),
        card: lookup.card_name(),
        status: lookup.status().to_string(),
        url: lookup.url().map(|u| u.as_str()),
        fetched_at: lookup.fetched_at().to_rfc3339(),
        document: lookup.document(),
    }
}

fn detail(field: &str, value: &str) -> DetailRow {
    DetailRow {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

/// Renders a field value for table cells: strings bare, everything else as compact JSON.
fn format_field_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => MISSING.to_string(),
    }
}

// -- Printers --

pub fn print_prices(lookups: &[CardLookup], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_price_rows(lookups))),
        OutputFormat::Markdown => print_markdown(build_price_rows(lookups)),
        OutputFormat::Csv => print_csv(build_price_rows(lookups))?,
        OutputFormat::Json => print_json(&build_price_records(lookups)),
    }
    Ok(())
}

pub fn print_card(lookup: &CardLookup, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_detail_rows(lookup))),
        OutputFormat::Markdown => print_markdown(build_detail_rows(lookup)),
        OutputFormat::Csv => print_csv(build_detail_rows(lookup))?,
        OutputFormat::Json => print_json(&build_card_record(lookup)),
    }
    Ok(())
}

pub fn print_field(path: &str, value: Option<&Value>, format: &OutputFormat) -> Result<()> {
    let rows = vec![detail(path, &format_field_value(value))];
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&value),
    }
    Ok(())
}

fn print_markdown<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
