//! CLI subcommand implementations.

pub mod card;
pub mod field;
pub mod prices;
