//! Library layer for card lookups: best-effort fetch-and-project over
//! Scryfall card objects.
//!
//! Wraps the `scryfall_api` transport with [`CardLookup`], which performs a
//! single fetch per card and exposes typed, read-only accessors over the
//! returned document, plus input validation and environment configuration.

pub mod card;
pub mod config;
pub mod currency;
pub mod document;
pub mod error;
pub mod validation;

pub use scryfall_api;
pub use scryfall_api::{Client, Error as ApiError, FetchJson, LookupMode, NamedQuery};

pub use card::{CardLookup, LookupStatus};
pub use config::LookupConfig;
pub use currency::Currency;
pub use document::Document;
pub use error::CardLookupError;
