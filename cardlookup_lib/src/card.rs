//! Best-effort card lookup by name.

use std::fmt;

use chrono::{DateTime, Utc};
use scryfall_api::{Error, FetchJson, NamedQuery, Query, Url};
use serde_json::Value;

use crate::currency::Currency;
use crate::document::Document;

/// Result of the single fetch a lookup performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// The document was fetched.
    Found,
    /// The service answered that no card matches the name.
    NotFound,
    /// Transport, status or decode failure.
    Failed,
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Found => "found",
            Self::NotFound => "not found",
            Self::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// One card looked up by name.
///
/// Construction performs exactly one fetch through the supplied
/// [`FetchJson`] collaborator and never fails: on any error the document is
/// absent, the error is logged, and the reason is kept for callers that want
/// to tell "no such card" apart from "network down". The document is never
/// refetched or modified afterwards.
pub struct CardLookup {
    name: String,
    /// `None` only when no valid URL could be built from the base URL.
    url: Option<Url>,
    outcome: Result<Document, Error>,
    fetched_at: DateTime<Utc>,
}

impl CardLookup {
    /// Looks up the card whose name is exactly `name`.
    pub async fn new<F: FetchJson>(name: impl Into<String>, fetcher: &F) -> Self {
        let name = name.into();
        Self::with_query(NamedQuery::exact(&name), fetcher).await
    }

    /// Looks up a card with a prepared query (fuzzy matching, set restriction).
    pub async fn with_query<F: FetchJson>(query: NamedQuery, fetcher: &F) -> Self {
        let fetched_at = Utc::now();
        let (url, outcome) = match query.to_url(fetcher.base_url()) {
            Ok(url) => {
                let outcome = fetch_document(fetcher, &url).await;
                (Some(url), outcome)
            }
            Err(e) => (None, Err(e)),
        };

        match &outcome {
            Ok(_) => tracing::debug!("Fetched card '{}'", query.name),
            Err(e) => tracing::warn!("Failed to fetch card '{}': {}", query.name, e),
        }

        Self {
            name: query.name,
            url,
            outcome,
            fetched_at,
        }
    }

    /// Looks up each name in turn. Every lookup makes its own single fetch.
    pub async fn lookup_all<F, I, S>(names: I, fetcher: &F) -> Vec<Self>
    where
        F: FetchJson,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookups = Vec::new();
        for name in names {
            lookups.push(Self::new(name, fetcher).await);
        }
        lookups
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL the fetch was issued against.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn document(&self) -> Option<&Document> {
        self.outcome.as_ref().ok()
    }

    pub fn failure(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    pub fn outcome(&self) -> Result<&Document, &Error> {
        self.outcome.as_ref()
    }

    pub fn into_document(self) -> Option<Document> {
        self.outcome.ok()
    }

    pub fn is_found(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn status(&self) -> LookupStatus {
        match &self.outcome {
            Ok(_) => LookupStatus::Found,
            Err(e) if e.is_not_found() => LookupStatus::NotFound,
            Err(_) => LookupStatus::Failed,
        }
    }

    /// Returns `document[key]`, or `document[key][sub_key]`; absent when the
    /// document, the key, or the parent value is missing.
    pub fn get_field(&self, key: &str, sub_key: Option<&str>) -> Option<&Value> {
        self.document()?.get_field(key, sub_key)
    }

    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        self.document()?.get_path(path)
    }

    /// Raw price string as reported by the API, e.g. `"50000.00"`.
    pub fn price(&self, currency: Currency) -> Option<&str> {
        self.get_field("prices", Some(currency.code()))
            .and_then(Value::as_str)
    }

    pub fn usd_price(&self) -> Option<&str> {
        self.price(Currency::Usd)
    }

    pub fn eur_price(&self) -> Option<&str> {
        self.price(Currency::Eur)
    }

    pub fn tix_price(&self) -> Option<&str> {
        self.price(Currency::Tix)
    }

    /// Price parsed as a number. Accepts the API's decimal strings as well as
    /// plain JSON numbers; anything unparseable is absent.
    pub fn price_amount(&self, currency: Currency) -> Option<f64> {
        let value = self.get_field("prices", Some(currency.code()))?;
        value
            .as_str()
            .and_then(|s| s.parse().ok())
            .or_else(|| value.as_f64())
    }

    /// Canonical card name as reported by the API.
    pub fn card_name(&self) -> Option<&str> {
        self.document()?.get_str("name")
    }

    pub fn set_name(&self) -> Option<&str> {
        self.document()?.get_str("set_name")
    }

    pub fn set_code(&self) -> Option<&str> {
        self.document()?.get_str("set")
    }

    pub fn type_line(&self) -> Option<&str> {
        self.document()?.get_str("type_line")
    }

    pub fn scryfall_uri(&self) -> Option<&str> {
        self.document()?.get_str("scryfall_uri")
    }
}

async fn fetch_document<F: FetchJson>(fetcher: &F, url: &Url) -> Result<Document, Error> {
    let value = fetcher.fetch_json(url).await?;
    Document::try_from(value)
}

impl fmt::Debug for CardLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardLookup")
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for CardLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(name={})", self.name)
    }
}
