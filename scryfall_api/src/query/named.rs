//! Query builder for the `/cards/named` endpoint.

use std::fmt;

use url::Url;

use super::Query;

/// How Scryfall should match the supplied name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Case-insensitive exact name match. This is the default.
    #[default]
    Exact,
    /// Scryfall's fuzzy matcher (partial words, typos).
    Fuzzy,
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Exact => "exact",
                Self::Fuzzy => "fuzzy",
            }
        )
    }
}

/// A single named-card lookup: `/cards/named?exact=<name>[&set=<code>]`.
///
/// The name is form-encoded when appended, so names with spaces or
/// punctuation ("Lim-Dûl's Vault") produce a valid URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedQuery {
    pub mode: LookupMode,
    pub name: String,
    /// Restrict the match to one set code (e.g. `lea`).
    pub set: Option<String>,
}

impl NamedQuery {
    pub fn exact(name: &str) -> Self {
        Self {
            mode: LookupMode::Exact,
            name: name.to_string(),
            set: None,
        }
    }

    pub fn fuzzy(name: &str) -> Self {
        Self {
            mode: LookupMode::Fuzzy,
            name: name.to_string(),
            set: None,
        }
    }

    pub fn with_set(mut self, set: &str) -> Self {
        self.set = Some(set.to_string());
        self
    }
}

impl Query for NamedQuery {
    fn path(&self) -> &'static str {
        "/cards/named"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(&self.mode.to_string(), &self.name);
        if let Some(set) = &self.set {
            url.query_pairs_mut().append_pair("set", set);
        };
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{NamedQuery, Query};

    #[test]
    fn test_named_query() {
        let url = Url::parse("https://example.com/cards/named").unwrap();

        insta::assert_snapshot!(
            NamedQuery::exact("Shock").add_to_url(&url).to_string(),
            @"https://example.com/cards/named?exact=Shock"
        );

        insta::assert_snapshot!(
            NamedQuery::exact("Black Lotus").add_to_url(&url).to_string(),
            @"https://example.com/cards/named?exact=Black+Lotus"
        );

        insta::assert_snapshot!(
            NamedQuery::exact("Lim-Dûl's Vault").add_to_url(&url).to_string(),
            @"https://example.com/cards/named?exact=Lim-D%C3%BBl%27s+Vault"
        );

        insta::assert_snapshot!(
            NamedQuery::fuzzy("jac bele").add_to_url(&url).to_string(),
            @"https://example.com/cards/named?fuzzy=jac+bele"
        );

        insta::assert_snapshot!(
            NamedQuery::exact("Black Lotus")
                .with_set("lea")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/cards/named?exact=Black+Lotus&set=lea"
        );
    }

    #[test]
    fn test_named_query_path() {
        assert_eq!(NamedQuery::exact("Shock").path(), "/cards/named");
    }
}
