use std::{fmt, str::FromStr};

use crate::error::CardLookupError;

/// Keys of the `prices` object on a Scryfall card.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Currency {
    Usd,
    UsdFoil,
    UsdEtched,
    Eur,
    EurFoil,
    /// MTGO event tickets.
    Tix,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::UsdFoil,
        Currency::UsdEtched,
        Currency::Eur,
        Currency::EurFoil,
        Currency::Tix,
    ];

    /// The key under `prices` in the card object.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::UsdFoil => "usd_foil",
            Currency::UsdEtched => "usd_etched",
            Currency::Eur => "eur",
            Currency::EurFoil => "eur_foil",
            Currency::Tix => "tix",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CardLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == normalized)
            .ok_or_else(|| {
                CardLookupError::InvalidInput(format!(
                    "unknown currency '{}'. Valid values: usd, usd_foil, usd_etched, eur, eur_foil, tix",
                    s
                ))
            })
    }
}
