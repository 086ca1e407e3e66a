//! Display locales and locale-aware price formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{Currency, Money};

/// Fixed NOK to USD conversion used when no configuration overrides it.
pub const DEFAULT_USD_PER_NOK: f64 = 0.095;

/// Supported display locales.
///
/// Each locale implies a display currency: Norwegian shows prices in the
/// base currency, English converts them to US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    No,
}

impl Locale {
    /// Short code as persisted ("en" / "no").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::No => "no",
        }
    }

    /// Value for the document's `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::No => "nb",
        }
    }

    /// Label shown on the locale toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English (USD)",
            Locale::No => "Norsk (NOK)",
        }
    }

    /// Currency prices are displayed in.
    pub fn currency(&self) -> Currency {
        match self {
            Locale::En => Currency::USD,
            Locale::No => Currency::NOK,
        }
    }

    /// The other locale.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::No,
            Locale::No => Locale::En,
        }
    }

    /// Map a platform language tag (e.g. `nb-NO`) to a locale.
    ///
    /// Norwegian tags (`no`, `nb`, `nn`) map to [`Locale::No`]; any other
    /// well-formed tag maps to [`Locale::En`].
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_lowercase();
        match primary.as_str() {
            "" => None,
            "no" | "nb" | "nn" => Some(Locale::No),
            _ => Some(Locale::En),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats base-currency amounts for one locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFormatter {
    locale: Locale,
    usd_per_nok: f64,
}

impl PriceFormatter {
    /// Create a formatter with the given conversion rate.
    pub fn new(locale: Locale, usd_per_nok: f64) -> Self {
        Self {
            locale,
            usd_per_nok,
        }
    }

    /// The locale this formatter renders for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Convert a base-currency amount into the locale's display currency.
    pub fn convert(&self, amount: Money) -> Money {
        amount.convert(self.locale.currency(), self.usd_per_nok)
    }

    /// Render a base-currency amount for display.
    pub fn format(&self, amount: Money) -> String {
        self.convert(amount).display()
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), DEFAULT_USD_PER_NOK)
    }
}

/// Render `amount` for `locale` at the default conversion rate.
pub fn format_price(amount: Money, locale: Locale) -> String {
    PriceFormatter::new(locale, DEFAULT_USD_PER_NOK).format(amount)
}
