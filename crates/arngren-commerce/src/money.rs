//! Money type for representing monetary values.
//!
//! Amounts are held in the currency's minor unit (øre, cents) as integers.
//! Catalog prices are whole kroner, so NOK amounts are always multiples of
//! 100 until a conversion produces a fractional result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
///
/// NOK is the base currency every catalog price is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    NOK,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "NOK").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NOK => "NOK",
            Currency::USD => "USD",
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a NOK amount from whole kroner.
    ///
    /// ```
    /// use arngren_commerce::money::Money;
    /// assert_eq!(Money::nok(2998).amount_minor, 299_800);
    /// ```
    pub const fn nok(kroner: i64) -> Self {
        Self::new(kroner * 100, Currency::NOK)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Convert into another currency at a fixed rate.
    ///
    /// `rate` is units of `to` per unit of `self.currency`. Converting into
    /// the same currency returns the value unchanged.
    pub fn convert(&self, to: Currency, rate: f64) -> Money {
        if to == self.currency {
            return *self;
        }
        let amount = (self.amount_minor as f64 * rate).round() as i64;
        Money::new(amount, to)
    }

    /// Format using the currency's own conventions.
    ///
    /// NOK follows Norwegian notation (`2 998 kr`, decimals only when
    /// present); USD follows US notation (`$1,424.81`).
    pub fn display(&self) -> String {
        let minor = self.currency.minor_per_major();
        let abs = self.amount_minor.unsigned_abs();
        let whole = abs / minor as u64;
        let frac = abs % minor as u64;
        let sign = if self.is_negative() { "-" } else { "" };

        match self.currency {
            Currency::NOK => {
                let whole = group_digits(whole, '\u{a0}');
                if frac == 0 {
                    format!("{sign}{whole}\u{a0}kr")
                } else {
                    format!("{sign}{whole},{frac:02}\u{a0}kr")
                }
            }
            Currency::USD => {
                let whole = group_digits(whole, ',');
                format!("{sign}${whole}.{frac:02}")
            }
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert `separator` between groups of three digits.
pub(crate) fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
