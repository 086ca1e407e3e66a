//! Product type and discount calculation.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier (the product name).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Current price in the base currency.
    pub price: Money,
    /// Price before the discount, present only when discounted.
    pub original_price: Option<Money>,
    /// Category the product is listed under.
    pub category: Category,
    /// Image URL.
    pub image_url: String,
}

impl Product {
    /// Create a product at full price.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
        image_url: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: ProductId::new(name.clone()),
            name,
            description: description.into(),
            price,
            original_price: None,
            category,
            image_url: image_url.into(),
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| {
                original.currency == self.price.currency
                    && original.amount_minor > self.price.amount_minor
            })
            .unwrap_or(false)
    }

    /// Rounded discount percentage, 0 when not on sale.
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.original_price, self.price)
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Percentage drop from `original` to `current`, rounded half up.
///
/// Returns 0 when `original` is absent, not above `current`, or in another
/// currency.
///
/// ```
/// use arngren_commerce::catalog::discount_percent;
/// use arngren_commerce::money::Money;
///
/// assert_eq!(discount_percent(Some(Money::nok(699)), Money::nok(499)), 29);
/// assert_eq!(discount_percent(None, Money::nok(499)), 0);
/// ```
pub fn discount_percent(original: Option<Money>, current: Money) -> u32 {
    let Some(original) = original else {
        return 0;
    };
    if original.currency != current.currency || original.amount_minor <= current.amount_minor {
        return 0;
    }
    let original = i128::from(original.amount_minor);
    let drop = original - i128::from(current.amount_minor);
    // round(100 * drop / original) for positive operands
    ((200 * drop + original) / (2 * original)) as u32
}
