//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Pricing breakdown for a cart.
///
/// There are no discounts, shipping or taxes at checkout, so the grand
/// total always equals the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of every line's total.
    pub subtotal: Money,
    /// Amount due.
    pub grand_total: Money,
}
