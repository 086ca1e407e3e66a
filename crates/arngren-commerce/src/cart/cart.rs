//! Cart and line item types.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::cart::CartPricing;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Highest quantity selectable for a single line.
pub const MAX_QUANTITY_PER_LINE: u32 = 10;

/// A shopping cart.
///
/// Holds at most one line per product, in the order products were first
/// added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Upper bound for [`Cart::update_quantity`].
    max_quantity: u32,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_quantity: MAX_QUANTITY_PER_LINE,
        }
    }

    /// Use a different upper bound for quantity updates.
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = max_quantity.max(1);
        self
    }

    /// Quantities [`Cart::update_quantity`] accepts.
    pub fn quantity_range(&self) -> RangeInclusive<u32> {
        1..=self.max_quantity
    }

    /// Add `quantity` units of a product.
    ///
    /// Increases the existing line for the product or appends a new one.
    /// Repeated adds are not capped by the quantity bound.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - Arithmetic overflow would occur
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<&LineItem, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity {
                quantity: 0,
                max: self.max_quantity,
            });
        }

        if let Some(index) = self.items.iter().position(|i| i.product_id == product.id) {
            let existing = &mut self.items[index];
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            existing.update_total()?;
            tracing::debug!(product = %product.id, quantity = existing.quantity, "cart line increased");
            return Ok(&self.items[index]);
        }

        let item = LineItem::new(product, quantity)?;
        tracing::debug!(product = %product.id, quantity, "cart line added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replace the quantity of an existing line.
    ///
    /// Only `1..=max_quantity` is accepted; anything else is rejected and the
    /// cart is left unchanged. Returns `Ok(false)` when the product has no
    /// line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<bool, CommerceError> {
        let accepted = u32::try_from(quantity).is_ok_and(|q| self.quantity_range().contains(&q));
        if !accepted {
            return Err(CommerceError::InvalidQuantity {
                quantity,
                max: self.max_quantity,
            });
        }

        let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) else {
            return Ok(false);
        };
        // range-checked above
        item.quantity = quantity as u32;
        item.update_total()?;
        Ok(true)
    }

    /// Remove a product's line. Removing a missing line is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let subtotal = Money::try_sum(self.items.iter().map(|i| &i.total_price), Currency::NOK)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            grand_total: subtotal,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line in the cart.
///
/// Product details are copied in at first add; the catalog never changes,
/// so the copy never goes stale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Product description.
    pub description: String,
    /// Product image.
    pub image_url: String,
    /// Quantity.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(product: &Product, quantity: u32) -> Result<Self, CommerceError> {
        let total_price = product
            .price
            .try_multiply(i64::from(quantity))
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            quantity,
            unit_price: product.price,
            total_price,
        })
    }

    /// Update the total price based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}
