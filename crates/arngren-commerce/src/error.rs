//! Commerce error types.

use thiserror::Error;

use crate::checkout::CheckoutField;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Quantity outside the accepted range.
    #[error("Invalid quantity {quantity}: must be between 1 and {max}")]
    InvalidQuantity { quantity: i64, max: u32 },

    /// Checkout attempted with an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Required checkout fields are missing.
    #[error("Checkout incomplete: missing {}", CheckoutField::join(.0))]
    CheckoutIncomplete(Vec<CheckoutField>),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
