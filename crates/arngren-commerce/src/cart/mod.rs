//! Shopping cart module.
//!
//! Contains types for the cart, its line items, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_LINE};
pub use pricing::CartPricing;
