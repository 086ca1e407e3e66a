//! Search module.
//!
//! Category and free-text filtering over the catalog.

mod filter;

pub use filter::{CategoryFilter, ProductFilter};
