//! Commerce domain for the ARNGREN.net storefront.
//!
//! Everything here is plain in-memory data with no I/O:
//!
//! - **Catalog**: the compiled-in product list, categories, discount math
//! - **Money**: NOK-based amounts and locale-aware price formatting
//! - **Search**: category and free-text product filtering
//! - **Cart**: line items, quantity merging, pricing
//! - **Favorites**: the session's favorited products
//! - **Checkout**: customer details, the plain-text order and its mail handoff
//!
//! # Example
//!
//! ```
//! use arngren_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let tank = catalog.get(&ProductId::new("RC Tank w/ Air Cannon")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(tank, 1).unwrap();
//! cart.add_item(tank, 1).unwrap();
//!
//! let pricing = cart.calculate_pricing().unwrap();
//! assert_eq!(pricing.subtotal, Money::nok(5996));
//! ```

pub mod error;
pub mod ids;
pub mod locale;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
pub mod search;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, Product};
pub use error::CommerceError;
pub use ids::ProductId;
pub use locale::{Locale, PriceFormatter};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::locale::{Locale, PriceFormatter};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{discount_percent, Catalog, Category, Product};

    // Search
    pub use crate::search::{CategoryFilter, ProductFilter};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, MAX_QUANTITY_PER_LINE};

    // Favorites
    pub use crate::favorites::Favorites;

    // Checkout
    pub use crate::checkout::{
        CheckoutField, CustomerDetails, MailHandoff, MailTarget, Order, Webmail,
    };
}
