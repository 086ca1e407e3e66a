//! Views, home page sections and navigation state.

use std::fmt;

use arngren_commerce::search::{CategoryFilter, ProductFilter};
use arngren_commerce::ProductId;
use serde::{Deserialize, Serialize};

/// Every page the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum View {
    #[default]
    Home,
    AllProducts,
    Favorites,
    ProductDetail,
    Cart,
    Checkout,
    Shipping,
    Warranty,
    Privacy,
    Terms,
}

impl View {
    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::AllProducts => "All Products",
            View::Favorites => "My Favorites",
            View::ProductDetail => "Product Details",
            View::Cart => "Your Shopping Cart",
            View::Checkout => "Checkout",
            View::Shipping => "Shipping & Returns",
            View::Warranty => "Warranty Information",
            View::Privacy => "Privacy Policy",
            View::Terms => "Terms of Service",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Anchored sections of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    NewArrivals,
    ClientReviews,
    Faq,
}

impl Section {
    /// Element id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::NewArrivals => "new-arrivals",
            Section::ClientReviews => "client-reviews",
            Section::Faq => "faq",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::NewArrivals => "New Arrivals",
            Section::ClientReviews => "Client Reviews",
            Section::Faq => "FAQ",
        }
    }
}

/// Current view, selection and filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Page being shown.
    pub view: View,
    /// Product shown on the detail page.
    pub selected_product: Option<ProductId>,
    /// Category filter on the all-products page.
    pub category: CategoryFilter,
    /// Search text as typed.
    pub search_query: String,
    /// Mobile navigation drawer.
    pub mobile_menu_open: bool,
}

impl NavigationState {
    /// Switch views.
    ///
    /// Entering the all-products page from elsewhere resets the category
    /// filter. Any navigation closes the mobile menu.
    pub fn go_to(&mut self, view: View, product: Option<ProductId>) {
        if let Some(product) = product {
            self.selected_product = Some(product);
        }
        if view == View::AllProducts && self.view != View::AllProducts {
            self.category = CategoryFilter::All;
        }
        self.view = view;
        self.mobile_menu_open = false;
    }

    /// Filter applied to the all-products grid.
    pub fn product_filter(&self) -> ProductFilter {
        ProductFilter::new(self.category, self.search_query.clone())
    }
}
