//! Catalog module.
//!
//! The catalog is built once at startup and never mutated.

mod category;
mod data;
mod product;

pub use category::Category;
pub use product::{discount_percent, Product};

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::search::ProductFilter;

/// The storefront's product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// Later duplicates of an already-seen id are dropped so ids stay unique.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut unique: Vec<Product> = Vec::new();
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product = %product.id, "duplicate catalog entry dropped");
                continue;
            }
            unique.push(product);
        }
        Self { products: unique }
    }

    /// The compiled-in ARNGREN.net catalog.
    pub fn builtin() -> Self {
        Self::new(data::builtin_products())
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Categories present in the catalog, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// The first `count` products, shown as new arrivals.
    pub fn new_arrivals(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    /// Products matching a filter, in catalog order.
    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products whose id satisfies `keep`, in catalog order.
    pub fn select<'a>(&'a self, keep: impl Fn(&ProductId) -> bool) -> Vec<&'a Product> {
        self.products.iter().filter(|p| keep(&p.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::CategoryFilter;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.products()[0].name, "Keychain Breathalyzer");

        let tank = catalog.get(&ProductId::new("RC Tank w/ Air Cannon")).unwrap();
        assert_eq!(tank.price, Money::nok(2998));
        assert_eq!(tank.original_price, Some(Money::nok(3498)));
        assert_eq!(tank.category, Category::RcProducts);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec![
                Category::Gadgets,
                Category::Robots,
                Category::ElectricVehicles,
                Category::RcProducts,
                Category::DiyKits,
            ]
        );
    }

    #[test]
    fn test_new_arrivals() {
        let catalog = Catalog::builtin();
        let arrivals = catalog.new_arrivals(6);
        assert_eq!(arrivals.len(), 6);
        assert_eq!(arrivals[5].name, "Electric Porsche-type Car");
        assert_eq!(catalog.new_arrivals(100).len(), 8);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let product = Product::new("Widget", "A widget", Money::nok(10), Category::Gadgets, "");
        let mut dup = product.clone();
        dup.description = "Another widget".to_string();

        let catalog = Catalog::new([product, dup]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].description, "A widget");
    }

    #[test]
    fn test_search_by_category() {
        let catalog = Catalog::builtin();
        let filter = ProductFilter::new(CategoryFilter::Only(Category::Robots), "");
        let names: Vec<_> = catalog.search(&filter).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Self-balancing Robot", "Roboraptor"]);
    }

    #[test]
    fn test_select_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let wanted = [ProductId::new("Robot Arm Kit"), ProductId::new("Roboraptor")];
        let names: Vec<_> = catalog
            .select(|id| wanted.contains(id))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Roboraptor", "Robot Arm Kit"]);
    }
}
