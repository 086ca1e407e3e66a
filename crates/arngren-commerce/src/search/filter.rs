//! Product filter types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Category, Product};

/// Label of the catch-all category filter.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// The active category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Button label ("All" or the category name).
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// `"All"` followed by each category, as shown on the filter bar.
    pub fn options(categories: &[Category]) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(categories.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    /// Check if a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus free-text filter over product names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductFilter {
    /// Category restriction.
    pub category: CategoryFilter,
    /// Raw query text as typed; trimmed when matching.
    pub query: String,
}

impl ProductFilter {
    /// Create a filter.
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Trimmed query, `None` when blank.
    pub fn effective_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Check if a product passes both the category and the name query.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }
        match self.effective_query() {
            Some(query) => product.name_matches(query),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(filter: &ProductFilter) -> Vec<String> {
        Catalog::builtin()
            .search(filter)
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_unfiltered_returns_everything() {
        assert_eq!(names(&ProductFilter::default()).len(), 8);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let filter = ProductFilter::new(CategoryFilter::All, "  ROBO ");
        assert_eq!(
            names(&filter),
            vec!["Self-balancing Robot", "Roboraptor", "Robot Arm Kit"]
        );
    }

    #[test]
    fn test_query_matches_names_only() {
        // "snow" appears only in a description
        let filter = ProductFilter::new(CategoryFilter::All, "snow");
        assert!(names(&filter).is_empty());
    }

    #[test]
    fn test_category_and_query_combine() {
        let filter = ProductFilter::new(CategoryFilter::Only(Category::Robots), "robot");
        assert_eq!(names(&filter), vec!["Self-balancing Robot"]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let filter = ProductFilter::new(CategoryFilter::Only(Category::DiyKits), "   ");
        assert_eq!(filter.effective_query(), None);
        assert_eq!(names(&filter), vec!["Robot Arm Kit"]);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Only(Category::DiyKits).label(), "DIY Kits");
    }

    #[test]
    fn test_options_start_with_all() {
        let options = CategoryFilter::options(&Catalog::builtin().categories());
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(Category::Gadgets));
    }
}
