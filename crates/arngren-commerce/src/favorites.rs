//! The session's favorited products.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Set of favorited product ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present.
    ///
    /// Returns whether the product is a favorite afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(index) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Check membership.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
