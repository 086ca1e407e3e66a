//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Gadgets,
    Robots,
    ElectricVehicles,
    RcProducts,
    DiyKits,
}

impl Category {
    /// Display name, also used as the filter button label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Gadgets => "Gadgets",
            Category::Robots => "Robots",
            Category::ElectricVehicles => "Electric Vehicles",
            Category::RcProducts => "RC Products",
            Category::DiyKits => "DIY Kits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
