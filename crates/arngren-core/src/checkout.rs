//! Checkout form state.

use arngren_commerce::checkout::{CheckoutField, CustomerDetails};
use serde::{Deserialize, Serialize};

/// The shipping form as edited, plus the fields the last submit rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub details: CustomerDetails,
    pub errors: Vec<CheckoutField>,
}

impl CheckoutForm {
    /// Set a field and clear its error.
    pub fn edit(&mut self, field: CheckoutField, value: impl Into<String>) {
        self.details.set(field, value);
        self.errors.retain(|f| *f != field);
    }

    /// Check if the last submit rejected `field`.
    pub fn has_error(&self, field: CheckoutField) -> bool {
        self.errors.contains(&field)
    }

    /// Reset the form after a handoff.
    pub fn clear(&mut self) {
        self.details.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_clears_field_error() {
        let mut form = CheckoutForm {
            errors: vec![CheckoutField::Name, CheckoutField::Address],
            ..Default::default()
        };
        form.edit(CheckoutField::Name, "Kari");
        assert!(!form.has_error(CheckoutField::Name));
        assert!(form.has_error(CheckoutField::Address));
        assert_eq!(form.details.name, "Kari");
    }
}
