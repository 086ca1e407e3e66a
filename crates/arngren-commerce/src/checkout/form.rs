//! Customer details collected at checkout.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// A required checkout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutField {
    Name,
    Address,
}

impl CheckoutField {
    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Name => "Full Name",
            CheckoutField::Address => "Delivery Address",
        }
    }

    /// Comma-separated labels, used in error messages.
    pub fn join(fields: &[CheckoutField]) -> String {
        fields
            .iter()
            .map(CheckoutField::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The shipping form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Free-form delivery address.
    pub address: String,
}

impl CustomerDetails {
    /// Create customer details.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Set one field.
    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        match field {
            CheckoutField::Name => self.name = value.into(),
            CheckoutField::Address => self.address = value.into(),
        }
    }

    /// Read one field.
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Name => &self.name,
            CheckoutField::Address => &self.address,
        }
    }

    /// Fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        [CheckoutField::Name, CheckoutField::Address]
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing))
        }
    }

    /// Copy with surrounding whitespace removed.
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.address.trim())
    }

    /// Reset both fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.address.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details_validate() {
        let details = CustomerDetails::new("Ola Nordmann", "Storgata 1, Oslo");
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_reported() {
        let details = CustomerDetails::new("   ", "");
        let err = details.validate().unwrap_err();
        assert_eq!(
            err,
            CommerceError::CheckoutIncomplete(vec![CheckoutField::Name, CheckoutField::Address])
        );
        assert_eq!(
            err.to_string(),
            "Checkout incomplete: missing Full Name, Delivery Address"
        );
    }

    #[test]
    fn test_set_and_clear() {
        let mut details = CustomerDetails::default();
        details.set(CheckoutField::Address, "Storgata 1");
        assert_eq!(details.missing_fields(), vec![CheckoutField::Name]);

        details.set(CheckoutField::Name, " Kari ");
        assert_eq!(details.trimmed().name, "Kari");

        details.clear();
        assert_eq!(details, CustomerDetails::default());
    }
}
