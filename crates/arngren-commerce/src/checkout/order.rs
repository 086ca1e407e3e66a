//! The plain-text order sent at checkout.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::CustomerDetails;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::locale::PriceFormatter;
use crate::money::Money;

/// Divider between sections of the order body.
pub const ORDER_SEPARATOR: &str = "--------------------";

/// A validated order, ready to be rendered and handed off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Customer details, trimmed.
    pub customer: CustomerDetails,
    /// Ordered lines, in cart order.
    pub lines: Vec<OrderLine>,
    /// Amount due in the base currency.
    pub total: Money,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Quantity.
    pub quantity: u32,
    /// Unit price in the base currency.
    pub unit_price: Money,
}

impl Order {
    /// Build an order from the cart and the shipping form.
    ///
    /// Fails with [`CommerceError::EmptyCart`] before looking at the form,
    /// then with [`CommerceError::CheckoutIncomplete`] listing blank fields.
    pub fn from_cart(cart: &Cart, customer: &CustomerDetails) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate()?;

        let pricing = cart.calculate_pricing()?;
        let lines = cart
            .items
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id.clone(),
                name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();

        Ok(Self {
            customer: customer.trimmed(),
            lines,
            total: pricing.grand_total,
        })
    }

    /// Render the order body, CRLF-delimited.
    ///
    /// Item lines show the unit price; the total covers all quantities.
    pub fn render_body(&self, formatter: &PriceFormatter) -> String {
        let mut lines = vec![
            "New Order Details:".to_string(),
            ORDER_SEPARATOR.to_string(),
            format!("Name: {}", self.customer.name),
            format!("Delivery Address: {}", self.customer.address),
            ORDER_SEPARATOR.to_string(),
            "Order Summary:".to_string(),
        ];
        lines.extend(self.lines.iter().map(|line| {
            format!(
                "- {} (x{}) - {}",
                line.name,
                line.quantity,
                formatter.format(line.unit_price)
            )
        }));
        lines.push(ORDER_SEPARATOR.to_string());
        lines.push(format!("Total: {}", formatter.format(self.total)));
        lines.join("\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::CheckoutField;
    use crate::locale::Locale;

    fn cart_with(entries: &[(&str, u32)]) -> Cart {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for (name, quantity) in entries {
            let product = catalog.get(&ProductId::new(*name)).unwrap();
            cart.add_item(product, *quantity).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_rejected_first() {
        let err = Order::from_cart(&Cart::new(), &CustomerDetails::default()).unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let cart = cart_with(&[("Roboraptor", 1)]);
        let details = CustomerDetails::new("Kari", " ");
        let err = Order::from_cart(&cart, &details).unwrap_err();
        assert_eq!(err, CommerceError::CheckoutIncomplete(vec![CheckoutField::Address]));
    }

    #[test]
    fn test_render_body_norwegian() {
        let cart = cart_with(&[("RC Tank w/ Air Cannon", 2), ("Robot Arm Kit", 1)]);
        let details = CustomerDetails::new(" Kari Nordmann ", "Storgata 1\n0155 Oslo");
        let order = Order::from_cart(&cart, &details).unwrap();
        assert_eq!(order.total, Money::nok(6494));

        let body = order.render_body(&PriceFormatter::new(Locale::No, 0.095));
        let expected = [
            "New Order Details:",
            "--------------------",
            "Name: Kari Nordmann",
            "Delivery Address: Storgata 1\n0155 Oslo",
            "--------------------",
            "Order Summary:",
            "- RC Tank w/ Air Cannon (x2) - 2\u{a0}998\u{a0}kr",
            "- Robot Arm Kit (x1) - 498\u{a0}kr",
            "--------------------",
            "Total: 6\u{a0}494\u{a0}kr",
        ]
        .join("\r\n");
        assert_eq!(body, expected);
    }

    #[test]
    fn test_render_body_english_converts() {
        let cart = cart_with(&[("RC Tank w/ Air Cannon", 1)]);
        let order = Order::from_cart(&cart, &CustomerDetails::new("A", "B")).unwrap();
        let body = order.render_body(&PriceFormatter::new(Locale::En, 0.095));
        assert!(body.contains("- RC Tank w/ Air Cannon (x1) - $284.81\r\n"));
        assert!(body.ends_with("Total: $284.81"));
    }
}
