//! Checkout module.
//!
//! Contains the customer form, the plain-text order, and the mail handoff
//! that replaces payment.

mod form;
mod handoff;
mod order;

pub use form::{CheckoutField, CustomerDetails};
pub use handoff::{MailHandoff, MailTarget, Webmail};
pub use order::{Order, OrderLine, ORDER_SEPARATOR};
