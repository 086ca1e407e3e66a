//! User actions delivered to the state owner.

use arngren_commerce::checkout::{CheckoutField, MailTarget};
use arngren_commerce::search::CategoryFilter;
use arngren_commerce::ProductId;

use crate::navigation::{Section, View};
use crate::notifications::{NotificationId, Severity};
use crate::scheduler::TaskId;

/// Something the user did, or a timer that elapsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Show a view, optionally selecting a product first.
    Navigate {
        view: View,
        product: Option<ProductId>,
    },
    /// Show a section of the home page.
    NavigateToSection(Section),
    /// The "All Products" link: clears the search, then navigates.
    BrowseAll,
    /// Search box edited.
    SetSearchQuery(String),
    /// Search box submitted.
    SubmitSearch,
    /// Category button pressed.
    SelectCategory(CategoryFilter),
    /// Hamburger button or overlay pressed.
    ToggleMobileMenu,

    AddToCart {
        product: ProductId,
        quantity: u32,
    },
    UpdateQuantity {
        product: ProductId,
        quantity: i64,
    },
    RemoveFromCart(ProductId),
    ToggleFavorite(ProductId),

    /// Raise a notification.
    Notify {
        message: String,
        severity: Severity,
    },
    /// Notification clicked.
    DismissNotification(NotificationId),

    ToggleTheme,
    ToggleLocale,

    /// Checkout form field edited.
    EditCheckout {
        field: CheckoutField,
        value: String,
    },
    /// Checkout form submitted.
    SubmitOrder(MailTarget),

    /// A scheduled task's timer elapsed.
    TimerFired(TaskId),
}

impl Intent {
    /// Navigate without selecting a product.
    pub fn go(view: View) -> Self {
        Intent::Navigate {
            view,
            product: None,
        }
    }

    /// Open a product's detail page.
    pub fn show_product(product: ProductId) -> Self {
        Intent::Navigate {
            view: View::ProductDetail,
            product: Some(product),
        }
    }
}
