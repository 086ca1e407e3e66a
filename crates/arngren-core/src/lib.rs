//! State owner for the ARNGREN.net storefront.
//!
//! A view turns a user action into an [`Intent`]; [`Storefront::apply`]
//! updates navigation, shopping, preference and notification state and
//! returns the [`Effect`]s the platform must perform. Deferred steps
//! (notification expiry, the post-navigation section scroll) are
//! [`Effect::Schedule`] requests answered later with
//! [`Intent::TimerFired`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use arngren_core::prelude::*;
//!
//! let store = Storefront::new(
//!     StoreConfig::builtin()?,
//!     Catalog::builtin(),
//!     Preferences::default(),
//! );
//! let mut timeline = Timeline::new(store);
//!
//! timeline.dispatch(Intent::AddToCart {
//!     product: ProductId::new("Roboraptor"),
//!     quantity: 1,
//! });
//! assert_eq!(timeline.storefront().notifications().len(), 1);
//!
//! timeline.advance_to(Duration::from_millis(3300));
//! assert!(timeline.storefront().notifications().is_empty());
//! # Ok::<(), arngren_core::ConfigError>(())
//! ```

mod checkout;
mod config;
mod effect;
mod error;
mod intent;
mod navigation;
mod notifications;
mod preferences;
mod scheduler;
mod store;
mod timeline;

pub use checkout::CheckoutForm;
pub use config::{OrderConfig, PricingConfig, StoreConfig, TimingConfig, BUILTIN_CONFIG};
pub use effect::Effect;
pub use error::ConfigError;
pub use intent::Intent;
pub use navigation::{NavigationState, Section, View};
pub use notifications::{Notification, NotificationId, NotificationQueue, Severity};
pub use preferences::{PlatformHints, Preference, Preferences, Theme, LOCALE_KEY, THEME_KEY};
pub use scheduler::{Scheduler, Task, TaskId};
pub use store::Storefront;
pub use timeline::Timeline;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CheckoutForm, ConfigError, Effect, Intent, NavigationState, Notification,
        NotificationId, PlatformHints, Preference, Preferences, Section, Severity, StoreConfig,
        Storefront, Theme, Timeline, View,
    };
    pub use arngren_commerce::prelude::*;
}
