//! ARNGREN.net storefront, rendered in the browser with Leptos.
//!
//! [`start`] reads the compiled-in configuration, installs logging, resolves
//! the theme and locale from `localStorage` and platform hints, then mounts
//! [`App`] on the document body. Every user action goes through the
//! [`Dispatcher`], which owns the [`Storefront`] and performs the effects it
//! returns.

mod app;
mod components;
mod content;
mod dispatch;
mod pages;

pub use app::App;
pub use dispatch::{use_dispatcher, Dispatcher};

use arngren_commerce::Catalog;
use arngren_core::{StoreConfig, Storefront};
use leptos::prelude::*;

/// Mount the storefront on the document body.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = StoreConfig::builtin().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("invalid built-in config, using defaults: {err}").into());
        StoreConfig::default()
    });
    if let Err(err) = arngren_observability::init(&config.logging) {
        web_sys::console::warn_1(&format!("logging not installed: {err}").into());
    }

    let preferences = dispatch::load_preferences();
    tracing::info!(
        theme = %preferences.theme,
        locale = %preferences.locale,
        "storefront starting"
    );

    let store = Storefront::new(config, Catalog::builtin(), preferences);
    leptos::mount::mount_to_body(move || view! { <App store/> });
}
