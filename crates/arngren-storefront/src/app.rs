//! Application shell and layout components.

use arngren_commerce::Locale;
use arngren_core::{Intent, Section, Storefront, Theme, View};
use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;

use crate::components::Notifications;
use crate::content;
use crate::dispatch::{use_dispatcher, Dispatcher};
use crate::pages::{
    AllProductsPage, CartPage, CheckoutPage, FavoritesPage, HomePage, ProductDetailPage, StaticPage,
};

// ============================================================================
// Navigation Items
// ============================================================================

/// An entry in the navigation bar, the mobile menu or the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Clears the search, then shows every product.
    AllProducts,
    Section(Section),
    Page(View),
}

impl NavItem {
    /// Entries of the navigation bar after "All Products".
    pub const BAR: [NavItem; 5] = [
        NavItem::Section(Section::NewArrivals),
        NavItem::Section(Section::ClientReviews),
        NavItem::Section(Section::Faq),
        NavItem::Page(View::Shipping),
        NavItem::Page(View::Warranty),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::AllProducts => "All Products",
            NavItem::Section(section) => section.label(),
            NavItem::Page(View::Warranty) => "Warranty",
            NavItem::Page(view) => view.title(),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            NavItem::AllProducts => Intent::BrowseAll,
            NavItem::Section(section) => Intent::NavigateToSection(*section),
            NavItem::Page(view) => Intent::go(*view),
        }
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let dispatcher = use_dispatcher();
    view! {
        <a on:click=move |_| dispatcher.send(item.intent())>{item.label()}</a>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(store: Storefront) -> impl IntoView {
    provide_meta_context();

    let startup = store.startup_effects();
    let brand = store.config().brand.clone();
    let dispatcher = Dispatcher::new(store);
    provide_context(dispatcher);
    dispatcher.run_all(startup);

    let locale = Signal::derive(move || dispatcher.with(|store| store.preferences().locale));
    let current = Memo::new(move |_| dispatcher.with(|store| store.nav().view));
    let title = move || format!("{} | {}", current.get().title(), brand);

    view! {
        <Title text=title/>
        <Notifications/>
        <Header locale/>
        <MobileNav/>
        <NavBar/>
        <main class="main-content">
            {move || match current.get() {
                View::Home => view! { <HomePage locale/> }.into_any(),
                View::AllProducts => view! { <AllProductsPage locale/> }.into_any(),
                View::Favorites => view! { <FavoritesPage locale/> }.into_any(),
                View::ProductDetail => view! { <ProductDetailPage locale/> }.into_any(),
                View::Cart => view! { <CartPage locale/> }.into_any(),
                View::Checkout => view! { <CheckoutPage locale/> }.into_any(),
                other => match content::info_page(other) {
                    Some(page) => view! { <StaticPage page/> }.into_any(),
                    None => ().into_any(),
                },
            }}
        </main>
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let brand = dispatcher.with_untracked(|store| store.config().brand.clone());
    let theme = move || dispatcher.with(|store| store.preferences().theme);
    let favorites = move || dispatcher.with(|store| store.favorites().len());
    let cart_units = move || dispatcher.with(|store| store.cart_item_count());

    view! {
        <header class="header container">
            <button
                class="hamburger-menu"
                aria-label="Open navigation menu"
                on:click=move |_| dispatcher.send(Intent::ToggleMobileMenu)
            >
                <span></span><span></span><span></span>
            </button>
            <a class="logo" on:click=move |_| dispatcher.send(Intent::go(View::Home))>{brand}</a>
            <form
                class="search-container"
                on:submit=move |ev| {
                    ev.prevent_default();
                    dispatcher.send(Intent::SubmitSearch);
                }
            >
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for gadgets, robots..."
                    prop:value=move || dispatcher.with(|store| store.nav().search_query.clone())
                    on:input=move |ev| dispatcher.send(Intent::SetSearchQuery(event_target_value(&ev)))
                />
                <button type="submit" class="search-icon-btn" aria-label="Search">"Search"</button>
            </form>
            <div class="user-actions">
                <button
                    class="theme-toggle-btn action-item"
                    aria-label=move || format!("Switch to {} mode", theme().toggled())
                    on:click=move |_| dispatcher.send(Intent::ToggleTheme)
                >
                    {move || match theme() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }}
                </button>
                <button
                    class="locale-toggle-btn action-item"
                    aria-label=move || format!("Switch to {}", locale.get().toggled().label())
                    on:click=move |_| dispatcher.send(Intent::ToggleLocale)
                >
                    {move || locale.get().label()}
                </button>
                <a class="action-item" on:click=move |_| dispatcher.send(Intent::go(View::Favorites))>
                    "Favorites"
                    <Show when=move || { favorites() > 0 }>
                        <span class="item-count">{favorites}</span>
                    </Show>
                </a>
                <a class="action-item" on:click=move |_| dispatcher.send(Intent::go(View::Cart))>
                    "Cart"
                    <Show when=move || { cart_units() > 0 }>
                        <span class="item-count">{cart_units}</span>
                    </Show>
                </a>
            </div>
        </header>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="navigation">
            <ul class="nav-links container">
                <li class="nav-link"><NavLink item=NavItem::AllProducts/></li>
                {NavItem::BAR.into_iter().map(|item| view! {
                    <li class="nav-link"><NavLink item/></li>
                }).collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

#[component]
fn MobileNav() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let open = move || dispatcher.with(|store| store.nav().mobile_menu_open);
    let items = std::iter::once(NavItem::AllProducts)
        .chain(NavItem::BAR)
        .chain([NavItem::Page(View::Favorites), NavItem::Page(View::Cart)]);

    view! {
        <div
            class=move || if open() { "mobile-nav-overlay open" } else { "mobile-nav-overlay" }
            on:click=move |_| dispatcher.send(Intent::ToggleMobileMenu)
        ></div>
        <div class=move || if open() { "mobile-nav-menu open" } else { "mobile-nav-menu" }>
            <div class="mobile-nav-header">
                <h3>"Hello, Guest"</h3>
            </div>
            <button class="close-btn" on:click=move |_| dispatcher.send(Intent::ToggleMobileMenu)>
                "×"
            </button>
            <ul>
                {items.map(|item| view! { <li><NavLink item/></li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let brand = dispatcher.with_untracked(|store| store.config().brand.clone());
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-content container">
                <div class="footer-top">
                    <div class="footer-logo">{brand.clone()}</div>
                    <nav class="footer-nav">
                        <NavLink item=NavItem::Page(View::AllProducts)/>
                        <NavLink item=NavItem::Page(View::Shipping)/>
                        <NavLink item=NavItem::Page(View::Warranty)/>
                        <NavLink item=NavItem::Section(Section::Faq)/>
                    </nav>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {year} {brand}. All rights reserved.")}</p>
                    <div class="footer-legal">
                        <NavLink item=NavItem::Page(View::Privacy)/>
                        <NavLink item=NavItem::Page(View::Terms)/>
                    </div>
                </div>
            </div>
        </footer>
    }
}
