//! Shared components.

use arngren_commerce::{Locale, Money, PriceFormatter, Product};
use arngren_core::{Intent, View};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::dispatch::use_dispatcher;

// ============================================================================
// Prices
// ============================================================================

/// A base-currency amount rendered for the active locale.
#[component]
pub fn PriceTag(amount: Money, locale: Signal<Locale>) -> impl IntoView {
    let rate = use_dispatcher().usd_per_nok();
    move || PriceFormatter::new(locale.get(), rate).format(amount)
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
pub fn ProductGrid(products: Vec<Product>, locale: Signal<Locale>) -> impl IntoView {
    view! {
        <div class="all-products-grid">
            {products.into_iter().map(|product| {
                view! { <ProductCard product locale/> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Listing card: image, favorite toggle, price with discount, quick add.
#[component]
pub fn ProductCard(product: Product, locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();

    let select = {
        let id = product.id.clone();
        move |_: MouseEvent| dispatcher.send(Intent::show_product(id.clone()))
    };
    let is_favorite = {
        let id = product.id.clone();
        move || dispatcher.with(|store| store.favorites().contains(&id))
    };
    let favorite_id = product.id.clone();
    let cart_id = product.id.clone();

    let discount = product.discount_percent();
    let original = product.original_price.filter(|_| product.is_on_sale());

    view! {
        <div class="product-card">
            <div class="product-image" on:click=select.clone()>
                <img src=product.image_url.clone() alt=product.name.clone()/>
            </div>
            <button
                class=move || if is_favorite() { "favorite-btn favorited" } else { "favorite-btn" }
                aria-label=format!("Favorite {}", product.name)
                on:click=move |ev| {
                    ev.stop_propagation();
                    dispatcher.send(Intent::ToggleFavorite(favorite_id.clone()));
                }
            >
                <HeartIcon/>
            </button>
            <div class="product-info" on:click=select>
                <div class="product-details">
                    <h3>{product.name.clone()}</h3>
                    <p class="description truncate-text">{product.description.clone()}</p>
                    <div class="product-price">
                        <span><PriceTag amount=product.price locale/></span>
                        {original.map(|original| view! {
                            <span class="original-price"><s><PriceTag amount=original locale/></s></span>
                            <span class="discount">{format!("-{discount}%")}</span>
                        })}
                    </div>
                </div>
                <button
                    class="add-to-cart-btn"
                    aria-label=format!("Add {} to cart", product.name)
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dispatcher.send(Intent::AddToCart { product: cart_id.clone(), quantity: 1 });
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}

#[component]
fn HeartIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24">
            <path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"></path>
        </svg>
    }
}

// ============================================================================
// Feedback
// ============================================================================

/// Placeholder for an empty page, with a way back to the catalog.
#[component]
pub fn EmptyState(message: &'static str, #[prop(optional)] action: Option<&'static str>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    view! {
        <div class="empty-state">
            <p>{message}</p>
            {action.map(|label| view! {
                <button class="cta-button" on:click=move |_| dispatcher.send(Intent::go(View::AllProducts))>
                    {label}
                </button>
            })}
        </div>
    }
}

/// Toasts in the corner; clicking one dismisses it.
#[component]
pub fn Notifications() -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <div class="notifications-container">
            <For
                each=move || dispatcher.with(|store| store.notifications().items().to_vec())
                key=|note| note.id
                children=move |note| {
                    let id = note.id;
                    let severity = note.severity.as_str();
                    let exiting = move || {
                        dispatcher.with(|store| {
                            store.notifications().get(id).is_some_and(|n| n.exiting)
                        })
                    };
                    view! {
                        <div
                            class=move || {
                                if exiting() {
                                    format!("notification {severity} exit")
                                } else {
                                    format!("notification {severity}")
                                }
                            }
                            on:click=move |_| dispatcher.send(Intent::DismissNotification(id))
                        >
                            {note.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
