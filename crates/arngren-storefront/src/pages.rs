//! One component per view.

use std::ops::RangeInclusive;

use anyhow::{anyhow, Context};
use arngren_commerce::checkout::{CheckoutField, MailTarget, Webmail};
use arngren_commerce::{LineItem, Locale, Money};
use arngren_core::{Intent, View};
use leptos::ev::Event;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::components::{EmptyState, PriceTag, ProductCard, ProductGrid};
use crate::content::{self, FAQS, REVIEWS};
use crate::dispatch::use_dispatcher;

// ============================================================================
// Home
// ============================================================================

#[component]
pub fn HomePage(locale: Signal<Locale>) -> impl IntoView {
    view! {
        <Hero/>
        <NewArrivals locale/>
        <ClientReviews/>
        <Faq/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let dispatcher = use_dispatcher();
    view! {
        <section class="hero container">
            <p class="tagline">"The Future of Fun and Transport"</p>
            <h1>"Explore Frithjof's Inventions & Gadgets"</h1>
            <p>
                "Discover a unique collection of electric vehicles, robots, RC toys, and futuristic gadgets. "
                "From the practical to the unbelievable, find your next adventure here."
            </p>
            <button class="cta-button" on:click=move |_| dispatcher.send(Intent::go(View::AllProducts))>
                "All Products"
            </button>
        </section>
    }
}

/// Direction of a carousel arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Carousel {
    Back,
    Forward,
}

impl Carousel {
    fn label(self) -> &'static str {
        match self {
            Carousel::Back => "Scroll back",
            Carousel::Forward => "Scroll forward",
        }
    }

    /// Horizontal scroll offset for one step of `card_step` pixels.
    fn offset(self, card_step: f64) -> f64 {
        match self {
            Carousel::Back => -card_step,
            Carousel::Forward => card_step,
        }
    }
}

/// Distance from one card to the next, including the gap between them.
/// A lone card steps by its own width.
fn card_step(first_left: f64, first_width: f64, second_left: Option<f64>) -> f64 {
    second_left.map_or(first_width, |left| left - first_left)
}

fn scroll_carousel(grid: &HtmlElement, direction: Carousel) -> anyhow::Result<()> {
    let first = grid.first_element_child().context("carousel has no cards")?;
    let second_left = first
        .next_element_sibling()
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())
        .map(|card| f64::from(card.offset_left()));
    let first = first
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow!("carousel card is not an HTML element"))?;
    let step = card_step(f64::from(first.offset_left()), f64::from(first.offset_width()), second_left);

    let options = ScrollToOptions::new();
    options.set_left(direction.offset(step));
    options.set_behavior(ScrollBehavior::Smooth);
    grid.scroll_by_with_scroll_to_options(&options);
    Ok(())
}

#[component]
fn NewArrivals(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    // The catalog never changes after startup, so there is nothing to track.
    let products = dispatcher.with_untracked(|store| store.new_arrivals().to_vec());
    let grid = NodeRef::<leptos::html::Div>::new();
    let scroll = move |direction: Carousel| {
        let Some(grid) = grid.get_untracked() else {
            return;
        };
        if let Err(err) = scroll_carousel(&grid, direction) {
            tracing::warn!("carousel scroll failed: {err:#}");
        }
    };

    view! {
        <section id="new-arrivals" class="new-arrivals-section container">
            <h2>"New Arrivals"</h2>
            <div class="product-carousel">
                <div
                    class="carousel-arrow left"
                    role="button"
                    aria-label=Carousel::Back.label()
                    on:click=move |_| scroll(Carousel::Back)
                >
                    "‹"
                </div>
                <div class="product-grid" node_ref=grid>
                    {products.into_iter().map(|product| view! {
                        <ProductCard product locale/>
                    }).collect::<Vec<_>>()}
                </div>
                <div
                    class="carousel-arrow right"
                    role="button"
                    aria-label=Carousel::Forward.label()
                    on:click=move |_| scroll(Carousel::Forward)
                >
                    "›"
                </div>
            </div>
        </section>
    }
}

#[component]
fn ClientReviews() -> impl IntoView {
    view! {
        <section id="client-reviews" class="client-reviews-section container section">
            <h2 class="section-title">"Client Reviews"</h2>
            <p class="section-subtitle">
                "See what our adventurous customers have to say about our unique products."
            </p>
            <div class="reviews-grid">
                {REVIEWS.iter().map(|review| view! {
                    <div class="review-card">
                        <p>{format!("\"{}\"", review.quote)}</p>
                        <div class="review-author">
                            <div class="author-avatar"></div>
                            <div class="author-info">
                                <h4>{review.name}</h4>
                                <span>{review.company}</span>
                            </div>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section id="faq" class="faq-section container section">
            <h2 class="section-title">"Frequently Asked Questions"</h2>
            <p class="section-subtitle">"Have questions? We've got answers."</p>
            <div class="faq-list">
                {FAQS.iter().enumerate().map(|(index, faq)| {
                    let is_open = move || open.get() == Some(index);
                    view! {
                        <div class="faq-item">
                            <div
                                class="faq-question"
                                role="button"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| open.update(|o| *o = content::toggle_faq(*o, index))
                            >
                                <span>{faq.question}</span>
                                <span class=move || if is_open() { "faq-icon open" } else { "faq-icon" }>"+"</span>
                            </div>
                            <Show when=is_open>
                                <div class="faq-answer"><p>{faq.answer}</p></div>
                            </Show>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

// ============================================================================
// Catalog Pages
// ============================================================================

#[component]
pub fn AllProductsPage(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    // Categories come from the catalog, which is fixed for the session.
    let options = dispatcher.with_untracked(|store| store.category_options());
    let active = move || dispatcher.with(|store| store.nav().category);
    let products = move || dispatcher.with(|store| {
        store.visible_products().into_iter().cloned().collect::<Vec<_>>()
    });

    view! {
        <div class="page-container container">
            <h1 class="page-title">"All Products"</h1>
            <div class="category-filters">
                {options.into_iter().map(|option| view! {
                    <button
                        class=move || if active() == option { "category-btn active" } else { "category-btn" }
                        on:click=move |_| dispatcher.send(Intent::SelectCategory(option))
                    >
                        {option.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
            {move || {
                let products = products();
                if products.is_empty() {
                    view! { <EmptyState message="No products found matching your criteria."/> }.into_any()
                } else {
                    view! { <ProductGrid products locale/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn FavoritesPage(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let products = move || dispatcher.with(|store| {
        store.favorite_products().into_iter().cloned().collect::<Vec<_>>()
    });

    view! {
        <div class="page-container container">
            <h1 class="page-title">"My Favorites"</h1>
            {move || {
                let products = products();
                if products.is_empty() {
                    view! {
                        <EmptyState
                            message="You haven't favorited any items yet."
                            action="Explore Products"
                        />
                    }.into_any()
                } else {
                    view! { <ProductGrid products locale/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn ProductDetailPage(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let product = move || dispatcher.with(|store| store.selected_product().cloned());

    view! {
        <div class="page-container container">
            <button class="back-button" on:click=move |_| dispatcher.send(Intent::go(View::AllProducts))>
                <span>"Back to Products"</span>
            </button>
            {move || match product() {
                Some(product) => {
                    let id = product.id.clone();
                    view! {
                        <div class="product-detail-container">
                            <div class="product-gallery">
                                <div class="main-image">
                                    <img src=product.image_url.clone() alt=product.name.clone()/>
                                </div>
                            </div>
                            <div class="product-purchase-info">
                                <h2>{product.name.clone()}</h2>
                                <p class="price"><PriceTag amount=product.price locale/></p>
                                <p class="description">
                                    {format!(
                                        "{}. This item is categorized under {}.",
                                        product.description, product.category
                                    )}
                                </p>
                                <div class="add-to-cart-form">
                                    <button
                                        class="cta-button"
                                        on:click=move |_| dispatcher.send(Intent::AddToCart {
                                            product: id.clone(),
                                            quantity: 1,
                                        })
                                    >
                                        "Add to Cart"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
                None => view! { <EmptyState message="Product not found." action="Browse Products"/> }.into_any(),
            }}
        </div>
    }
}

// ============================================================================
// Cart & Checkout
// ============================================================================

#[component]
pub fn CartPage(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let items = move || dispatcher.with(|store| store.cart().items.clone());
    let subtotal = move || {
        dispatcher.with(|store| {
            store
                .cart_pricing()
                .map(|p| p.subtotal)
                .unwrap_or_else(|| Money::nok(0))
        })
    };
    let accepted = dispatcher.with_untracked(|store| store.cart().quantity_range());

    view! {
        <div class="page-container container">
            <h1 class="page-title">"My Cart"</h1>
            {move || {
                let items = items();
                if items.is_empty() {
                    return view! {
                        <EmptyState message="Your cart is empty." action="Continue Shopping"/>
                    }.into_any();
                }
                view! {
                    <div class="cart-container">
                        <div class="cart-items-list">
                            {items.into_iter().map(|item| view! {
                                <CartLine item accepted=accepted.clone() locale/>
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="cart-summary">
                            <h2>"Order Summary"</h2>
                            <div class="summary-row">
                                <span>"Subtotal"</span>
                                <span>{move || view! { <PriceTag amount=subtotal() locale/> }}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Shipping"</span>
                                <span>"Calculated at next step"</span>
                            </div>
                            <div class="summary-row total-price">
                                <span>"Total"</span>
                                <span>{move || view! { <PriceTag amount=subtotal() locale/> }}</span>
                            </div>
                            <button class="cta-button" on:click=move |_| dispatcher.send(Intent::go(View::Checkout))>
                                "Check Out"
                            </button>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Entries of a line's quantity selector as `(quantity, enabled)`.
///
/// Only quantities the cart accepts are enabled. A line pushed past the
/// limit by repeated adds also lists its current quantity, disabled, so the
/// selector can still show it.
fn quantity_options(current: u32, accepted: RangeInclusive<u32>) -> Vec<(u32, bool)> {
    let mut options: Vec<_> = accepted.clone().map(|n| (n, true)).collect();
    if !accepted.contains(&current) {
        options.push((current, false));
    }
    options
}

#[component]
fn CartLine(item: LineItem, accepted: RangeInclusive<u32>, locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let remove_id = item.product_id.clone();
    let update_id = item.product_id.clone();
    let quantity = item.quantity;

    view! {
        <div class="cart-item">
            <div class="cart-item-image"><img src=item.image_url.clone() alt=item.product_name.clone()/></div>
            <div class="cart-item-details">
                <h3>{item.product_name.clone()}</h3>
                <p>{item.description.clone()}</p>
                <button
                    class="remove-item-btn"
                    on:click=move |_| dispatcher.send(Intent::RemoveFromCart(remove_id.clone()))
                >
                    "Remove"
                </button>
            </div>
            <select
                class="quantity-selector"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<i64>() {
                        Ok(quantity) => dispatcher.send(Intent::UpdateQuantity {
                            product: update_id.clone(),
                            quantity,
                        }),
                        Err(err) => tracing::warn!(error = %err, "unreadable quantity"),
                    }
                }
            >
                {quantity_options(quantity, accepted).into_iter().map(|(n, enabled)| view! {
                    <option value={n.to_string()} selected={n == quantity} disabled={!enabled}>
                        {n.to_string()}
                    </option>
                }).collect::<Vec<_>>()}
            </select>
            <div class="cart-item-price"><PriceTag amount=item.total_price locale/></div>
        </div>
    }
}

#[component]
pub fn CheckoutPage(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let cart_empty = move || dispatcher.with(|store| store.cart().is_empty());

    view! {
        <div class="page-container container">
            <Show
                when=move || !cart_empty()
                fallback=|| view! {
                    <EmptyState
                        message="Your cart is empty. You cannot proceed to checkout."
                        action="Continue Shopping"
                    />
                }
            >
                <h1 class="page-title">"Checkout"</h1>
                <div class="checkout-container">
                    <ShippingForm/>
                    <CheckoutSummary locale/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ShippingForm() -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <form
            class="shipping-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                dispatcher.send(Intent::SubmitOrder(MailTarget::DefaultClient));
            }
        >
            <h2>"Shipping Information"</h2>
            <FormField field=CheckoutField::Name multiline=false/>
            <FormField field=CheckoutField::Address multiline=true/>
            <button type="submit" class="cta-button">"Confirm & Send Order via Email"</button>
            <div class="webmail-options">
                {Webmail::ALL.into_iter().map(|provider| view! {
                    <button
                        type="button"
                        class="webmail-btn"
                        on:click=move |_| dispatcher.send(Intent::SubmitOrder(MailTarget::Webmail(provider)))
                    >
                        {format!("Send via {}", provider.label())}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </form>
    }
}

#[component]
fn FormField(field: CheckoutField, multiline: bool) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let id = match field {
        CheckoutField::Name => "name",
        CheckoutField::Address => "address",
    };
    let value = move || dispatcher.with(|store| store.checkout().details.get(field).to_string());
    let invalid = move || dispatcher.with(|store| store.checkout().has_error(field));
    let edit = move |ev: Event| {
        dispatcher.send(Intent::EditCheckout {
            field,
            value: event_target_value(&ev),
        })
    };

    let input = if multiline {
        view! { <textarea id=id name=id prop:value=value on:input=edit></textarea> }.into_any()
    } else {
        view! { <input type="text" id=id name=id prop:value=value on:input=edit/> }.into_any()
    };

    view! {
        <div class=move || if invalid() { "form-group invalid" } else { "form-group" }>
            <label for=id>{field.label()}</label>
            {input}
            <Show when=invalid>
                <span class="field-error">{format!("{} is required", field.label())}</span>
            </Show>
        </div>
    }
}

#[component]
fn CheckoutSummary(locale: Signal<Locale>) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let lines = move || dispatcher.with(|store| store.cart().items.clone());
    let total = move || {
        dispatcher.with(|store| {
            store
                .cart_pricing()
                .map(|p| p.grand_total)
                .unwrap_or_else(|| Money::nok(0))
        })
    };

    view! {
        <div class="order-summary-checkout">
            <h2>"Order Summary"</h2>
            {move || lines().into_iter().map(|item| view! {
                <div class="summary-item">
                    <span class="summary-item-name">
                        {format!("{} (x{})", item.product_name, item.quantity)}
                    </span>
                    <PriceTag amount=item.total_price locale/>
                </div>
            }).collect::<Vec<_>>()}
            <div class="total-price">
                <span>"Total"</span>
                {move || view! { <PriceTag amount=total() locale/> }}
            </div>
        </div>
    }
}

// ============================================================================
// Static Pages
// ============================================================================

#[component]
pub fn StaticPage(page: &'static content::InfoPage) -> impl IntoView {
    view! {
        <div class="page-container container">
            <h2 class="page-title">{page.title}</h2>
            <div class="content-block">
                {page.blocks.iter().map(|block| view! {
                    {block.heading.map(|heading| view! { <h4>{heading}</h4> })}
                    <p>{block.body}</p>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
