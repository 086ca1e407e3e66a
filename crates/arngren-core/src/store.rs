//! The single state owner.
//!
//! [`Storefront`] holds every piece of mutable state and applies one
//! [`Intent`] at a time, returning the [`Effect`]s the platform must carry
//! out. It never touches the clock, the DOM or storage itself.

use std::sync::Arc;

use arngren_commerce::cart::{Cart, CartPricing};
use arngren_commerce::catalog::{Catalog, Product};
use arngren_commerce::checkout::{CheckoutField, MailTarget, Order};
use arngren_commerce::favorites::Favorites;
use arngren_commerce::search::CategoryFilter;
use arngren_commerce::{CommerceError, PriceFormatter, ProductId};

use crate::checkout::CheckoutForm;
use crate::config::StoreConfig;
use crate::effect::Effect;
use crate::intent::Intent;
use crate::navigation::{NavigationState, Section, View};
use crate::notifications::{NotificationId, NotificationQueue, Severity};
use crate::preferences::{Preference, Preferences};
use crate::scheduler::{Scheduler, Task, TaskId};

/// Application state.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: Arc<StoreConfig>,
    catalog: Arc<Catalog>,
    nav: NavigationState,
    cart: Cart,
    favorites: Favorites,
    preferences: Preferences,
    notifications: NotificationQueue,
    checkout: CheckoutForm,
    scheduler: Scheduler,
}

impl Storefront {
    /// Create the state for a fresh session.
    pub fn new(config: StoreConfig, catalog: Catalog, preferences: Preferences) -> Self {
        let cart = Cart::new().with_max_quantity(config.pricing.max_line_quantity);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            nav: NavigationState::default(),
            cart,
            favorites: Favorites::new(),
            preferences,
            notifications: NotificationQueue::new(),
            checkout: CheckoutForm::default(),
            scheduler: Scheduler::new(),
        }
    }

    /// Effects that bring the document in line with the initial state.
    pub fn startup_effects(&self) -> Vec<Effect> {
        vec![
            Effect::ApplyTheme(self.preferences.theme),
            Effect::ApplyLocale(self.preferences.locale),
        ]
    }

    /// Apply one intent.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        tracing::trace!(?intent, "apply");
        match intent {
            Intent::Navigate { view, product } => self.navigate(view, product),
            Intent::NavigateToSection(section) => self.navigate_to_section(section),
            Intent::BrowseAll => {
                self.nav.search_query.clear();
                self.navigate(View::AllProducts, None)
            }
            Intent::SetSearchQuery(query) => {
                self.nav.search_query = query;
                Vec::new()
            }
            Intent::SubmitSearch => self.navigate(View::AllProducts, None),
            Intent::SelectCategory(category) => {
                self.nav.category = category;
                Vec::new()
            }
            Intent::ToggleMobileMenu => {
                self.nav.mobile_menu_open = !self.nav.mobile_menu_open;
                Vec::new()
            }
            Intent::AddToCart { product, quantity } => self.add_to_cart(&product, quantity),
            Intent::UpdateQuantity { product, quantity } => {
                self.update_quantity(&product, quantity);
                Vec::new()
            }
            Intent::RemoveFromCart(product) => {
                if self.cart.remove_item(&product) {
                    tracing::debug!(%product, "removed from cart");
                }
                Vec::new()
            }
            Intent::ToggleFavorite(product) => {
                self.toggle_favorite(&product);
                Vec::new()
            }
            Intent::Notify { message, severity } => self.notify(message, severity),
            Intent::DismissNotification(id) => self.dismiss(id),
            Intent::ToggleTheme => {
                let theme = self.preferences.theme.toggled();
                self.preferences.theme = theme;
                tracing::debug!(%theme, "theme changed");
                vec![
                    Effect::ApplyTheme(theme),
                    Effect::Persist(Preference::Theme(theme)),
                ]
            }
            Intent::ToggleLocale => {
                let locale = self.preferences.locale.toggled();
                self.preferences.locale = locale;
                tracing::debug!(%locale, "locale changed");
                vec![
                    Effect::ApplyLocale(locale),
                    Effect::Persist(Preference::Locale(locale)),
                ]
            }
            Intent::EditCheckout { field, value } => {
                self.checkout.edit(field, value);
                Vec::new()
            }
            Intent::SubmitOrder(target) => self.submit_order(target),
            Intent::TimerFired(task) => self.fire(task),
        }
    }

    fn navigate(&mut self, view: View, product: Option<ProductId>) -> Vec<Effect> {
        let product = product.filter(|id| {
            let known = self.catalog.get(id).is_some();
            if !known {
                tracing::warn!(product = %id, "ignoring unknown product");
            }
            known
        });
        self.nav.go_to(view, product);
        tracing::debug!(%view, "navigated");
        vec![Effect::ScrollToTop]
    }

    fn navigate_to_section(&mut self, section: Section) -> Vec<Effect> {
        self.nav.mobile_menu_open = false;
        if self.nav.view == View::Home {
            return vec![Effect::ScrollToSection(section)];
        }
        self.nav.view = View::Home;
        let task = self.scheduler.schedule(Task::ScrollToSection(section));
        vec![Effect::Schedule {
            task,
            delay: self.config.timing.section_scroll_delay(),
        }]
    }

    fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> Vec<Effect> {
        let catalog = Arc::clone(&self.catalog);
        let Some(product) = catalog.get(id) else {
            tracing::warn!(product = %id, "ignoring unknown product");
            return Vec::new();
        };
        let added = self.cart.add_item(product, quantity).map(|line| line.quantity);
        match added {
            Ok(line_quantity) => {
                tracing::info!(product = %id, quantity, line_quantity, "added to cart");
                self.notify(format!("{} added to cart!", product.name), Severity::Success)
            }
            Err(e) => {
                tracing::warn!(product = %id, error = %e, "add to cart rejected");
                Vec::new()
            }
        }
    }

    fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        match self.cart.update_quantity(id, quantity) {
            Ok(true) => tracing::debug!(product = %id, quantity, "quantity updated"),
            Ok(false) => tracing::warn!(product = %id, "quantity update for missing line"),
            Err(e) => tracing::warn!(product = %id, error = %e, "quantity update rejected"),
        }
    }

    fn toggle_favorite(&mut self, id: &ProductId) {
        if self.catalog.get(id).is_none() {
            tracing::warn!(product = %id, "ignoring unknown product");
            return;
        }
        let favorite = self.favorites.toggle(id);
        tracing::debug!(product = %id, favorite, "favorite toggled");
    }

    fn notify(&mut self, message: String, severity: Severity) -> Vec<Effect> {
        let id = self.notifications.push(message, severity);
        let task = self.scheduler.schedule(Task::BeginExit(id));
        vec![Effect::Schedule {
            task,
            delay: self.config.timing.notification_display(),
        }]
    }

    fn dismiss(&mut self, id: NotificationId) -> Vec<Effect> {
        if let Some(task) = self.scheduler.find(&Task::BeginExit(id)) {
            self.scheduler.cancel(task);
        }
        self.begin_exit(id)
    }

    fn begin_exit(&mut self, id: NotificationId) -> Vec<Effect> {
        if !self.notifications.begin_exit(id) {
            return Vec::new();
        }
        let task = self.scheduler.schedule(Task::RemoveNotification(id));
        vec![Effect::Schedule {
            task,
            delay: self.config.timing.notification_exit(),
        }]
    }

    fn fire(&mut self, id: TaskId) -> Vec<Effect> {
        let Some(task) = self.scheduler.fire(id) else {
            tracing::trace!(task = %id, "stale timer ignored");
            return Vec::new();
        };
        match task {
            Task::BeginExit(notification) => self.begin_exit(notification),
            Task::RemoveNotification(notification) => {
                self.notifications.remove(notification);
                Vec::new()
            }
            Task::ScrollToSection(section) if self.nav.view == View::Home => {
                vec![Effect::ScrollToSection(section)]
            }
            Task::ScrollToSection(_) => Vec::new(),
        }
    }

    fn submit_order(&mut self, target: MailTarget) -> Vec<Effect> {
        let order = match Order::from_cart(&self.cart, &self.checkout.details) {
            Ok(order) => order,
            Err(CommerceError::CheckoutIncomplete(fields)) => {
                tracing::warn!(missing = %CheckoutField::join(&fields), "checkout incomplete");
                self.checkout.errors = fields;
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "checkout rejected");
                return self.notify(e.to_string(), Severity::Error);
            }
        };

        let formatter = self.formatter();
        let mail = self.config.compose_order(order.render_body(&formatter));
        let url = mail.to_url(target);
        tracing::info!(
            lines = order.lines.len(),
            total = %formatter.format(order.total),
            %target,
            "order handed off"
        );
        self.checkout.clear();
        vec![Effect::OpenMail { url, target }]
    }

    // Read access for views

    /// Configuration in effect.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Navigation state.
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Favorited products.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Theme and locale.
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Notifications shown.
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// The checkout form.
    pub fn checkout(&self) -> &CheckoutForm {
        &self.checkout
    }

    /// Pending deferred steps.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Price formatter for the active locale.
    pub fn formatter(&self) -> PriceFormatter {
        self.config.price_formatter(self.preferences.locale)
    }

    /// Products on the all-products page after filtering.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.search(&self.nav.product_filter())
    }

    /// Favorited products, in catalog order.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.catalog.select(|id| self.favorites.contains(id))
    }

    /// The home page's new arrivals.
    pub fn new_arrivals(&self) -> &[Product] {
        self.catalog.new_arrivals(self.config.new_arrivals)
    }

    /// The product on the detail page.
    pub fn selected_product(&self) -> Option<&Product> {
        self.nav
            .selected_product
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    /// Category buttons: "All" then each catalog category.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(&self.catalog.categories())
    }

    /// Header cart badge: total units in the cart.
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Cart totals, `None` on overflow.
    pub fn cart_pricing(&self) -> Option<CartPricing> {
        self.cart.calculate_pricing().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Theme;
    use arngren_commerce::catalog::Category;
    use arngren_commerce::checkout::Webmail;
    use arngren_commerce::{Locale, Money};
    use std::time::Duration;

    fn store() -> Storefront {
        Storefront::new(StoreConfig::default(), Catalog::builtin(), Preferences::default())
    }

    fn id(name: &str) -> ProductId {
        ProductId::new(name)
    }

    fn scheduled(effects: &[Effect]) -> Vec<(TaskId, Duration)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Schedule { task, delay } => Some((*task, *delay)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_navigate_scrolls_to_top() {
        let mut store = store();
        store.apply(Intent::ToggleMobileMenu);
        let effects = store.apply(Intent::show_product(id("Roboraptor")));
        assert_eq!(effects, vec![Effect::ScrollToTop]);
        assert_eq!(store.nav().view, View::ProductDetail);
        assert_eq!(store.selected_product().unwrap().name, "Roboraptor");
        assert!(!store.nav().mobile_menu_open);
    }

    #[test]
    fn test_unknown_product_not_selected() {
        let mut store = store();
        store.apply(Intent::show_product(id("Hoverboard")));
        assert_eq!(store.nav().view, View::ProductDetail);
        assert!(store.selected_product().is_none());
    }

    #[test]
    fn test_browse_all_clears_query_and_category() {
        let mut store = store();
        store.apply(Intent::go(View::AllProducts));
        store.apply(Intent::SelectCategory(CategoryFilter::Only(Category::Robots)));
        store.apply(Intent::SetSearchQuery("raptor".into()));
        assert_eq!(store.visible_products().len(), 1);

        store.apply(Intent::go(View::Cart));
        store.apply(Intent::BrowseAll);
        assert_eq!(store.nav().search_query, "");
        assert_eq!(store.nav().category, CategoryFilter::All);
        assert_eq!(store.visible_products().len(), 8);
    }

    #[test]
    fn test_submit_search_keeps_query() {
        let mut store = store();
        store.apply(Intent::SetSearchQuery(" ROBOT ".into()));
        store.apply(Intent::SubmitSearch);
        assert_eq!(store.nav().view, View::AllProducts);
        let names: Vec<_> = store.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Self-balancing Robot", "Robot Arm Kit"]);
    }

    #[test]
    fn test_section_on_home_scrolls_immediately() {
        let mut store = store();
        let effects = store.apply(Intent::NavigateToSection(Section::Faq));
        assert_eq!(effects, vec![Effect::ScrollToSection(Section::Faq)]);
        assert!(store.scheduler().is_empty());
    }

    #[test]
    fn test_section_off_home_is_deferred() {
        let mut store = store();
        store.apply(Intent::go(View::Warranty));
        let effects = store.apply(Intent::NavigateToSection(Section::ClientReviews));
        assert_eq!(store.nav().view, View::Home);

        let timers = scheduled(&effects);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].1, Duration::from_millis(100));

        let fired = store.apply(Intent::TimerFired(timers[0].0));
        assert_eq!(fired, vec![Effect::ScrollToSection(Section::ClientReviews)]);
    }

    #[test]
    fn test_deferred_scroll_dropped_after_leaving_home() {
        let mut store = store();
        store.apply(Intent::go(View::Cart));
        let timers = scheduled(&store.apply(Intent::NavigateToSection(Section::Faq)));
        store.apply(Intent::go(View::Terms));
        assert!(store.apply(Intent::TimerFired(timers[0].0)).is_empty());
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let mut store = store();
        let effects = store.apply(Intent::AddToCart { product: id("Roboraptor"), quantity: 1 });
        assert_eq!(scheduled(&effects)[0].1, Duration::from_millis(3000));

        let note = &store.notifications().items()[0];
        assert_eq!(note.message, "Roboraptor added to cart!");
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(store.cart_item_count(), 1);
    }

    #[test]
    fn test_add_unknown_product_ignored() {
        let mut store = store();
        let effects = store.apply(Intent::AddToCart { product: id("Jetpack"), quantity: 1 });
        assert!(effects.is_empty());
        assert!(store.cart().is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_update_quantity_out_of_range_ignored() {
        let mut store = store();
        store.apply(Intent::AddToCart { product: id("Robot Arm Kit"), quantity: 2 });
        store.apply(Intent::UpdateQuantity { product: id("Robot Arm Kit"), quantity: 11 });
        assert_eq!(store.cart_item_count(), 2);
        store.apply(Intent::UpdateQuantity { product: id("Robot Arm Kit"), quantity: 10 });
        assert_eq!(store.cart_item_count(), 10);
    }

    #[test]
    fn test_line_above_max_only_lowers_into_range() {
        let mut store = store();
        for _ in 0..15 {
            store.apply(Intent::AddToCart { product: id("Roboraptor"), quantity: 1 });
        }
        assert_eq!(store.cart().items[0].quantity, 15);

        store.apply(Intent::UpdateQuantity { product: id("Roboraptor"), quantity: 12 });
        assert_eq!(store.cart().items[0].quantity, 15);

        store.apply(Intent::UpdateQuantity { product: id("Roboraptor"), quantity: 10 });
        assert_eq!(store.cart().items[0].quantity, 10);
        assert_eq!(store.cart_item_count(), 10);
    }

    #[test]
    fn test_favorites_in_catalog_order() {
        let mut store = store();
        store.apply(Intent::ToggleFavorite(id("Robot Arm Kit")));
        store.apply(Intent::ToggleFavorite(id("Keychain Breathalyzer")));
        store.apply(Intent::ToggleFavorite(id("Unknown")));
        assert_eq!(store.favorites().len(), 2);
        let names: Vec<_> = store.favorite_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Keychain Breathalyzer", "Robot Arm Kit"]);
    }

    #[test]
    fn test_dismiss_cancels_auto_exit() {
        let mut store = store();
        let timers = scheduled(&store.apply(Intent::Notify {
            message: "hello".into(),
            severity: Severity::Info,
        }));
        let note = store.notifications().items()[0].id;

        let effects = store.apply(Intent::DismissNotification(note));
        let exit = scheduled(&effects);
        assert_eq!(exit[0].1, Duration::from_millis(300));
        assert!(store.notifications().get(note).unwrap().exiting);

        // the cancelled auto-exit timer still elapses but does nothing
        assert!(store.apply(Intent::TimerFired(timers[0].0)).is_empty());
        store.apply(Intent::TimerFired(exit[0].0));
        assert!(store.notifications().is_empty());
        assert!(store.scheduler().is_empty());
    }

    #[test]
    fn test_dismiss_twice_schedules_once() {
        let mut store = store();
        store.apply(Intent::Notify { message: "x".into(), severity: Severity::Success });
        let note = store.notifications().items()[0].id;
        assert_eq!(scheduled(&store.apply(Intent::DismissNotification(note))).len(), 1);
        assert!(store.apply(Intent::DismissNotification(note)).is_empty());
    }

    #[test]
    fn test_toggle_theme_applies_and_persists() {
        let mut store = store();
        let effects = store.apply(Intent::ToggleTheme);
        assert_eq!(
            effects,
            vec![
                Effect::ApplyTheme(Theme::Dark),
                Effect::Persist(Preference::Theme(Theme::Dark)),
            ]
        );
        assert_eq!(store.preferences().theme, Theme::Dark);
    }

    #[test]
    fn test_toggle_locale_changes_formatting_only() {
        let mut store = store();
        let tank = id("RC Tank w/ Air Cannon");
        let price = store.catalog().get(&tank).unwrap().price;
        let en = store.formatter().format(price);

        let effects = store.apply(Intent::ToggleLocale);
        assert_eq!(effects[0], Effect::ApplyLocale(Locale::No));
        let no = store.formatter().format(price);

        assert_eq!(en, "$284.81");
        assert_eq!(no, "2\u{a0}998\u{a0}kr");
        assert_eq!(store.catalog().get(&tank).unwrap().price, Money::nok(2998));
    }

    #[test]
    fn test_submit_incomplete_order() {
        let mut store = store();
        store.apply(Intent::AddToCart { product: id("Roboraptor"), quantity: 1 });
        store.apply(Intent::EditCheckout { field: CheckoutField::Name, value: "Kari".into() });

        let effects = store.apply(Intent::SubmitOrder(MailTarget::DefaultClient));
        assert!(effects.is_empty());
        assert_eq!(store.checkout().errors, vec![CheckoutField::Address]);
        assert_eq!(store.checkout().details.name, "Kari");
    }

    #[test]
    fn test_submit_empty_cart_notifies_error() {
        let mut store = store();
        store.apply(Intent::EditCheckout { field: CheckoutField::Name, value: "Kari".into() });
        store.apply(Intent::EditCheckout { field: CheckoutField::Address, value: "Oslo".into() });
        store.apply(Intent::SubmitOrder(MailTarget::DefaultClient));
        assert_eq!(store.notifications().items()[0].severity, Severity::Error);
    }

    #[test]
    fn test_submit_order_hands_off() {
        let mut store = store();
        store.apply(Intent::AddToCart { product: id("Robot Arm Kit"), quantity: 1 });
        store.apply(Intent::EditCheckout { field: CheckoutField::Name, value: "Kari".into() });
        store.apply(Intent::EditCheckout { field: CheckoutField::Address, value: "Oslo".into() });

        let effects = store.apply(Intent::SubmitOrder(MailTarget::Webmail(Webmail::Gmail)));
        let [Effect::OpenMail { url, target }] = effects.as_slice() else {
            panic!("expected a single mail handoff, got {effects:?}");
        };
        assert_eq!(*target, MailTarget::Webmail(Webmail::Gmail));
        assert!(url.starts_with("https://mail.google.com/"));
        assert!(url.contains("Robot%20Arm%20Kit%20%28x1%29%20-%20%2447.31"));
        assert_eq!(store.checkout().details.name, "");
        assert!(!store.cart().is_empty());
    }

    #[test]
    fn test_startup_effects() {
        let prefs = Preferences { theme: Theme::Dark, locale: Locale::No };
        let store = Storefront::new(StoreConfig::default(), Catalog::builtin(), prefs);
        assert_eq!(
            store.startup_effects(),
            vec![Effect::ApplyTheme(Theme::Dark), Effect::ApplyLocale(Locale::No)]
        );
    }

    #[test]
    fn test_categories_and_arrivals() {
        let store = store();
        assert_eq!(store.category_options().len(), 6);
        assert_eq!(store.new_arrivals().len(), 6);
    }
}
