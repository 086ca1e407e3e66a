//! Whole-session tests driven through the virtual clock.

use std::time::Duration;

use arngren_cache::Cache;
use arngren_core::prelude::*;
use rstest::rstest;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn timeline() -> Timeline {
    let store = Storefront::new(
        StoreConfig::builtin().unwrap(),
        Catalog::builtin(),
        Preferences::default(),
    );
    Timeline::new(store)
}

fn product(name: &str) -> ProductId {
    ProductId::new(name)
}

/// (present, exiting) for the only notification raised.
fn notification_state(tl: &Timeline) -> (bool, bool) {
    match tl.storefront().notifications().items() {
        [] => (false, false),
        [note] => (true, note.exiting),
        more => panic!("expected at most one notification, got {more:?}"),
    }
}

#[rstest]
#[case(0, (true, false))]
#[case(1500, (true, false))]
#[case(2999, (true, false))]
#[case(3000, (true, true))]
#[case(3299, (true, true))]
#[case(3300, (false, false))]
#[case(10_000, (false, false))]
fn notification_lifetime(#[case] at: u64, #[case] expected: (bool, bool)) {
    let mut tl = timeline();
    tl.dispatch(Intent::Notify {
        message: "Welcome".into(),
        severity: Severity::Success,
    });
    tl.advance_to(ms(at));
    assert_eq!(notification_state(&tl), expected);
}

#[test]
fn dismissed_notification_leaves_after_exit_only() {
    let mut tl = timeline();
    tl.dispatch(Intent::AddToCart {
        product: product("Roboraptor"),
        quantity: 1,
    });
    tl.advance_to(ms(1000));
    let id = tl.storefront().notifications().items()[0].id;

    tl.dispatch(Intent::DismissNotification(id));
    assert_eq!(notification_state(&tl), (true, true));

    tl.advance_to(ms(1299));
    assert_eq!(notification_state(&tl), (true, true));
    tl.advance_to(ms(1300));
    assert_eq!(notification_state(&tl), (false, false));

    // the original 3000 ms timer must not resurrect or re-schedule anything
    tl.advance_to(ms(5000));
    assert_eq!(notification_state(&tl), (false, false));
    assert_eq!(tl.pending_timers(), 0);
}

#[test]
fn overlapping_notifications_expire_independently() {
    let mut tl = timeline();
    tl.dispatch(Intent::AddToCart {
        product: product("Roboraptor"),
        quantity: 1,
    });
    tl.advance_to(ms(2000));
    tl.dispatch(Intent::AddToCart {
        product: product("Robot Arm Kit"),
        quantity: 1,
    });

    tl.advance_to(ms(3300));
    let messages: Vec<_> = tl
        .storefront()
        .notifications()
        .items()
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(messages, vec!["Robot Arm Kit added to cart!"]);

    tl.advance_to(ms(5300));
    assert!(tl.storefront().notifications().is_empty());
}

#[test]
fn repeated_add_merges_into_one_line() {
    let mut tl = timeline();
    let tank = product("RC Tank w/ Air Cannon");
    for _ in 0..2 {
        tl.dispatch(Intent::AddToCart {
            product: tank.clone(),
            quantity: 1,
        });
    }

    let store = tl.storefront();
    assert_eq!(store.cart().unique_item_count(), 1);
    assert_eq!(store.cart().get_item(&tank).unwrap().quantity, 2);
    let pricing = store.cart_pricing().unwrap();
    assert_eq!(pricing.subtotal, Money::nok(5996));
    assert_eq!(pricing.grand_total, Money::nok(5996));
    assert_eq!(store.notifications().len(), 2);
}

#[test]
fn favorites_toggle_round_trip() {
    let mut tl = timeline();
    let raptor = product("Roboraptor");

    tl.dispatch(Intent::ToggleFavorite(raptor.clone()));
    assert!(tl.storefront().favorites().contains(&raptor));
    tl.dispatch(Intent::ToggleFavorite(raptor.clone()));
    assert!(tl.storefront().favorites().is_empty());
}

#[test]
fn shopping_session_ends_in_mail_handoff() {
    let mut tl = timeline();

    tl.dispatch(Intent::SetSearchQuery("tank".into()));
    tl.dispatch(Intent::SubmitSearch);
    let found: Vec<_> = tl
        .storefront()
        .visible_products()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(found, vec![product("RC Tank w/ Air Cannon")]);

    tl.dispatch(Intent::show_product(found[0].clone()));
    tl.dispatch(Intent::AddToCart {
        product: found[0].clone(),
        quantity: 2,
    });
    tl.dispatch(Intent::go(View::Cart));
    tl.dispatch(Intent::UpdateQuantity {
        product: found[0].clone(),
        quantity: 3,
    });
    tl.dispatch(Intent::ToggleLocale);
    tl.dispatch(Intent::go(View::Checkout));

    assert!(tl
        .dispatch(Intent::SubmitOrder(MailTarget::DefaultClient))
        .is_empty());
    assert_eq!(
        tl.storefront().checkout().errors,
        vec![CheckoutField::Name, CheckoutField::Address]
    );

    tl.dispatch(Intent::EditCheckout {
        field: CheckoutField::Name,
        value: "Kari Nordmann".into(),
    });
    tl.dispatch(Intent::EditCheckout {
        field: CheckoutField::Address,
        value: "Storgata 1, Oslo".into(),
    });
    let effects = tl.dispatch(Intent::SubmitOrder(MailTarget::DefaultClient));

    let [Effect::OpenMail { url, .. }] = effects.as_slice() else {
        panic!("expected a mail handoff, got {effects:?}");
    };
    let body = [
        "New Order Details:",
        "--------------------",
        "Name: Kari Nordmann",
        "Delivery Address: Storgata 1, Oslo",
        "--------------------",
        "Order Summary:",
        "- RC Tank w/ Air Cannon (x3) - 2\u{a0}998\u{a0}kr",
        "--------------------",
        "Total: 8\u{a0}994\u{a0}kr",
    ]
    .join("\r\n");
    let expected = format!(
        "mailto:frithjof@arngren.net?subject={}&body={}",
        urlencoding::encode("New Order from ARNGREN.net"),
        urlencoding::encode(&body)
    );
    assert_eq!(url, &expected);
    assert_eq!(tl.storefront().checkout(), &CheckoutForm::default());
}

#[test]
fn preferences_persist_across_sessions() {
    let cache = Cache::open_default().unwrap();
    let hints = PlatformHints {
        prefers_dark: false,
        language: Some("nb-NO".into()),
    };

    let first = Preferences::load(&cache, &hints);
    assert_eq!(first.theme, Theme::Light);
    assert_eq!(first.locale, Locale::No);

    let mut tl = Timeline::new(Storefront::new(
        StoreConfig::default(),
        Catalog::builtin(),
        first,
    ));
    for effect in tl.dispatch(Intent::ToggleTheme) {
        if let Effect::Persist(preference) = effect {
            preference.store(&cache).unwrap();
        }
    }

    let second = Preferences::load(&cache, &PlatformHints::default());
    assert_eq!(second.theme, Theme::Dark);
    // locale was never toggled, so the hint is all a fresh session has
    assert_eq!(second.locale, Locale::En);
}
