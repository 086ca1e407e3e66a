//! The single state owner and the effect runner.

use anyhow::{anyhow, Context};
use arngren_cache::Cache;
use arngren_commerce::checkout::MailTarget;
use arngren_core::{Effect, Intent, PlatformHints, Preferences, Storefront};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Owns the [`Storefront`] in a signal and performs returned effects.
///
/// Views read state through [`Dispatcher::with`], which tracks the read,
/// and change it only through [`Dispatcher::send`].
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<Storefront>,
}

impl Dispatcher {
    /// Wrap a storefront.
    pub fn new(store: Storefront) -> Self {
        Self {
            state: RwSignal::new(store),
        }
    }

    /// Read the current state, subscribing the caller to changes.
    pub fn with<R>(&self, read: impl FnOnce(&Storefront) -> R) -> R {
        self.state.with(read)
    }

    /// Read the current state without subscribing.
    pub fn with_untracked<R>(&self, read: impl FnOnce(&Storefront) -> R) -> R {
        self.state.with_untracked(read)
    }

    /// NOK to USD rate used by every price on the page.
    pub fn usd_per_nok(&self) -> f64 {
        self.with_untracked(|store| store.config().pricing.usd_per_nok)
    }

    /// Apply an intent and perform the effects it produces.
    pub fn send(&self, intent: Intent) {
        tracing::debug!(?intent, "dispatch");
        let effects = self
            .state
            .try_update(|store| store.apply(intent))
            .unwrap_or_default();
        self.run_all(effects);
    }

    /// Perform effects in order. Failures are logged and skipped.
    pub fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(err) = self.run(effect) {
                tracing::warn!("effect failed: {err:#}");
            }
        }
    }

    fn run(&self, effect: Effect) -> anyhow::Result<()> {
        match effect {
            Effect::Schedule { task, delay } => {
                let dispatcher = *self;
                set_timeout(move || dispatcher.send(Intent::TimerFired(task)), delay);
            }
            Effect::ScrollToTop => window().scroll_to_with_x_and_y(0.0, 0.0),
            Effect::ScrollToSection(section) => {
                let element = document()
                    .get_element_by_id(section.anchor())
                    .with_context(|| format!("section #{} is not rendered", section.anchor()))?;
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Effect::ApplyTheme(theme) => {
                document()
                    .body()
                    .context("document has no body")?
                    .set_attribute("data-theme", theme.as_str())
                    .map_err(js_error)
                    .context("applying theme")?;
            }
            Effect::ApplyLocale(locale) => {
                document()
                    .document_element()
                    .context("document has no root element")?
                    .set_attribute("lang", locale.html_lang())
                    .map_err(js_error)
                    .context("applying locale")?;
            }
            Effect::Persist(preference) => {
                let cache = Cache::open_default().context("opening preference storage")?;
                preference
                    .store(&cache)
                    .with_context(|| format!("persisting {}", preference.key()))?;
            }
            Effect::OpenMail { url, target } => {
                tracing::info!(%target, "opening mail composer");
                match target {
                    MailTarget::DefaultClient => window()
                        .location()
                        .set_href(&url)
                        .map_err(js_error)
                        .context("opening default mail client")?,
                    MailTarget::Webmail(provider) => {
                        window()
                            .open_with_url_and_target(&url, "_blank")
                            .map_err(js_error)
                            .with_context(|| format!("opening {}", provider.label()))?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// The dispatcher provided by [`App`](crate::App).
pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}

/// Theme and locale from `localStorage`, falling back to platform hints.
pub(crate) fn load_preferences() -> Preferences {
    let hints = platform_hints();
    match Cache::open_default() {
        Ok(cache) => Preferences::load(&cache, &hints),
        Err(err) => {
            tracing::warn!(error = %err, "preference storage unavailable");
            Preferences::resolve(None, None, &hints)
        }
    }
}

fn platform_hints() -> PlatformHints {
    let window = window();
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    PlatformHints {
        prefers_dark,
        language: window.navigator().language(),
    }
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}
