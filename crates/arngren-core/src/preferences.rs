//! Theme and locale preferences.
//!
//! Each preference starts from the value persisted by an earlier visit,
//! falls back to a platform hint, and finally to a fixed default. Changes
//! are persisted under the keys `theme` and `locale`.

use std::fmt;

use arngren_cache::{Cache, CacheError};
use arngren_commerce::Locale;
use serde::{Deserialize, Serialize};

/// Storage key for the theme flag.
pub const THEME_KEY: &str = "theme";
/// Storage key for the locale flag.
pub const LOCALE_KEY: &str = "locale";

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the body's `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the platform reports before any choice was made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformHints {
    /// `prefers-color-scheme: dark` matched.
    pub prefers_dark: bool,
    /// Preferred language tag, e.g. `nb-NO`.
    pub language: Option<String>,
}

/// A single persisted preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    Theme(Theme),
    Locale(Locale),
}

impl Preference {
    /// Storage key.
    pub fn key(&self) -> &'static str {
        match self {
            Preference::Theme(_) => THEME_KEY,
            Preference::Locale(_) => LOCALE_KEY,
        }
    }

    /// Write the value to `cache`.
    pub fn store(&self, cache: &Cache) -> Result<(), CacheError> {
        match self {
            Preference::Theme(theme) => cache.set(THEME_KEY, theme),
            Preference::Locale(locale) => cache.set(LOCALE_KEY, locale),
        }
    }
}

/// The active preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub locale: Locale,
}

impl Preferences {
    /// Resolve from persisted values, then hints, then defaults.
    pub fn resolve(theme: Option<Theme>, locale: Option<Locale>, hints: &PlatformHints) -> Self {
        let theme = theme.unwrap_or(if hints.prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        let locale = locale
            .or_else(|| hints.language.as_deref().and_then(Locale::from_language_tag))
            .unwrap_or_default();
        Self { theme, locale }
    }

    /// Read persisted values from `cache` and resolve.
    ///
    /// Unreadable values are logged and treated as absent.
    pub fn load(cache: &Cache, hints: &PlatformHints) -> Self {
        let theme = read_logged::<Theme>(cache, THEME_KEY);
        let locale = read_logged::<Locale>(cache, LOCALE_KEY);
        let prefs = Self::resolve(theme, locale, hints);
        tracing::debug!(theme = %prefs.theme, locale = %prefs.locale, "preferences loaded");
        prefs
    }
}

fn read_logged<T: serde::de::DeserializeOwned>(cache: &Cache, key: &str) -> Option<T> {
    match cache.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable preference");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hints(prefers_dark: bool, language: Option<&str>) -> PlatformHints {
        PlatformHints {
            prefers_dark,
            language: language.map(str::to_string),
        }
    }

    #[rstest]
    #[case(Some(Theme::Light), true, Theme::Light)]
    #[case(Some(Theme::Dark), false, Theme::Dark)]
    #[case(None, true, Theme::Dark)]
    #[case(None, false, Theme::Light)]
    fn test_theme_resolution(
        #[case] persisted: Option<Theme>,
        #[case] prefers_dark: bool,
        #[case] expected: Theme,
    ) {
        let prefs = Preferences::resolve(persisted, None, &hints(prefers_dark, None));
        assert_eq!(prefs.theme, expected);
    }

    #[rstest]
    #[case(Some(Locale::En), Some("nb-NO"), Locale::En)]
    #[case(None, Some("nb-NO"), Locale::No)]
    #[case(None, Some("en-GB"), Locale::En)]
    #[case(None, None, Locale::En)]
    fn test_locale_resolution(
        #[case] persisted: Option<Locale>,
        #[case] language: Option<&str>,
        #[case] expected: Locale,
    ) {
        let prefs = Preferences::resolve(None, persisted, &hints(false, language));
        assert_eq!(prefs.locale, expected);
    }

    #[test]
    fn test_load_from_cache() {
        let cache = Cache::open_default().unwrap();
        Preference::Theme(Theme::Dark).store(&cache).unwrap();
        Preference::Locale(Locale::No).store(&cache).unwrap();

        let prefs = Preferences::load(&cache, &PlatformHints::default());
        assert_eq!(prefs, Preferences { theme: Theme::Dark, locale: Locale::No });
    }

    #[test]
    fn test_unreadable_value_falls_back_to_hint() {
        let cache = Cache::open_default().unwrap();
        cache.set(THEME_KEY, &"sepia").unwrap();

        let prefs = Preferences::load(&cache, &hints(true, None));
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_flags_stored_as_plain_strings() {
        let cache = Cache::open_default().unwrap();
        Preference::Theme(Theme::Dark).store(&cache).unwrap();
        assert_eq!(cache.get::<String>(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
