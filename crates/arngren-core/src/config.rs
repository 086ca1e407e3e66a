//! Storefront configuration.

use std::time::Duration;

use arngren_commerce::checkout::MailHandoff;
use arngren_commerce::locale::DEFAULT_USD_PER_NOK;
use arngren_commerce::{Locale, PriceFormatter};
use arngren_observability::LogConfig;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The compiled-in configuration file.
pub const BUILTIN_CONFIG: &str = include_str!("../storefront.toml");

/// Configuration for the storefront.
///
/// Every field has a default, so a TOML document only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Brand shown in the header and footer.
    pub brand: String,
    /// Number of products in the home page's new arrivals grid.
    pub new_arrivals: usize,
    /// Order handoff settings.
    pub order: OrderConfig,
    /// Currency and quantity settings.
    pub pricing: PricingConfig,
    /// Deferred step durations.
    pub timing: TimingConfig,
    /// Log subscriber settings.
    pub logging: LogConfig,
}

/// Where orders are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
}

/// Currency conversion and quantity bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// US dollars per Norwegian krone.
    pub usd_per_nok: f64,
    /// Highest quantity selectable on a cart line.
    pub max_line_quantity: u32,
}

/// Durations of the deferred steps, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time a notification stays before it starts exiting.
    pub notification_display_ms: u64,
    /// Length of the exit animation.
    pub notification_exit_ms: u64,
    /// Delay before scrolling to a section after switching to home.
    pub section_scroll_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: "ARNGREN.net".to_string(),
            new_arrivals: 6,
            order: OrderConfig::default(),
            pricing: PricingConfig::default(),
            timing: TimingConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            recipient: "frithjof@arngren.net".to_string(),
            subject: "New Order from ARNGREN.net".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            usd_per_nok: DEFAULT_USD_PER_NOK,
            max_line_quantity: 10,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_display_ms: 3000,
            notification_exit_ms: 300,
            section_scroll_delay_ms: 100,
        }
    }
}

impl StoreConfig {
    /// Parse and validate the compiled-in `storefront.toml`.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN_CONFIG)
    }

    /// Parse a TOML document over the defaults and validate it.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the storefront cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pricing.usd_per_nok.is_finite() && self.pricing.usd_per_nok > 0.0) {
            return Err(ConfigError::Invalid {
                field: "pricing.usd_per_nok",
                reason: format!("must be a positive number, got {}", self.pricing.usd_per_nok),
            });
        }
        if self.pricing.max_line_quantity == 0 {
            return Err(ConfigError::Invalid {
                field: "pricing.max_line_quantity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.order.recipient.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "order.recipient",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Price formatter for `locale` at the configured rate.
    pub fn price_formatter(&self, locale: Locale) -> PriceFormatter {
        PriceFormatter::new(locale, self.pricing.usd_per_nok)
    }

    /// Compose the order email for a rendered body.
    pub fn compose_order(&self, body: impl Into<String>) -> MailHandoff {
        MailHandoff::new(&self.order.recipient, &self.order.subject, body)
    }
}

impl TimingConfig {
    /// Time a notification stays before it starts exiting.
    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    /// Length of the exit animation.
    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    /// Delay before a deferred section scroll.
    pub fn section_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.section_scroll_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arngren_observability::{LogFormat, LogLevel};

    #[test]
    fn test_builtin_matches_defaults() {
        let config = StoreConfig::builtin().unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.order.recipient, "frithjof@arngren.net");
        assert_eq!(config.timing.notification_display(), Duration::from_millis(3000));
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_override() {
        let config = StoreConfig::from_toml(
            r#"
            [pricing]
            usd_per_nok = 0.1

            [timing]
            notification_exit_ms = 150
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.usd_per_nok, 0.1);
        assert_eq!(config.pricing.max_line_quantity, 10);
        assert_eq!(config.timing.notification_exit_ms, 150);
        assert_eq!(config.timing.notification_display_ms, 3000);
        assert_eq!(config.brand, "ARNGREN.net");
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let err = StoreConfig::from_toml("[pricing]\nusd_per_nok = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "pricing.usd_per_nok", .. }));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = StoreConfig::from_toml("[pricing]\nmax_line_quantity = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "pricing.max_line_quantity", .. }));
    }

    #[test]
    fn test_blank_recipient_rejected() {
        let err = StoreConfig::from_toml("[order]\nrecipient = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("order.recipient"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StoreConfig::from_toml("brand = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_compose_order() {
        let mail = StoreConfig::default().compose_order("body");
        assert_eq!(mail.subject, "New Order from ARNGREN.net");
        assert_eq!(mail.body, "body");
    }
}
