//! Shop configuration.
//!
//! Defaults match the storefront pages. A page can override them with
//! data attributes on `<body>`:
//!
//! - `data-shipping-cost` - Flat shipping for a non-empty cart (default: 10.00)
//! - `data-cart-key` - localStorage key holding the cart (default: cart)
//! - `data-notification-ms` - How long toasts stay visible (default: 3000)

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

pub const DEFAULT_CART_KEY: &str = "cart";
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Configuration errors raised while reading overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid attribute {0}: {1}")]
    InvalidAttribute(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// localStorage key for the serialized cart
    pub cart_key: String,
    /// Flat shipping charged when the cart is not empty
    pub shipping_cost: Decimal,
    /// Auto-dismiss delay for notifications
    pub notification_ms: u32,
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            shipping_cost: Decimal::new(1000, 2),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl ShopConfig {
    /// Build a config from an attribute lookup, keeping defaults for
    /// missing attributes. Invalid values are returned as errors next to
    /// the config so the caller can log them.
    pub fn from_attributes<F>(get: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(key) = get("data-cart-key") {
            let key = key.trim();
            if key.is_empty() {
                errors.push(ConfigError::InvalidAttribute(
                    "data-cart-key".to_string(),
                    "must not be empty".to_string(),
                ));
            } else {
                config.cart_key = key.to_string();
            }
        }

        if let Some(raw) = get("data-shipping-cost") {
            match Decimal::from_str(raw.trim()) {
                Ok(cost) if !cost.is_sign_negative() => config.shipping_cost = cost,
                Ok(_) => errors.push(ConfigError::InvalidAttribute(
                    "data-shipping-cost".to_string(),
                    "must not be negative".to_string(),
                )),
                Err(e) => errors.push(ConfigError::InvalidAttribute(
                    "data-shipping-cost".to_string(),
                    e.to_string(),
                )),
            }
        }

        if let Some(raw) = get("data-notification-ms") {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.notification_ms = ms,
                Err(e) => errors.push(ConfigError::InvalidAttribute(
                    "data-notification-ms".to_string(),
                    e.to_string(),
                )),
            }
        }

        (config, errors)
    }

    /// Read overrides from the current document's `<body>`.
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let Some(body) = body else {
            return Self::default();
        };

        let (config, errors) = Self::from_attributes(|name| body.get_attribute(name));
        for err in errors {
            log::warn!("{}, keeping default", err);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let (config, errors) = ShopConfig::from_attributes(|_| None);
        assert!(errors.is_empty());
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.shipping_cost, Decimal::new(10, 0));
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn test_overrides() {
        let map = attrs(&[
            ("data-cart-key", "demo-cart"),
            ("data-shipping-cost", "4.50"),
            ("data-notification-ms", "1500"),
        ]);
        let (config, errors) = ShopConfig::from_attributes(|k| map.get(k).cloned());

        assert!(errors.is_empty());
        assert_eq!(config.cart_key, "demo-cart");
        assert_eq!(config.shipping_cost, Decimal::new(450, 2));
        assert_eq!(config.notification_ms, 1500);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let map = attrs(&[
            ("data-cart-key", "  "),
            ("data-shipping-cost", "-1"),
            ("data-notification-ms", "soon"),
        ]);
        let (config, errors) = ShopConfig::from_attributes(|k| map.get(k).cloned());

        assert_eq!(errors.len(), 3);
        assert_eq!(config, ShopConfig::default());
    }
}
