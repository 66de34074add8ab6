//! Configuration loading and representation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub ordering: OrderingConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Margin applied when the caller does not give one.
    pub default_margin_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Days between order date and estimated delivery.
    pub delivery_lead_days: u32,
    /// Reject submissions that exceed current stock instead of clamping stock at zero.
    pub enforce_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start the in-memory catalog with the built-in raw materials.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig {
                default_margin_percent: 50.0,
            },
            ordering: OrderingConfig {
                delivery_lead_days: 2,
                enforce_stock: false,
            },
            catalog: CatalogConfig { seed: true },
        }
    }
}

impl AppConfig {
    /// Load from environment variables, falling back to defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let margin = parse_or(
            &lookup,
            "STREETFOOD_DEFAULT_MARGIN_PERCENT",
            defaults.pricing.default_margin_percent,
        );
        Self {
            pricing: PricingConfig {
                default_margin_percent: if margin.is_finite() && margin >= 0.0 {
                    margin
                } else {
                    warn!(margin, "ignoring invalid default margin");
                    defaults.pricing.default_margin_percent
                },
            },
            ordering: OrderingConfig {
                delivery_lead_days: parse_or(
                    &lookup,
                    "STREETFOOD_DELIVERY_LEAD_DAYS",
                    defaults.ordering.delivery_lead_days,
                ),
                enforce_stock: parse_or(
                    &lookup,
                    "STREETFOOD_ENFORCE_STOCK",
                    defaults.ordering.enforce_stock,
                ),
            },
            catalog: CatalogConfig {
                seed: parse_or(&lookup, "STREETFOOD_SEED_CATALOG", defaults.catalog.seed),
            },
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparsable config value");
            default
        }),
    }
}
