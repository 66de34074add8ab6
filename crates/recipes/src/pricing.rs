//! Sale-price derivation from cost and profit margin.

use serde::{Deserialize, Serialize};

/// `total_cost * (1 + margin_percent / 100)`.
pub fn suggested_price(total_cost: f64, profit_margin_percent: f64) -> f64 {
    total_cost * (1.0 + profit_margin_percent / 100.0)
}

/// Per-recipe and per-serving money figures, derived on demand from an
/// estimate (never stored on it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub total_cost: f64,
    pub suggested_price: f64,
    pub total_profit: f64,
    pub cost_per_serving: f64,
    pub price_per_serving: f64,
    pub profit_per_serving: f64,
}

impl PricingBreakdown {
    /// `servings` must be at least 1; estimates guarantee this.
    pub fn new(total_cost: f64, suggested_price: f64, servings: u32) -> Self {
        let servings = f64::from(servings.max(1));
        let total_profit = suggested_price - total_cost;
        Self {
            total_cost,
            suggested_price,
            total_profit,
            cost_per_serving: total_cost / servings,
            price_per_serving: suggested_price / servings,
            profit_per_serving: total_profit / servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_percent_margin() {
        assert_eq!(suggested_price(110.0, 50.0), 165.0);
    }

    #[test]
    fn zero_margin_sells_at_cost() {
        assert_eq!(suggested_price(42.5, 0.0), 42.5);
    }

    #[test]
    fn per_serving_figures() {
        let p = PricingBreakdown::new(110.0, 165.0, 10);
        assert_eq!(p.total_profit, 55.0);
        assert!((p.cost_per_serving - 11.0).abs() < 1e-12);
        assert!((p.price_per_serving - 16.5).abs() < 1e-12);
        assert!((p.profit_per_serving - 5.5).abs() < 1e-12);
    }
}
