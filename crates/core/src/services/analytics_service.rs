use std::collections::HashMap;

use crate::models::analytics::{HoldingSummary, PortfolioSummary};
use crate::models::holding::Holding;

/// Computes portfolio analytics: cost, market value, gain/loss, allocation.
///
/// Pure computation: prices are supplied by the caller. Holdings without a
/// price keep their cost figures and leave every market-derived field `None`.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize `holdings` against `prices` (uppercase symbol → last price).
    pub fn summarize(&self, holdings: &[Holding], prices: &HashMap<String, f64>) -> PortfolioSummary {
        let mut summaries: Vec<HoldingSummary> = holdings
            .iter()
            .map(|holding| {
                let total_cost = holding.total_cost();
                let current_price = prices
                    .get(&holding.symbol.to_uppercase())
                    .copied()
                    .filter(|p| p.is_finite());
                let market_value = current_price.map(|p| p * holding.shares as f64);
                let gain_loss = market_value.map(|v| v - total_cost);
                let return_pct = gain_loss
                    .filter(|_| total_cost > 0.0)
                    .map(|g| (g / total_cost) * 100.0);

                HoldingSummary {
                    holding: holding.clone(),
                    total_cost,
                    current_price,
                    market_value,
                    gain_loss,
                    return_pct,
                    allocation_pct: None, // filled below
                }
            })
            .collect();

        let total_cost: f64 = summaries.iter().map(|h| h.total_cost).sum();

        let priced: Vec<&HoldingSummary> = summaries
            .iter()
            .filter(|h| h.market_value.is_some())
            .collect();
        let total_value = (!priced.is_empty())
            .then(|| priced.iter().filter_map(|h| h.market_value).sum::<f64>());
        let priced_cost: f64 = priced.iter().map(|h| h.total_cost).sum();

        let total_gain_loss = total_value.map(|v| v - priced_cost);
        let total_return_pct = total_gain_loss
            .filter(|_| priced_cost > 0.0)
            .map(|g| (g / priced_cost) * 100.0);

        if let Some(total) = total_value.filter(|t| *t > 0.0) {
            for summary in &mut summaries {
                summary.allocation_pct = summary.market_value.map(|v| (v / total) * 100.0);
            }
        }

        PortfolioSummary {
            positions: holdings.len(),
            total_cost,
            total_value,
            total_gain_loss,
            total_return_pct,
            holdings: summaries,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
