use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Summary of the whole portfolio, as shown on the portfolio cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Number of positions
    pub positions: usize,

    /// Sum of cost_basis × shares over all holdings
    pub total_cost: f64,

    /// Sum of market values over holdings that have a current price.
    /// `None` when no price is known for any holding.
    pub total_value: Option<f64>,

    /// total_value - cost of the priced holdings
    pub total_gain_loss: Option<f64>,

    /// (total_gain_loss / cost of the priced holdings) × 100
    pub total_return_pct: Option<f64>,

    /// Per-position breakdown, in input order
    pub holdings: Vec<HoldingSummary>,
}

/// Summary of a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub holding: Holding,

    /// cost_basis × shares
    pub total_cost: f64,

    /// Latest price, if one was supplied
    pub current_price: Option<f64>,

    /// current_price × shares
    pub market_value: Option<f64>,

    /// market_value - total_cost
    pub gain_loss: Option<f64>,

    /// (gain_loss / total_cost) × 100
    pub return_pct: Option<f64>,

    /// This position's share of total_value, × 100
    pub allocation_pct: Option<f64>,
}
