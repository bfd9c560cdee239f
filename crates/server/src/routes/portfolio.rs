//! Portfolio summary endpoint.

use axum::{extract::State, routing::get, Json, Router};
use jcn_dashboard_core::models::analytics::PortfolioSummary;
use std::collections::HashMap;
use std::sync::Arc;

use crate::state::AppState;

/// GET /api/portfolio
///
/// Summary of the configured holdings. No live price source is wired in,
/// so only cost figures are populated.
pub async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioSummary> {
    Json(state.dashboard.portfolio_summary(&HashMap::new()))
}

pub fn portfolio_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_portfolio))
}
