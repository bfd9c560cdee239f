pub mod errors;
pub mod models;
pub mod procedures;
pub mod providers;
pub mod services;

use models::{
    analytics::PortfolioSummary,
    holding::{default_holdings, Holding},
    settings::StoreSettings,
};
use procedures::{bpsp::BpspRouter, fundamentals::FundamentalsRouter};
use providers::{motherduck::MotherDuckStore, traits::AnalyticalStore};
use services::{analytics_service::AnalyticsService, query_gateway::QueryGateway};
use std::collections::HashMap;
use std::sync::Arc;

/// Main entry point for the dashboard core library.
/// Wires the analytical store, the query gateway and the procedure routers
/// together, and carries the portfolio holdings.
#[must_use]
#[derive(Clone)]
pub struct Dashboard {
    gateway: QueryGateway,
    fundamentals: FundamentalsRouter,
    bpsp: BpspRouter,
    holdings: Arc<Vec<Holding>>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("store", &self.gateway.store_name())
            .field("holdings", &self.holdings.len())
            .finish()
    }
}

impl Dashboard {
    /// Build a dashboard backed by MotherDuck with the given settings and the
    /// default holdings.
    pub fn new(settings: StoreSettings) -> Self {
        Self::with_store(Arc::new(MotherDuckStore::new(settings)))
    }

    /// Build a dashboard on top of any analytical store.
    pub fn with_store(store: Arc<dyn AnalyticalStore>) -> Self {
        let gateway = QueryGateway::new(store);
        Self {
            fundamentals: FundamentalsRouter::new(gateway.clone()),
            bpsp: BpspRouter::new(gateway.clone()),
            gateway,
            holdings: Arc::new(default_holdings()),
        }
    }

    /// Replace the portfolio holdings.
    pub fn with_holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = Arc::new(holdings);
        self
    }

    pub fn gateway(&self) -> &QueryGateway {
        &self.gateway
    }

    /// The `fundamentals` procedures.
    pub fn fundamentals(&self) -> &FundamentalsRouter {
        &self.fundamentals
    }

    /// The `bpsp` procedures.
    pub fn bpsp(&self) -> &BpspRouter {
        &self.bpsp
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Portfolio summary against the given prices (uppercase symbol → price).
    /// With an empty map only cost figures are filled in.
    pub fn portfolio_summary(&self, prices: &HashMap<String, f64>) -> PortfolioSummary {
        AnalyticsService::new().summarize(&self.holdings, prices)
    }
}
