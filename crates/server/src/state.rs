//! Application state shared by every handler.

use jcn_dashboard_core::Dashboard;

/// Shared application state, injected through axum's `State` extractor
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}
