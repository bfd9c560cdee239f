//! BPSP (Buying Power / Selling Pressure) history endpoint.

use axum::{extract::State, routing::get, Json, Router};
use jcn_dashboard_core::models::bpsp::BpspPoint;
use jcn_dashboard_core::procedures::envelope::ProcedureResponse;
use std::sync::Arc;

use crate::state::AppState;

/// GET /api/bpsp
///
/// Five years of BPSP points, oldest first, in the procedure envelope.
pub async fn get_bpsp(State(state): State<Arc<AppState>>) -> Json<ProcedureResponse<BpspPoint>> {
    Json(state.dashboard.bpsp().get_history().await)
}

pub fn bpsp_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_bpsp))
}
