//! `fundamentals.getByTickers` procedure endpoint.
//!
//! Accepts the input either as a JSON body (POST) or tRPC-style as a
//! URL-encoded `input` query parameter (GET). Malformed input is a 400;
//! everything else answers 200 with the `{ success, data, error? }` envelope.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::get,
    Json, Router,
};
use jcn_dashboard_core::errors::CoreError;
use jcn_dashboard_core::models::fundamentals::FundamentalsRecord;
use jcn_dashboard_core::procedures::envelope::ProcedureResponse;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of a GET procedure call: `?input=<json>`.
#[derive(Debug, Deserialize)]
pub struct ProcedureQuery {
    pub input: Option<String>,
}

/// POST /api/trpc/fundamentals.getByTickers
pub async fn get_by_tickers(
    State(state): State<Arc<AppState>>,
    input: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcedureResponse<FundamentalsRecord>>, ApiError> {
    let Json(input) = input.map_err(|rejection| {
        CoreError::Validation(format!("invalid request body: {}", rejection.body_text()))
    })?;
    let response = state.dashboard.fundamentals().call(input).await?;
    Ok(Json(response))
}

/// GET /api/trpc/fundamentals.getByTickers?input={"tickers":[...]}
pub async fn get_by_tickers_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProcedureQuery>,
) -> Result<Json<ProcedureResponse<FundamentalsRecord>>, ApiError> {
    let raw = query
        .input
        .ok_or_else(|| CoreError::Validation("missing input parameter".into()))?;
    let input: Value = serde_json::from_str(&raw)
        .map_err(|e| CoreError::Validation(format!("input is not valid JSON: {e}")))?;

    let response = state.dashboard.fundamentals().call(input).await?;
    Ok(Json(response))
}

pub fn fundamentals_router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/fundamentals.getByTickers",
        get(get_by_tickers_query).post(get_by_tickers),
    )
}
