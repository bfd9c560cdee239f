use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use super::envelope::ProcedureResponse;
use crate::errors::CoreError;
use crate::models::fundamentals::FundamentalsRecord;
use crate::services::query_gateway::QueryGateway;

/// Input of `fundamentals.getByTickers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetByTickersInput {
    pub tickers: Vec<String>,
}

impl GetByTickersInput {
    pub fn new<S: Into<String>>(tickers: impl IntoIterator<Item = S>) -> Self {
        Self {
            tickers: tickers.into_iter().map(Into::into).collect(),
        }
    }
}

/// The `fundamentals` procedure router.
#[derive(Clone)]
pub struct FundamentalsRouter {
    gateway: QueryGateway,
}

impl FundamentalsRouter {
    pub fn new(gateway: QueryGateway) -> Self {
        Self { gateway }
    }

    /// Decode raw procedure input and run [`FundamentalsRouter::get_by_tickers`].
    ///
    /// Fails with [`CoreError::Validation`] when the input is not
    /// `{ "tickers": [string, ...] }`; unknown keys are ignored.
    pub async fn call(&self, input: Value) -> Result<ProcedureResponse<FundamentalsRecord>, CoreError> {
        let input: GetByTickersInput = serde_json::from_value(input)
            .map_err(|e| CoreError::Validation(format!("invalid getByTickers input: {e}")))?;
        Ok(self.get_by_tickers(input).await)
    }

    /// `fundamentals.getByTickers`: fundamentals plus derived OBQ scores.
    pub async fn get_by_tickers(&self, input: GetByTickersInput) -> ProcedureResponse<FundamentalsRecord> {
        let result = self.gateway.get_fundamentals(&input.tickers).await;
        if let Err(e) = &result {
            error!(error = %e, "Error fetching fundamentals");
        }
        result.into()
    }
}
