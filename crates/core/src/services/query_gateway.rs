use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::bpsp::{window_start, BpspPoint};
use crate::models::fundamentals::{FundamentalsRecord, Row};
use crate::models::ticker::normalize_tickers;
use crate::providers::traits::AnalyticalStore;
use crate::services::query_builder::QueryBuilder;

/// Turns read-only dashboard requests into SQL and runs them against the
/// analytical store.
///
/// Stateless: each call issues at most one store query and nothing is
/// cached between calls. Store errors are logged by the store and returned
/// unchanged.
#[derive(Clone)]
pub struct QueryGateway {
    store: Arc<dyn AnalyticalStore>,
}

impl QueryGateway {
    pub fn new(store: Arc<dyn AnalyticalStore>) -> Self {
        Self { store }
    }

    /// Name of the underlying store.
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Runs raw SQL against the store and returns its rows untouched.
    pub async fn run_query(&self, sql: &str) -> Result<Vec<Row>, CoreError> {
        self.store.run_query(sql).await
    }

    /// Fundamentals plus derived OBQ scores for the given raw tickers.
    ///
    /// Tickers are trimmed and uppercased; blanks are dropped. If nothing is
    /// left, returns an empty list without querying the store.
    pub async fn get_fundamentals<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> Result<Vec<FundamentalsRecord>, CoreError> {
        let tickers = normalize_tickers(tickers).inspect_err(|e| {
            warn!(error = %e, "rejected ticker list");
        })?;

        let Some(sql) = QueryBuilder::fundamentals(&tickers) else {
            debug!("no tickers after normalization, skipping query");
            return Ok(Vec::new());
        };

        let rows = self.store.run_query(&sql).await?;
        debug!(tickers = tickers.len(), rows = rows.len(), "fundamentals fetched");
        Ok(rows.into_iter().map(FundamentalsRecord::from_row).collect())
    }

    /// BPSP history for the trailing five years, oldest first.
    pub async fn get_bpsp_data(&self) -> Result<Vec<BpspPoint>, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.get_bpsp_data_as_of(today).await
    }

    /// [`QueryGateway::get_bpsp_data`] with an explicit "today".
    ///
    /// Rows dated before the window start are dropped and the result is
    /// sorted by date, so the ordering holds whatever the store returns.
    pub async fn get_bpsp_data_as_of(&self, today: NaiveDate) -> Result<Vec<BpspPoint>, CoreError> {
        let rows = self.store.run_query(&QueryBuilder::bpsp()).await?;
        let start = window_start(today);

        let mut points = rows
            .into_iter()
            .map(BpspPoint::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let returned = points.len();
        points.retain(|p| p.date >= start);
        if points.len() != returned {
            warn!(
                dropped = returned - points.len(),
                %start,
                "store returned BPSP rows outside the window"
            );
        }
        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}
