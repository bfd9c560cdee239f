use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

use super::traits::AnalyticalStore;
use crate::errors::CoreError;
use crate::models::fundamentals::Row;
use crate::models::settings::StoreSettings;

/// MotherDuck REST query API.
///
/// - **Auth**: `Authorization: Bearer <token>`; no token → configuration
///   error before any request is sent.
/// - **Request**: `POST {endpoint}` with `{ "query": <sql>, "database": <name> }`.
/// - **Response**: `{ "data": [...], "schema": [...], "rowCount": n }`.
/// - No retries; the first failure is returned to the caller.
pub struct MotherDuckStore {
    client: Client,
    settings: StoreSettings,
}

impl MotherDuckStore {
    pub fn new(settings: StoreSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, settings }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    async fn execute(&self, sql: &str) -> Result<Vec<Row>, CoreError> {
        let token = self
            .settings
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CoreError::Configuration("MotherDuck token not configured".into()))?;

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(token)
            .json(&QueryRequest {
                query: sql,
                database: &self.settings.database,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    let e = CoreError::from(e);
                    warn!(
                        status = status.as_u16(),
                        error = %e,
                        "failed to read MotherDuck error body"
                    );
                    format!("<unreadable body: {e}>")
                }
            };
            return Err(CoreError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let result: QueryResponse = response.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse MotherDuck response: {e}"))
        })?;

        let rows = result.data.unwrap_or_default();
        debug!(
            database = %self.settings.database,
            rows = rows.len(),
            row_count = ?result.row_count,
            columns = result.schema.len(),
            "MotherDuck query complete"
        );
        Ok(rows)
    }
}

// ── MotherDuck API request/response types ───────────────────────────

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    database: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<Vec<Row>>,
    #[serde(default)]
    schema: Vec<Value>,
    #[serde(rename = "rowCount", default)]
    row_count: Option<u64>,
}

#[async_trait]
impl AnalyticalStore for MotherDuckStore {
    fn name(&self) -> &str {
        "MotherDuck"
    }

    async fn run_query(&self, sql: &str) -> Result<Vec<Row>, CoreError> {
        let result = self.execute(sql).await;
        if let Err(e) = &result {
            error!(store = self.name(), error = %e, "MotherDuck query error");
        }
        result
    }
}
