use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::fundamentals::Row;

/// Abstraction over the remote analytical store.
///
/// The store is an opaque SQL endpoint: it takes a complete statement and
/// answers with rows. Callers must hand in fully-built SQL; implementations
/// do no further parameterization.
#[async_trait]
pub trait AnalyticalStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Execute `sql` and return the resulting rows.
    ///
    /// An empty vector means the statement matched nothing.
    async fn run_query(&self, sql: &str) -> Result<Vec<Row>, CoreError>;
}
