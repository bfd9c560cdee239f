use thiserror::Error;

/// Unified error type for the entire jcn-dashboard-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── Analytical store / Network ──────────────────────────────────
    #[error("Analytical store error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Procedure input ─────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Short machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Configuration(_) => "CONFIGURATION_ERROR",
            CoreError::Upstream { .. } => "UPSTREAM_ERROR",
            CoreError::Transport(_) => "TRANSPORT_ERROR",
            CoreError::Deserialization(_) => "DESERIALIZATION_ERROR",
            CoreError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the request URL; keep the query string out of
        // anything that ends up in logs or procedure envelopes.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Transport(sanitized)
    }
}
