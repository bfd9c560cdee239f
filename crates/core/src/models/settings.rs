use serde::{Deserialize, Serialize};

/// Default MotherDuck REST query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.motherduck.com/v1/query";

/// Default target database sent with every query.
pub const DEFAULT_DATABASE: &str = "my_db";

/// Default transport timeout for the HTTP client, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote analytical store.
///
/// Passed explicitly to the store client at construction; nothing in the
/// library reads process-wide state on its own.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Bearer token. `None` means "not configured" and every query fails
    /// with a configuration error before touching the network.
    pub token: Option<String>,

    /// Full URL of the query endpoint.
    pub endpoint: String,

    /// Database name placed in the request body.
    pub database: String,

    /// Transport-level timeout applied by the HTTP client.
    pub timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("database", &self.database)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StoreSettings {
    /// Settings with the given token and defaults for everything else.
    /// A blank token is treated as absent.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: normalize_token(Some(token.into())),
            ..Self::default()
        }
    }

    /// Load settings from environment variables.
    ///
    /// - `MOTHERDUCK_TOKEN`: bearer token (blank = absent)
    /// - `MOTHERDUCK_ENDPOINT`: query endpoint URL
    /// - `MOTHERDUCK_DATABASE`: target database
    /// - `MOTHERDUCK_TIMEOUT_SECS`: client timeout
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreSettings::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            token: normalize_token(lookup("MOTHERDUCK_TOKEN")),
            endpoint: lookup("MOTHERDUCK_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            database: lookup("MOTHERDUCK_DATABASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database),
            timeout_secs: lookup("MOTHERDUCK_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Whether a non-blank bearer token is present.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
