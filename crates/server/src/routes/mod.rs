//! API routes.
//!
//! | Method   | Path                                   | Handler                      |
//! |----------|----------------------------------------|------------------------------|
//! | GET      | `/health`                              | liveness                     |
//! | GET/POST | `/api/trpc/fundamentals.getByTickers`  | fundamentals + OBQ scores    |
//! | GET      | `/api/bpsp`                            | BPSP history (5 years)       |
//! | GET      | `/api/portfolio`                       | default holdings at cost     |

pub mod bpsp;
pub mod fundamentals;
pub mod health;
pub mod portfolio;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub use bpsp::bpsp_router;
pub use fundamentals::fundamentals_router;
pub use health::health_router;
pub use portfolio::portfolio_router;

/// Full API router, without middleware layers.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/trpc", fundamentals_router())
        .nest("/api/bpsp", bpsp_router())
        .nest("/api/portfolio", portfolio_router())
}
