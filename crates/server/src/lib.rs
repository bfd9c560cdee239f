//! HTTP surface of the JCN financial dashboard.
//!
//! Exposes the core procedures over axum: fundamentals by ticker, BPSP
//! history and the portfolio summary.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
