pub mod analytics;
pub mod bpsp;
pub mod fundamentals;
pub mod holding;
pub mod settings;
pub mod ticker;
