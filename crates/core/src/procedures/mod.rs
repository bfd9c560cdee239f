pub mod bpsp;
pub mod envelope;
pub mod fundamentals;
