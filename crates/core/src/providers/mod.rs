pub mod traits;

// Store implementations
pub mod motherduck;
