//! Utility modules for Sunstone.

pub mod escape;

// Re-export commonly used functions
pub use escape::*;
