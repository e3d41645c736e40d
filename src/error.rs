//! Error types for the Sunstone library.
//!
//! All errors are represented by the [`SunstoneError`] enum. Query
//! construction itself is total; errors originate in the schema registry
//! (unknown or misconfigured field names) and propagate to the caller
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use sunstone::error::{Result, SunstoneError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SunstoneError::unknown_field("missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Sunstone operations.
#[derive(Error, Debug)]
pub enum SunstoneError {
    /// Schema-related errors (invalid registrations, non-text lookups)
    #[error("Schema error: {0}")]
    Schema(String),

    /// A field name that no schema entry resolves
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SunstoneError.
pub type Result<T> = std::result::Result<T, SunstoneError>;

impl SunstoneError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SunstoneError::Schema(msg.into())
    }

    /// Create a new unknown-field error.
    pub fn unknown_field<S: Into<String>>(name: S) -> Self {
        SunstoneError::UnknownField(name.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SunstoneError::Query(msg.into())
    }
}
