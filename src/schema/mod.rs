//! Schema module for Sunstone.
//!
//! This module maps the logical field names application code uses to the
//! indexed field names the backend queries against.

pub mod field;
#[allow(clippy::module_inception)]
pub mod schema;

// Re-export commonly used types
pub use field::{Field, FieldKind};
pub use schema::{Schema, TextFieldSource};
