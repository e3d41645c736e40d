//! # Sunstone
//!
//! Query parameter construction for Solr-style full-text search backends.
//!
//! ## Features
//!
//! - Dismax (ranked fulltext) and filter-only query shapes
//! - Per-field relevance boosts and phrase-proximity boosts
//! - Safe embedding of arbitrary type identifiers via query-syntax escaping
//! - Insertion-ordered schema registry mapping logical names to indexed fields

pub mod error;
pub mod query;
pub mod schema;
pub mod util;

pub mod prelude {
    pub use crate::error::{Result, SunstoneError};
    pub use crate::query::{BoostedField, Params, QueryBuilder, QueryMode};
    pub use crate::schema::{Field, FieldKind, Schema, TextFieldSource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
