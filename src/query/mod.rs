//! Query parameter construction.

pub mod boost;
pub mod builder;

pub use self::boost::BoostedField;
pub use self::builder::QueryBuilder;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flat parameter mapping handed to the transport layer for form encoding.
pub type Params = HashMap<String, String>;

/// The two terminal output shapes a query can take.
///
/// The mode is decided once by keyword presence: setting a non-empty
/// keyword phrase switches to ranked fulltext, clearing it reverts to
/// filter-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMode {
    /// No keywords: the type restriction is the whole query.
    FilterOnly,
    /// Keywords present: dismax ranked search, with the type restriction
    /// demoted to a filter query.
    RankedFulltext,
}
