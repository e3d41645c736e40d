//! Field types for schema definition.

use serde::{Deserialize, Serialize};

/// Kinds of fields a schema can register.
///
/// Only [`FieldKind::Text`] fields participate in keyword matching; the
/// other kinds exist for exact filtering and are never returned by the
/// text-field lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Full-text searchable field
    Text,
    /// Exact-match string field
    String,
    /// Integer field
    Integer,
    /// Floating-point field
    Float,
    /// Boolean field
    Boolean,
}

/// A field registered in a schema.
///
/// Fields are produced only by the schema registry. The `indexed_name` is
/// query-safe and is used directly in backend query syntax; the logical
/// `name` is what application code refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Logical name used by application code
    name: String,
    /// Backend field name, safe to embed in query syntax
    indexed_name: String,
    /// The field kind
    kind: FieldKind,
}

impl Field {
    pub(crate) fn new<S, T>(name: S, indexed_name: T, kind: FieldKind) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Field {
            name: name.into(),
            indexed_name: indexed_name.into(),
            kind,
        }
    }

    /// Get the logical field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the indexed backend name.
    pub fn indexed_name(&self) -> &str {
        &self.indexed_name
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Check if this field is searchable by keywords.
    pub fn is_text(&self) -> bool {
        self.kind == FieldKind::Text
    }
}
