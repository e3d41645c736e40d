//! Schema registry mapping logical field names to indexed backend fields.

use std::collections::HashMap;

use crate::error::{Result, SunstoneError};
use crate::schema::field::{Field, FieldKind};

/// Source of resolved text fields for keyword queries.
///
/// Implementations must return stable, deterministically ordered results
/// for a given schema snapshot, so that a query built twice over the same
/// schema renders identically.
pub trait TextFieldSource {
    /// Resolve a logical field name to its indexed text fields.
    ///
    /// One logical name may map to several indexed fields (e.g. stemmed
    /// and unstemmed variants). Fails when the name is unknown or does not
    /// name a text field.
    fn text_fields(&self, name: &str) -> Result<Vec<Field>>;

    /// All text fields in the schema, in registration order.
    fn all_text_fields(&self) -> Vec<Field>;
}

/// A schema defines the fields available for search.
///
/// Registration order is preserved: lookups and the all-text-fields listing
/// return fields in the order they were added, which keeps rendered query
/// parameters deterministic.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Map of logical names to their indexed field variants
    fields: HashMap<String, Vec<Field>>,
    /// Ordered list of logical names (for consistent ordering)
    field_names: Vec<String>,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Schema {
            fields: HashMap::new(),
            field_names: Vec::new(),
        }
    }

    /// Register a field under its logical name.
    ///
    /// Calling this again with the same logical name adds another indexed
    /// variant; all variants of a name must share one kind.
    pub fn add_field<S, T>(&mut self, name: S, indexed_name: T, kind: FieldKind) -> Result<()>
    where
        S: Into<String>,
        T: Into<String>,
    {
        let name = name.into();
        let indexed_name = indexed_name.into();

        if name.is_empty() {
            return Err(SunstoneError::schema("Field name cannot be empty"));
        }
        if indexed_name.is_empty() {
            return Err(SunstoneError::schema("Indexed field name cannot be empty"));
        }

        if let Some(variants) = self.fields.get_mut(&name) {
            if variants[0].kind() != kind {
                return Err(SunstoneError::schema(format!(
                    "Field '{name}' already registered with a different kind"
                )));
            }
            if variants.iter().any(|f| f.indexed_name() == indexed_name) {
                return Err(SunstoneError::schema(format!(
                    "Field '{name}' already has indexed name '{indexed_name}'"
                )));
            }
            variants.push(Field::new(name, indexed_name, kind));
            return Ok(());
        }

        let field = Field::new(name.clone(), indexed_name, kind);
        self.fields.insert(name.clone(), vec![field]);
        self.field_names.push(name);
        Ok(())
    }

    /// Register a text field whose indexed name follows the `<name>_text`
    /// dynamic-field convention.
    pub fn add_text_field<S: Into<String>>(&mut self, name: S) -> Result<()> {
        let name = name.into();
        let indexed_name = format!("{name}_text");
        self.add_field(name, indexed_name, FieldKind::Text)
    }

    /// Get the indexed variants of a logical field name.
    pub fn get_field(&self, name: &str) -> Option<&[Field]> {
        self.fields.get(name).map(|v| v.as_slice())
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all logical field names in the order they were added.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Get the number of logical fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TextFieldSource for Schema {
    fn text_fields(&self, name: &str) -> Result<Vec<Field>> {
        let variants = self
            .fields
            .get(name)
            .ok_or_else(|| SunstoneError::unknown_field(name))?;

        if !variants[0].is_text() {
            return Err(SunstoneError::schema(format!(
                "Field '{name}' is not a text field"
            )));
        }

        Ok(variants.to_vec())
    }

    fn all_text_fields(&self) -> Vec<Field> {
        self.field_names
            .iter()
            .flat_map(|name| self.fields[name].iter())
            .filter(|field| field.is_text())
            .cloned()
            .collect()
    }
}
