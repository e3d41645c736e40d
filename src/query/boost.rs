//! Boosted-field tokens for dismax query parameters.

use crate::schema::Field;

/// A resolved text field paired with an optional relevance boost.
///
/// Rendering is a pure function of the field and boost; a descriptor holds
/// no mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostedField {
    field: Field,
    boost: Option<f32>,
}

impl BoostedField {
    /// Create a descriptor for `field`, optionally weighted by `boost`.
    pub fn new(field: Field, boost: Option<f32>) -> Self {
        BoostedField { field, boost }
    }

    /// Get the underlying field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Get the boost weight, if any.
    pub fn boost(&self) -> Option<f32> {
        self.boost
    }

    /// Render the backend's boosted-field token.
    ///
    /// Without a boost this is the bare indexed name; with one it is
    /// `name^boost` in the backend's boost syntax.
    pub fn to_token(&self) -> String {
        match self.boost {
            Some(boost) => format!("{}^{}", self.field.indexed_name(), format_boost(boost)),
            None => self.field.indexed_name().to_string(),
        }
    }
}

/// Format a boost weight as plain decimal for the backend query parser.
///
/// Whole-valued boosts keep one decimal place (`2.0`), fractional boosts
/// render minimally (`2.5`). Display for floats never produces scientific
/// notation, which the parser would reject.
fn format_boost(boost: f32) -> String {
    if boost.fract() == 0.0 {
        format!("{boost:.1}")
    } else {
        format!("{boost}")
    }
}
