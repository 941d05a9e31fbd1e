//! Column definitions within a table layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column definition.
///
/// Columns are addressed by a family name plus a qualifier; the pair is
/// written `family:qualifier`. The value type is an opaque label as far as
/// layout management is concerned, but changing it across layout versions is
/// what the migration compatibility policy watches for.
///
/// # Example
///
/// ```rust
/// use meridian_layout::descriptor::ColumnDef;
///
/// let column = ColumnDef::new("info", "email", "string");
/// assert_eq!(column.fully_qualified(), "info:email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column family name.
    pub family: String,
    /// Qualifier within the family.
    pub qualifier: String,
    /// Value type label, opaque to layout management.
    pub value_type: String,
}

impl ColumnDef {
    /// Creates a new column definition.
    pub fn new(
        family: impl Into<String>,
        qualifier: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
            value_type: value_type.into(),
        }
    }

    /// Returns the `family:qualifier` form used to identify the column.
    #[must_use]
    pub fn fully_qualified(&self) -> String {
        format!("{}:{}", self.family, self.qualifier)
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.qualifier)
    }
}
