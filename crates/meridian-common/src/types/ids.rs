//! Core identifier types for MeridianDB.
//!
//! These types provide validated, type-safe wrappers around table names and
//! layout versions, preventing accidental misuse of raw strings and integers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_TABLE_NAME_LEN;
use crate::error::{MeridianError, MeridianResult};

/// A validated table name.
///
/// Table names are ASCII identifiers: the first character is a letter or
/// underscore, the rest are letters, digits, or underscores. Validation
/// happens once at construction, so holders of a `TableName` never need to
/// re-check it.
///
/// # Example
///
/// ```rust
/// use meridian_common::types::TableName;
///
/// let table = TableName::new("users").unwrap();
/// assert_eq!(table.as_str(), "users");
/// assert!(TableName::new("bad name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Creates a table name, validating the identifier rules.
    pub fn new(name: impl Into<String>) -> MeridianResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the underlying `String`.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate(name: &str) -> MeridianResult<()> {
        if name.is_empty() {
            return Err(MeridianError::InvalidTableName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if name.len() > MAX_TABLE_NAME_LEN {
            return Err(MeridianError::InvalidTableName {
                name: name.to_string(),
                reason: format!(
                    "name is {} bytes, limit is {MAX_TABLE_NAME_LEN}",
                    name.len()
                ),
            });
        }
        let mut chars = name.chars();
        // Non-empty, checked above
        let first = chars.next().unwrap_or('\0');
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(MeridianError::InvalidTableName {
                name: name.to_string(),
                reason: format!("name must start with a letter or underscore, got '{first}'"),
            });
        }
        for c in chars {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                return Err(MeridianError::InvalidTableName {
                    name: name.to_string(),
                    reason: format!("invalid character '{c}'"),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TableName {
    type Error = MeridianError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<&str> for TableName {
    type Error = MeridianError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<TableName> for String {
    #[inline]
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl AsRef<str> for TableName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Layout version number for a table.
///
/// Versions start at [`LayoutVersion::INITIAL`] when a table is created and
/// advance by exactly one for every accepted layout migration. Gaps and
/// decreases never occur in a stored descriptor.
///
/// # Example
///
/// ```rust
/// use meridian_common::types::LayoutVersion;
///
/// let version = LayoutVersion::INITIAL;
/// assert_eq!(version.next().as_u64(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct LayoutVersion(u64);

impl LayoutVersion {
    /// Version assigned to a table's very first layout.
    pub const INITIAL: Self = Self(0);

    /// Creates a version from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(version: u64) -> Self {
        Self(version)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the version an accepted migration must carry.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Checks whether this is the creation-time version.
    #[inline]
    #[must_use]
    pub const fn is_initial(self) -> bool {
        self.0 == Self::INITIAL.0
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LayoutVersion {
    #[inline]
    fn from(version: u64) -> Self {
        Self::new(version)
    }
}

impl From<LayoutVersion> for u64 {
    #[inline]
    fn from(version: LayoutVersion) -> Self {
        version.0
    }
}
