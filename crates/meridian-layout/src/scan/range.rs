//! Scan bound and range types.

use std::fmt;

use meridian_common::types::PhysicalKey;

// ============================================================================
// Scan Bounds
// ============================================================================

/// One endpoint of a requested scan, before planning.
///
/// A bound is either already a physical key, or a literal that the planner
/// resolves against the table's row-key encoding. Literals prefixed with
/// `hex:` denote physical bytes directly (`hex:80ff` is the two bytes
/// `[0x80, 0xff]`); any other literal is a row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanBound {
    /// A key in the table's physical order, used as-is.
    Physical(PhysicalKey),
    /// A textual bound resolved by the planner.
    Literal(String),
}

impl From<PhysicalKey> for ScanBound {
    fn from(key: PhysicalKey) -> Self {
        ScanBound::Physical(key)
    }
}

impl From<String> for ScanBound {
    fn from(literal: String) -> Self {
        ScanBound::Literal(literal)
    }
}

impl From<&str> for ScanBound {
    fn from(literal: &str) -> Self {
        ScanBound::Literal(literal.to_string())
    }
}

impl fmt::Display for ScanBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanBound::Physical(key) => write!(f, "{key}"),
            ScanBound::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

// ============================================================================
// Scan Ranges
// ============================================================================

/// A planned scan over the physical key space.
///
/// `start` is inclusive and `limit` is exclusive; `None` on either side
/// leaves that side unbounded. Produced by the scan planner, consumed by
/// whatever iterates the underlying store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRange {
    /// First physical key included in the scan, if bounded below.
    pub start: Option<PhysicalKey>,
    /// First physical key excluded from the scan, if bounded above.
    pub limit: Option<PhysicalKey>,
}

impl ScanRange {
    /// Creates a range with the given endpoints.
    #[must_use]
    pub fn new(start: Option<PhysicalKey>, limit: Option<PhysicalKey>) -> Self {
        Self { start, limit }
    }

    /// Creates a range covering the entire key space.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true if neither side is bounded.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.limit.is_none()
    }

    /// Returns true if the range cannot contain any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match (&self.start, &self.limit) {
            (Some(start), Some(limit)) => start >= limit,
            _ => false,
        }
    }

    /// Returns true if `key` falls inside the range.
    #[must_use]
    pub fn contains(&self, key: &PhysicalKey) -> bool {
        let after_start = self.start.as_ref().map_or(true, |start| key >= start);
        let before_limit = self.limit.as_ref().map_or(true, |limit| key < limit);
        after_start && before_limit
    }
}
