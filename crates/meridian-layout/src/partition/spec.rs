//! Partitioning requests.

use meridian_common::types::RowKey;

/// How a new table's key space should be divided into regions.
///
/// Exactly one kind is given per create request, and each kind only makes
/// sense for one row-key encoding: uniform region counts need the hashed
/// key space, explicit split keys need raw key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionSpec {
    /// Split the hashed key space into this many equal-width regions.
    RegionCount(u32),
    /// Explicit region boundaries, in ascending row-key order.
    ///
    /// An empty list yields a single region covering the whole key space.
    SplitKeys(Vec<RowKey>),
}

impl PartitionSpec {
    /// Returns a short label for the spec kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RegionCount(_) => "region-count",
            Self::SplitKeys(_) => "split-key",
        }
    }
}
