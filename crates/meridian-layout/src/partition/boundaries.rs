//! Region boundary sets.

use meridian_common::types::PhysicalKey;

/// The ordered region start keys computed for a new table.
///
/// The first start is always the empty key, so every physical key belongs
/// to exactly one region. Boundaries are computed once at creation time and
/// handed to the storage engine; they are not updated when the engine later
/// splits or merges regions on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionBoundaries {
    starts: Vec<PhysicalKey>,
}

impl RegionBoundaries {
    /// Builds a boundary set from start keys.
    ///
    /// Callers must pass a non-empty, strictly increasing sequence whose
    /// first element is the empty key.
    pub(crate) fn from_starts(starts: Vec<PhysicalKey>) -> Self {
        debug_assert!(!starts.is_empty());
        debug_assert!(starts[0].is_empty());
        debug_assert!(starts.windows(2).all(|w| w[0] < w[1]));
        Self { starts }
    }

    /// A single region covering the whole key space.
    #[must_use]
    pub fn single_region() -> Self {
        Self {
            starts: vec![PhysicalKey::empty()],
        }
    }

    /// Number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.starts.len()
    }

    /// The region start keys, ascending. The first is always empty.
    #[must_use]
    pub fn starts(&self) -> &[PhysicalKey] {
        &self.starts
    }

    /// Iterates over the region start keys in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PhysicalKey> {
        self.starts.iter()
    }

    /// Returns the index of the region that owns the given physical key.
    #[must_use]
    pub fn region_of(&self, key: &PhysicalKey) -> usize {
        // The first start is the empty key, so at least one start is <= key
        self.starts.partition_point(|start| start <= key) - 1
    }

    /// Consumes the set, returning the raw start keys.
    #[must_use]
    pub fn into_starts(self) -> Vec<PhysicalKey> {
        self.starts
    }
}

impl<'a> IntoIterator for &'a RegionBoundaries {
    type Item = &'a PhysicalKey;
    type IntoIter = std::slice::Iter<'a, PhysicalKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
