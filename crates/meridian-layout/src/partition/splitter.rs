//! Region boundary computation.
//!
//! Turns a partitioning request into the initial region boundary set for a
//! table. Region counts divide the 128-bit hash space into equal-width
//! intervals; explicit split keys are validated and used as-is.

use meridian_common::error::{MeridianError, MeridianResult};
use meridian_common::types::{PhysicalKey, RowKey};

use crate::config::LayoutConfig;
use crate::descriptor::{LayoutDescriptor, RowKeyEncoding};

use super::boundaries::RegionBoundaries;
use super::spec::PartitionSpec;

/// Computes initial region boundaries for new tables.
#[derive(Debug, Clone)]
pub struct KeySpacePartitioner {
    config: LayoutConfig,
}

impl KeySpacePartitioner {
    /// Creates a partitioner with the given limits.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Computes the region boundaries requested by `spec` for a table with
    /// the given layout.
    ///
    /// Each spec kind requires a matching row-key encoding: region counts
    /// need [`RowKeyEncoding::Hashed`] (uniform digest-space intervals mean
    /// nothing over raw keys), split keys need [`RowKeyEncoding::Raw`]
    /// (explicit boundaries mean nothing once a hash sits between row key
    /// and physical key). A mismatch fails with
    /// [`MeridianError::IncompatiblePartitionSpec`].
    pub fn partition(
        &self,
        layout: &LayoutDescriptor,
        spec: &PartitionSpec,
    ) -> MeridianResult<RegionBoundaries> {
        let encoding = layout.row_key_encoding();
        match spec {
            PartitionSpec::RegionCount(count) => {
                if !encoding.is_hashed() {
                    return Err(incompatible_spec(layout, spec, RowKeyEncoding::Hashed));
                }
                self.split_uniform(*count)
            }
            PartitionSpec::SplitKeys(keys) => {
                if encoding.is_hashed() {
                    return Err(incompatible_spec(layout, spec, RowKeyEncoding::Raw));
                }
                self.split_explicit(keys)
            }
        }
    }

    /// Divides the 128-bit hash space into `count` equal-width regions.
    fn split_uniform(&self, count: u32) -> MeridianResult<RegionBoundaries> {
        if count < 1 {
            return Err(MeridianError::InvalidPartitionCount { count });
        }
        if count > self.config.max_region_count {
            return Err(MeridianError::invalid_argument(format!(
                "region count {count} exceeds the limit of {}",
                self.config.max_region_count
            )));
        }
        Ok(RegionBoundaries::from_starts(uniform_starts(count)))
    }

    /// Validates explicit split keys and uses them as region starts.
    fn split_explicit(&self, keys: &[RowKey]) -> MeridianResult<RegionBoundaries> {
        if keys.len() > self.config.max_split_keys {
            return Err(MeridianError::invalid_argument(format!(
                "{} split keys exceed the limit of {}",
                keys.len(),
                self.config.max_split_keys
            )));
        }

        let mut starts = Vec::with_capacity(keys.len() + 1);
        starts.push(PhysicalKey::empty());

        let mut prev: Option<&RowKey> = None;
        for (index, key) in keys.iter().enumerate() {
            if key.is_empty() {
                // The empty key is the implicit first boundary already
                return Err(MeridianError::InvalidSplitKeyOrder {
                    index,
                    reason: "empty split key".to_string(),
                });
            }
            if key.len() > self.config.max_split_key_size {
                return Err(MeridianError::invalid_argument(format!(
                    "split key at index {index} is {} bytes, limit is {}",
                    key.len(),
                    self.config.max_split_key_size
                )));
            }
            if let Some(prev) = prev {
                if key <= prev {
                    let reason = if key == prev {
                        "duplicate of previous key".to_string()
                    } else {
                        "precedes previous key".to_string()
                    };
                    return Err(MeridianError::InvalidSplitKeyOrder { index, reason });
                }
            }
            starts.push(PhysicalKey::from_bytes(key.as_bytes()));
            prev = Some(key);
        }

        Ok(RegionBoundaries::from_starts(starts))
    }
}

impl Default for KeySpacePartitioner {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn incompatible_spec(
    layout: &LayoutDescriptor,
    spec: &PartitionSpec,
    required: RowKeyEncoding,
) -> MeridianError {
    MeridianError::IncompatiblePartitionSpec {
        table: layout.table().to_string(),
        spec: spec.kind().to_string(),
        required: required.as_str().to_string(),
        actual: layout.row_key_encoding().as_str().to_string(),
    }
}

/// Computes the start keys of `count` equal-width intervals over the
/// 128-bit hash space.
///
/// Start `i` is `floor(i * 2^128 / count)` encoded big-endian; start 0 is
/// the empty key. Widths differ by at most one where `count` does not
/// divide the space evenly. The arithmetic decomposes `2^128` as
/// `width * count + rem` to stay inside u128.
fn uniform_starts(count: u32) -> Vec<PhysicalKey> {
    let n = u128::from(count);

    // u128::MAX = 2^128 - 1, so 2^128 = q * n + r + 1
    let q = u128::MAX / n;
    let r = u128::MAX % n;
    let (width, rem) = if r + 1 == n { (q + 1, 0) } else { (q, r + 1) };

    let mut starts = Vec::with_capacity(count as usize);
    starts.push(PhysicalKey::empty());
    for i in 1..n {
        // floor(i * 2^128 / n) = i * width + floor(i * rem / n)
        let boundary = i * width + (i * rem) / n;
        starts.push(PhysicalKey::from_bytes(&boundary.to_be_bytes()));
    }
    starts
}
