//! Key-space partitioning: how a new table's key space is divided into
//! regions.
//!
//! Two request kinds exist, each tied to a row-key encoding:
//!
//! - [`PartitionSpec::RegionCount`] divides the 128-bit hash space of a
//!   hashed table into equal-width intervals
//! - [`PartitionSpec::SplitKeys`] uses caller-chosen boundaries over a
//!   raw-keyed table, optionally loaded from a split-key file
//!
//! The output is a [`RegionBoundaries`] set whose first entry is always the
//! empty key.

mod boundaries;
mod spec;
mod split_file;
mod splitter;

pub use boundaries::RegionBoundaries;
pub use spec::PartitionSpec;
pub use split_file::{read_split_keys, read_split_keys_from_path};
pub use splitter::KeySpacePartitioner;
