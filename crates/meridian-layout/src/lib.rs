//! # meridian-layout
//!
//! Table layout and key-space partitioning for Meridian.
//!
//! This crate owns everything between a table's logical shape and its
//! physical key space:
//! - Layout descriptors: table name, row-key encoding, columns, version
//! - Key-space partitioning into contiguous regions
//! - Validated, versioned layout migrations
//! - Range scan planning over physical keys
//!
//! # Architecture
//!
//! A table fixes its row-key encoding at creation and keeps it for life.
//! The encoding decides the physical key format:
//!
//! ```text
//! RAW                            HASHED
//! +--------------------+         +------------------+--------------------+
//! | Row key (variable) |         | XXH3-128 BE (16) | Row key (variable) |
//! +--------------------+         +------------------+--------------------+
//! ```
//!
//! Raw tables preserve row-key order, so they partition on explicit split
//! keys and accept row-key scan bounds. Hashed tables scatter rows
//! uniformly across the 128-bit hash space, so they partition into equal
//! hash-space regions and accept only physical scan bounds.
//!
//! ## Example
//!
//! ```rust
//! use meridian_common::types::TableName;
//! use meridian_layout::descriptor::{ColumnDef, LayoutDescriptor, RowKeyEncoding};
//! use meridian_layout::partition::PartitionSpec;
//! use meridian_layout::{LayoutConfig, LayoutManager};
//!
//! # fn main() -> meridian_common::error::MeridianResult<()> {
//! let manager = LayoutManager::new(LayoutConfig::default())?;
//! let layout = LayoutDescriptor::new(
//!     TableName::new("users")?,
//!     RowKeyEncoding::Hashed,
//!     vec![ColumnDef::new("info", "name", "string")],
//! )?;
//! let regions = manager.create_table(layout, &PartitionSpec::RegionCount(4))?;
//! assert_eq!(regions.region_count(), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod keyspace;
mod manager;
mod registry;

/// Layout descriptors: tables, columns, row-key encodings.
pub mod descriptor;

/// Layout migration validation.
pub mod migration;

/// Key-space partitioning into regions.
pub mod partition;

/// Range scan planning.
pub mod scan;

// Re-exports for convenience
pub use config::LayoutConfig;
pub use keyspace::{hashed_prefix, physical_key};
pub use manager::LayoutManager;
pub use registry::LayoutRegistry;
