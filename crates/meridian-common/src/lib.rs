//! # meridian-common
//!
//! Common types, errors, and constants for MeridianDB.
//!
//! This crate provides the foundational types and abstractions used across
//! all MeridianDB components. It includes:
//!
//! - **Types**: Validated identifiers (`TableName`, `LayoutVersion`) and the
//!   row-key / physical-key pair
//! - **Errors**: Unified error handling with `MeridianError` and stable
//!   `ErrorCode` values
//! - **Constants**: System-wide limits and key-format widths
//!
//! ## Example
//!
//! ```rust
//! use meridian_common::types::{LayoutVersion, RowKey, TableName};
//! use meridian_common::error::MeridianResult;
//!
//! fn example() -> MeridianResult<()> {
//!     let table = TableName::new("users")?;
//!     let version = LayoutVersion::INITIAL;
//!     let key = RowKey::from_bytes(b"user:1234");
//!     assert_eq!(table.as_str(), "users");
//!     assert!(version.is_initial());
//!     assert_eq!(key.len(), 9);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use constants::*;
pub use error::{MeridianError, MeridianResult};
pub use types::{LayoutVersion, PhysicalKey, RowKey, TableName};
