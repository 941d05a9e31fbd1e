//! Type definitions for MeridianDB.
//!
//! This module contains the core types shared across the layout subsystem.

mod ids;
mod keys;

pub use ids::{LayoutVersion, TableName};
pub use keys::{PhysicalKey, RowKey};
