//! Error handling for MeridianDB.
//!
//! This module provides a unified error type and result alias used
//! across all MeridianDB components.

mod layout;

pub use layout::{ErrorCode, MeridianError};

/// Result type alias for MeridianDB operations.
pub type MeridianResult<T> = std::result::Result<T, MeridianError>;
