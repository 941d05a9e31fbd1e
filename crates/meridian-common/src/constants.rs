//! System-wide constants for MeridianDB.
//!
//! This module defines the limits and key-format widths shared by the
//! layout subsystem and its consumers.

// =============================================================================
// Row-Key Hashing Constants
// =============================================================================

/// Width of the row-key hash in bits.
///
/// Hashed tables distribute writes by prefixing each physical key with a
/// 128-bit digest of the logical row key.
pub const HASH_WIDTH_BITS: u32 = 128;

/// Size of the hash prefix in bytes (16).
///
/// The prefix is the big-endian encoding of the 128-bit digest, so physical
/// keys of a hashed table sort in digest order.
pub const HASHED_PREFIX_SIZE: usize = (HASH_WIDTH_BITS / 8) as usize;

// =============================================================================
// Key Limits
// =============================================================================

/// Maximum logical row-key size in bytes (16 KB).
///
/// Keys beyond this size defeat the purpose of a sorted store; split keys
/// are held to the same limit.
pub const MAX_ROW_KEY_SIZE: usize = 16 * 1024;

/// Maximum physical key size in bytes.
///
/// A hashed physical key is the hash prefix followed by the full row key.
pub const MAX_PHYSICAL_KEY_SIZE: usize = HASHED_PREFIX_SIZE + MAX_ROW_KEY_SIZE;

// =============================================================================
// Table Naming
// =============================================================================

/// Maximum table name length in bytes.
pub const MAX_TABLE_NAME_LEN: usize = 128;

// =============================================================================
// Partitioning Limits
// =============================================================================

/// Default cap on the number of regions a table may be created with.
pub const DEFAULT_MAX_REGION_COUNT: u32 = 65_536;

/// Default cap on the number of explicit split keys per table.
pub const DEFAULT_MAX_SPLIT_KEYS: usize = 32_768;
