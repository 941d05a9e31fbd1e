//! Layout and partitioning error types.
//!
//! Provides the unified error type for all layout-subsystem operations.

use std::fmt;
use thiserror::Error;

use crate::types::LayoutVersion;

/// Error codes for categorizing errors.
///
/// These codes are stable across versions and are the values an
/// administrative surface would map onto exit codes or wire statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // General errors (0x0000 - 0x00FF)
    /// Unknown or unspecified error.
    Unknown = 0x0000,
    /// Internal error (bug).
    Internal = 0x0001,
    /// Invalid argument provided.
    InvalidArgument = 0x0002,
    /// General I/O error.
    Io = 0x0003,

    // Layout errors (0x0100 - 0x01FF)
    /// Table not found.
    TableNotFound = 0x0100,
    /// Table already exists.
    TableExists = 0x0101,
    /// Table name violates the identifier rules.
    InvalidTableName = 0x0102,
    /// Layout update would change the row-key format. Terminal.
    InvalidLayoutUpdate = 0x0103,
    /// Layout update was computed against an outdated version. Retriable.
    StaleLayoutVersion = 0x0104,
    /// Column change rejected by the compatibility policy.
    IncompatibleColumns = 0x0105,

    // Partition errors (0x0200 - 0x02FF)
    /// Partition spec does not match the table's row-key format.
    IncompatiblePartitionSpec = 0x0200,
    /// Region count below the minimum of one.
    InvalidPartitionCount = 0x0201,
    /// Split keys are not strictly increasing.
    InvalidSplitKeyOrder = 0x0202,
    /// Split-key file is malformed.
    InvalidSplitKeyFile = 0x0203,

    // Scan errors (0x0300 - 0x03FF)
    /// Scan bound cannot be expressed over hashed row keys.
    UnsupportedScanBound = 0x0300,
    /// Scan bound literal is malformed.
    InvalidScanBound = 0x0301,
}

impl ErrorCode {
    /// Returns the numeric code.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match (*self as u16) >> 8 {
            0x00 => "General",
            0x01 => "Layout",
            0x02 => "Partition",
            0x03 => "Scan",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The main error type for MeridianDB layout operations.
///
/// Each variant carries the context a caller needs to correct the request,
/// and maps onto a stable [`ErrorCode`].
///
/// # Example
///
/// ```rust
/// use meridian_common::error::{ErrorCode, MeridianError};
///
/// let err = MeridianError::TableNotFound {
///     table: "users".to_string(),
/// };
/// assert_eq!(err.code(), ErrorCode::TableNotFound);
/// ```
#[derive(Debug, Error)]
pub enum MeridianError {
    // ==========================================================================
    // General Errors
    // ==========================================================================
    /// Internal error - this indicates a bug.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },

    /// I/O error from the underlying system.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    // ==========================================================================
    // Layout Errors
    // ==========================================================================
    /// Table not found.
    #[error("table '{table}' not found")]
    TableNotFound {
        /// The missing table.
        table: String,
    },

    /// Table already exists.
    #[error("table '{table}' already exists")]
    TableExists {
        /// The conflicting table.
        table: String,
    },

    /// Table name violates the identifier rules.
    #[error("invalid table name '{name}': {reason}")]
    InvalidTableName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Layout update would change the row-key format.
    ///
    /// The row-key format is fixed when a table is created; this rejection
    /// is terminal and the same proposal will never be accepted.
    #[error(
        "table '{table}': invalid layout update from reference row key format {current} to {proposed}"
    )]
    InvalidLayoutUpdate {
        /// The table being migrated.
        table: String,
        /// Row-key format of the stored layout.
        current: String,
        /// Row-key format the proposal asked for.
        proposed: String,
    },

    /// Layout update was computed against an outdated version.
    ///
    /// Retriable: refetch the current layout and resubmit.
    #[error(
        "table '{table}': proposed layout version {proposed} does not follow current version {current}"
    )]
    StaleLayoutVersion {
        /// The table being migrated.
        table: String,
        /// Version of the stored layout.
        current: LayoutVersion,
        /// Version the proposal carried.
        proposed: LayoutVersion,
    },

    /// Column change rejected by the compatibility policy.
    #[error("table '{table}': incompatible column change: {reason}")]
    IncompatibleColumns {
        /// The table being migrated.
        table: String,
        /// Verdict detail from the compatibility policy.
        reason: String,
    },

    // ==========================================================================
    // Partition Errors
    // ==========================================================================
    /// Partition spec does not match the table's row-key format.
    #[error(
        "table '{table}': {spec} partitioning requires {required} row keys but layout uses {actual}"
    )]
    IncompatiblePartitionSpec {
        /// The table being created.
        table: String,
        /// The kind of partition spec requested.
        spec: String,
        /// Row-key format the spec requires.
        required: String,
        /// Row-key format the layout declares.
        actual: String,
    },

    /// Region count below the minimum of one.
    #[error("invalid region count {count}, must be at least 1")]
    InvalidPartitionCount {
        /// The rejected count.
        count: u32,
    },

    /// Split keys are not strictly increasing.
    #[error("split key at index {index} rejected: {reason}")]
    InvalidSplitKeyOrder {
        /// Zero-based index of the offending key.
        index: usize,
        /// Why it was rejected.
        reason: String,
    },

    /// Split-key file is malformed.
    #[error("malformed split-key file at line {line}: {reason}")]
    InvalidSplitKeyFile {
        /// One-based line number.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },

    // ==========================================================================
    // Scan Errors
    // ==========================================================================
    /// Scan bound cannot be expressed over hashed row keys.
    #[error("table '{table}': scan bound '{bound}' cannot be expressed over hashed row keys")]
    UnsupportedScanBound {
        /// The table being scanned.
        table: String,
        /// The rejected bound literal.
        bound: String,
    },

    /// Scan bound literal is malformed.
    #[error("invalid scan bound '{bound}': {reason}")]
    InvalidScanBound {
        /// The rejected bound literal.
        bound: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl MeridianError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Internal { .. } => ErrorCode::Internal,
            Self::InvalidArgument { .. } | Self::InvalidConfig { .. } => ErrorCode::InvalidArgument,
            Self::Io { .. } => ErrorCode::Io,
            Self::TableNotFound { .. } => ErrorCode::TableNotFound,
            Self::TableExists { .. } => ErrorCode::TableExists,
            Self::InvalidTableName { .. } => ErrorCode::InvalidTableName,
            Self::InvalidLayoutUpdate { .. } => ErrorCode::InvalidLayoutUpdate,
            Self::StaleLayoutVersion { .. } => ErrorCode::StaleLayoutVersion,
            Self::IncompatibleColumns { .. } => ErrorCode::IncompatibleColumns,
            Self::IncompatiblePartitionSpec { .. } => ErrorCode::IncompatiblePartitionSpec,
            Self::InvalidPartitionCount { .. } => ErrorCode::InvalidPartitionCount,
            Self::InvalidSplitKeyOrder { .. } => ErrorCode::InvalidSplitKeyOrder,
            Self::InvalidSplitKeyFile { .. } => ErrorCode::InvalidSplitKeyFile,
            Self::UnsupportedScanBound { .. } => ErrorCode::UnsupportedScanBound,
            Self::InvalidScanBound { .. } => ErrorCode::InvalidScanBound,
        }
    }

    /// Returns true if retrying the same request can succeed.
    ///
    /// Only version races qualify: the caller refetches the current layout,
    /// rebases the proposal, and resubmits.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::StaleLayoutVersion { .. })
    }

    /// Returns true if the same request can never be accepted.
    ///
    /// A rejected row-key format change is terminal: the format was fixed
    /// when the table was created, so the caller must create a new table.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::InvalidLayoutUpdate { .. })
    }

    /// Returns true if the request itself was malformed or incoherent.
    ///
    /// These are caller mistakes that a corrected request avoids, as opposed
    /// to genuine incompatibilities with stored state.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::InvalidConfig { .. }
                | Self::InvalidTableName { .. }
                | Self::IncompatiblePartitionSpec { .. }
                | Self::InvalidPartitionCount { .. }
                | Self::InvalidSplitKeyOrder { .. }
                | Self::InvalidSplitKeyFile { .. }
                | Self::UnsupportedScanBound { .. }
                | Self::InvalidScanBound { .. }
        )
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
