//! Layout migration validation.
//!
//! [`MigrationValidator`] gates every in-place layout change: the row-key
//! encoding must not change, the proposed version must succeed the stored
//! one, and the column diff must pass the injected [`ColumnCompatibility`]
//! policy ([`AdditiveColumns`] by default).

mod compat;
mod validator;

pub use compat::{AdditiveColumns, ColumnCompatibility};
pub use validator::MigrationValidator;
