//! Layout descriptors: the versioned record of a table's schema and
//! row-key encoding.
//!
//! A [`LayoutDescriptor`] is created once when a table is created and
//! replaced wholesale by accepted migrations. The row-key encoding inside it
//! is the one property that can never change across versions.

mod column;
mod table;

pub use column::ColumnDef;
pub use table::{LayoutDescriptor, RowKeyEncoding};
