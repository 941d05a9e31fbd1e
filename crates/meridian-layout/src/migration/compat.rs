//! Column-compatibility policies for layout migrations.

use meridian_common::error::{MeridianError, MeridianResult};

use crate::descriptor::LayoutDescriptor;

/// Decides whether a proposed column set is an acceptable evolution of the
/// current one.
///
/// The migration validator handles encoding and version checks itself and
/// delegates the column diff here, passing both full descriptors so a
/// policy can consult anything it needs. Verdicts are surfaced to the
/// caller unchanged.
pub trait ColumnCompatibility: Send + Sync {
    /// Returns `Ok(())` when the proposed columns may replace the current
    /// ones, or an error describing the first incompatibility found.
    fn check(&self, current: &LayoutDescriptor, proposed: &LayoutDescriptor) -> MeridianResult<()>;
}

/// The default policy: migrations may only add columns.
///
/// Every current column must survive with its value type unchanged; new
/// columns may appear freely. Removals and type changes are rejected
/// because existing stored cells would become unreadable.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdditiveColumns;

impl ColumnCompatibility for AdditiveColumns {
    fn check(&self, current: &LayoutDescriptor, proposed: &LayoutDescriptor) -> MeridianResult<()> {
        for column in current.columns() {
            match proposed.column(&column.family, &column.qualifier) {
                None => {
                    return Err(MeridianError::IncompatibleColumns {
                        table: current.table().to_string(),
                        reason: format!("column '{}' was removed", column.fully_qualified()),
                    });
                }
                Some(kept) if kept.value_type != column.value_type => {
                    return Err(MeridianError::IncompatibleColumns {
                        table: current.table().to_string(),
                        reason: format!(
                            "column '{}' changed type from {} to {}",
                            column.fully_qualified(),
                            column.value_type,
                            kept.value_type
                        ),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
