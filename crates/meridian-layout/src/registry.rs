//! In-memory layout registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use meridian_common::error::{MeridianError, MeridianResult};
use meridian_common::types::TableName;

use crate::descriptor::LayoutDescriptor;
use crate::migration::{ColumnCompatibility, MigrationValidator};

/// Authoritative store of the current layout for every known table.
///
/// Lookups take the shared lock; registration, removal, and migration take
/// the exclusive lock. [`LayoutRegistry::apply_migration`] validates and
/// swaps while holding the write lock, so of two concurrent proposals built
/// against the same stored version at most one can land; the other observes
/// the bumped version and fails as stale.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    tables: RwLock<HashMap<TableName, Arc<LayoutDescriptor>>>,
}

impl LayoutRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the initial layout for a new table.
    pub fn register(&self, layout: LayoutDescriptor) -> MeridianResult<()> {
        let mut tables = self.tables.write();
        if tables.contains_key(layout.table()) {
            return Err(MeridianError::TableExists {
                table: layout.table().to_string(),
            });
        }
        tables.insert(layout.table().clone(), Arc::new(layout));
        Ok(())
    }

    /// Returns the current layout of `table`.
    pub fn get(&self, table: &TableName) -> MeridianResult<Arc<LayoutDescriptor>> {
        self.tables
            .read()
            .get(table)
            .map(Arc::clone)
            .ok_or_else(|| MeridianError::TableNotFound {
                table: table.to_string(),
            })
    }

    /// Returns true if `table` is registered.
    pub fn contains(&self, table: &TableName) -> bool {
        self.tables.read().contains_key(table)
    }

    /// Removes `table` and returns its final layout.
    pub fn remove(&self, table: &TableName) -> MeridianResult<Arc<LayoutDescriptor>> {
        self.tables
            .write()
            .remove(table)
            .ok_or_else(|| MeridianError::TableNotFound {
                table: table.to_string(),
            })
    }

    /// Returns all registered table names, sorted.
    pub fn list(&self) -> Vec<TableName> {
        let mut names: Vec<TableName> = self.tables.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Validates `proposed` against the stored layout and, if accepted,
    /// installs it as the table's current layout.
    ///
    /// On rejection the stored layout is untouched. The returned layout is
    /// the newly installed one.
    pub fn apply_migration<C: ColumnCompatibility>(
        &self,
        validator: &MigrationValidator<C>,
        proposed: LayoutDescriptor,
    ) -> MeridianResult<Arc<LayoutDescriptor>> {
        let mut tables = self.tables.write();
        let current = tables
            .get(proposed.table())
            .map(Arc::clone)
            .ok_or_else(|| MeridianError::TableNotFound {
                table: proposed.table().to_string(),
            })?;

        validator.validate(&current, &proposed)?;

        let accepted = Arc::new(proposed);
        tables.insert(accepted.table().clone(), Arc::clone(&accepted));
        Ok(accepted)
    }
}
