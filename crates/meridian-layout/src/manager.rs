//! Table layout orchestration.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use meridian_common::error::{MeridianError, MeridianResult};
use meridian_common::types::{LayoutVersion, PhysicalKey, RowKey, TableName};

use crate::config::LayoutConfig;
use crate::descriptor::LayoutDescriptor;
use crate::keyspace;
use crate::migration::{AdditiveColumns, ColumnCompatibility, MigrationValidator};
use crate::partition::{
    read_split_keys_from_path, KeySpacePartitioner, PartitionSpec, RegionBoundaries,
};
use crate::registry::LayoutRegistry;
use crate::scan::{self, ScanBound, ScanRange};

/// Front door for table layout management.
///
/// Ties the registry, partitioner, migration validator, and scan planner
/// together behind one API. Table creation partitions the key space first
/// and registers the layout only once a valid region set exists, so a
/// rejected partition spec leaves no trace. All operations are safe to
/// call from multiple threads.
#[derive(Debug)]
pub struct LayoutManager<C = AdditiveColumns> {
    config: LayoutConfig,
    registry: LayoutRegistry,
    partitioner: KeySpacePartitioner,
    validator: MigrationValidator<C>,
}

impl LayoutManager<AdditiveColumns> {
    /// Creates a manager with the additive column migration policy.
    pub fn new(config: LayoutConfig) -> MeridianResult<Self> {
        Self::with_compatibility(config, AdditiveColumns)
    }
}

impl<C: ColumnCompatibility> LayoutManager<C> {
    /// Creates a manager with an explicit column migration policy.
    pub fn with_compatibility(config: LayoutConfig, compat: C) -> MeridianResult<Self> {
        config.validate().map_err(MeridianError::invalid_config)?;
        Ok(Self {
            partitioner: KeySpacePartitioner::new(config.clone()),
            registry: LayoutRegistry::new(),
            validator: MigrationValidator::new(compat),
            config,
        })
    }

    /// Creates a table: partitions its key space per `spec` and registers
    /// `layout` as the table's initial layout.
    ///
    /// The layout must carry the initial version; bumped versions belong
    /// to [`LayoutManager::update_layout`]. If the spec is incompatible
    /// with the layout's row-key encoding, nothing is registered.
    pub fn create_table(
        &self,
        layout: LayoutDescriptor,
        spec: &PartitionSpec,
    ) -> MeridianResult<RegionBoundaries> {
        if !layout.version().is_initial() {
            return Err(MeridianError::invalid_argument(format!(
                "new table '{}' must start at layout version {}, got {}",
                layout.table(),
                LayoutVersion::INITIAL,
                layout.version()
            )));
        }

        let boundaries = self.partitioner.partition(&layout, spec)?;
        let table = layout.table().clone();
        self.registry.register(layout)?;
        info!(
            "Created table '{}' with {} regions",
            table,
            boundaries.region_count()
        );
        Ok(boundaries)
    }

    /// Creates a table using split keys read from a file.
    ///
    /// The file holds one key per line; see the partition module docs for
    /// the escape syntax.
    pub fn create_table_with_split_file(
        &self,
        layout: LayoutDescriptor,
        path: impl AsRef<Path>,
    ) -> MeridianResult<RegionBoundaries> {
        let keys = read_split_keys_from_path(path)?;
        self.create_table(layout, &PartitionSpec::SplitKeys(keys))
    }

    /// Applies a proposed layout migration to an existing table.
    pub fn update_layout(
        &self,
        proposed: LayoutDescriptor,
    ) -> MeridianResult<Arc<LayoutDescriptor>> {
        let table = proposed.table().clone();
        match self.registry.apply_migration(&self.validator, proposed) {
            Ok(accepted) => {
                info!(
                    "Applied layout version {} to table '{}'",
                    accepted.version(),
                    table
                );
                Ok(accepted)
            }
            Err(err) => {
                warn!("Rejected layout update for table '{}': {}", table, err);
                Err(err)
            }
        }
    }

    /// Returns the current layout of `table`.
    pub fn layout(&self, table: &TableName) -> MeridianResult<Arc<LayoutDescriptor>> {
        self.registry.get(table)
    }

    /// Plans a range scan over `table` between the given bounds.
    pub fn plan_scan(
        &self,
        table: &TableName,
        start: Option<ScanBound>,
        limit: Option<ScanBound>,
    ) -> MeridianResult<ScanRange> {
        let layout = self.registry.get(table)?;
        scan::plan_scan(&layout, start, limit)
    }

    /// Maps a row key to its physical key under `table`'s encoding.
    pub fn physical_key(&self, table: &TableName, key: &RowKey) -> MeridianResult<PhysicalKey> {
        let layout = self.registry.get(table)?;
        Ok(keyspace::physical_key(layout.row_key_encoding(), key))
    }

    /// Removes `table` from the registry.
    pub fn delete_table(&self, table: &TableName) -> MeridianResult<()> {
        self.registry.remove(table)?;
        info!("Deleted table '{}'", table);
        Ok(())
    }

    /// Returns all registered table names, sorted.
    pub fn list_tables(&self) -> Vec<TableName> {
        self.registry.list()
    }

    /// Returns the number of registered tables.
    pub fn table_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the manager's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use meridian_common::types::LayoutVersion;

    use crate::descriptor::{ColumnDef, RowKeyEncoding};

    fn manager() -> LayoutManager {
        LayoutManager::new(LayoutConfig::default()).unwrap()
    }

    fn layout(name: &str, encoding: RowKeyEncoding) -> LayoutDescriptor {
        LayoutDescriptor::new(
            TableName::new(name).unwrap(),
            encoding,
            vec![ColumnDef::new("info", "name", "string")],
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = LayoutConfig::default().with_max_region_count(0);
        let result = LayoutManager::new(config);
        assert!(matches!(result, Err(MeridianError::InvalidConfig { .. })));
    }

    #[test]
    fn test_create_hashed_table() {
        let manager = manager();
        let boundaries = manager
            .create_table(
                layout("users", RowKeyEncoding::Hashed),
                &PartitionSpec::RegionCount(4),
            )
            .unwrap();

        assert_eq!(boundaries.region_count(), 4);
        assert_eq!(boundaries.starts()[1].as_bytes()[0], 0x40);
        assert_eq!(manager.table_count(), 1);
    }

    #[test]
    fn test_create_rejects_bumped_version() {
        let manager = manager();
        let bumped = layout("users", RowKeyEncoding::Hashed)
            .with_columns(vec![ColumnDef::new("info", "name", "string")])
            .unwrap();

        let result = manager.create_table(bumped, &PartitionSpec::RegionCount(4));
        assert!(matches!(result, Err(MeridianError::InvalidArgument { .. })));
        assert_eq!(manager.table_count(), 0);
    }

    #[test]
    fn test_incompatible_spec_registers_nothing() {
        let manager = manager();
        let name = TableName::new("logs").unwrap();

        let result = manager.create_table(
            layout("logs", RowKeyEncoding::Raw),
            &PartitionSpec::RegionCount(4),
        );
        assert!(matches!(
            result,
            Err(MeridianError::IncompatiblePartitionSpec { .. })
        ));
        assert!(manager.layout(&name).is_err());
        assert_eq!(manager.table_count(), 0);
    }

    #[test]
    fn test_duplicate_create_keeps_original() {
        let manager = manager();
        let name = TableName::new("users").unwrap();
        manager
            .create_table(
                layout("users", RowKeyEncoding::Hashed),
                &PartitionSpec::RegionCount(2),
            )
            .unwrap();

        let result = manager.create_table(
            layout("users", RowKeyEncoding::Hashed),
            &PartitionSpec::RegionCount(8),
        );
        assert!(matches!(result, Err(MeridianError::TableExists { .. })));
        assert_eq!(
            manager.layout(&name).unwrap().row_key_encoding(),
            RowKeyEncoding::Hashed
        );
    }

    #[test]
    fn test_update_layout_round_trip() {
        let manager = manager();
        let name = TableName::new("users").unwrap();
        manager
            .create_table(
                layout("users", RowKeyEncoding::Hashed),
                &PartitionSpec::RegionCount(2),
            )
            .unwrap();

        let current = manager.layout(&name).unwrap();
        let mut columns = current.columns().to_vec();
        columns.push(ColumnDef::new("info", "email", "string"));
        let accepted = manager
            .update_layout(current.with_columns(columns).unwrap())
            .unwrap();

        assert_eq!(accepted.version(), LayoutVersion::new(1));
        assert_eq!(manager.layout(&name).unwrap().version(), LayoutVersion::new(1));
    }

    #[test]
    fn test_physical_key_follows_encoding() {
        let manager = manager();
        manager
            .create_table(
                layout("raw_t", RowKeyEncoding::Raw),
                &PartitionSpec::SplitKeys(vec![RowKey::from_str("m")]),
            )
            .unwrap();
        manager
            .create_table(
                layout("hashed_t", RowKeyEncoding::Hashed),
                &PartitionSpec::RegionCount(2),
            )
            .unwrap();

        let key = RowKey::from_str("user42");
        let raw = manager
            .physical_key(&TableName::new("raw_t").unwrap(), &key)
            .unwrap();
        assert_eq!(raw.as_bytes(), key.as_bytes());

        let hashed = manager
            .physical_key(&TableName::new("hashed_t").unwrap(), &key)
            .unwrap();
        assert_eq!(hashed.len(), 16 + key.len());
        assert!(hashed.as_bytes().ends_with(key.as_bytes()));
    }

    #[test]
    fn test_delete_and_list() {
        let manager = manager();
        for name in ["beta", "alpha"] {
            manager
                .create_table(
                    layout(name, RowKeyEncoding::Hashed),
                    &PartitionSpec::RegionCount(1),
                )
                .unwrap();
        }

        let names: Vec<String> = manager
            .list_tables()
            .into_iter()
            .map(TableName::into_string)
            .collect();
        assert_eq!(names, ["alpha", "beta"]);

        let alpha = TableName::new("alpha").unwrap();
        manager.delete_table(&alpha).unwrap();
        assert_eq!(manager.table_count(), 1);
        assert!(matches!(
            manager.delete_table(&alpha),
            Err(MeridianError::TableNotFound { .. })
        ));
    }
}
