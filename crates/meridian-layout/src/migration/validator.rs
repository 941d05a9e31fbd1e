//! Layout migration validation.
//!
//! A migration replaces a table's current layout with a proposed one. The
//! validator is stateless and judges one attempt at a time; the caller is
//! responsible for serializing attempts per table (the layout registry
//! holds its write lock across validate-and-swap for exactly this reason).

use meridian_common::error::{MeridianError, MeridianResult};

use crate::descriptor::LayoutDescriptor;

use super::compat::{AdditiveColumns, ColumnCompatibility};

/// Validates proposed layout migrations against the stored layout.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the row-key encoding must be unchanged (a change is rejected
///    terminally, the table would have to be recreated)
/// 2. the proposed version must be exactly one ahead of the current one
///    (anything else means the proposal was built against an outdated
///    layout and can be rebased and retried)
/// 3. the column diff is delegated to the injected [`ColumnCompatibility`]
///    policy and its verdict passed through verbatim
#[derive(Debug, Clone)]
pub struct MigrationValidator<C = AdditiveColumns> {
    compat: C,
}

impl MigrationValidator<AdditiveColumns> {
    /// Creates a validator with the default additive column policy.
    #[must_use]
    pub fn additive() -> Self {
        Self::new(AdditiveColumns)
    }
}

impl<C: ColumnCompatibility> MigrationValidator<C> {
    /// Creates a validator with an explicit column policy.
    pub fn new(compat: C) -> Self {
        Self { compat }
    }

    /// Judges a proposed layout against the current one.
    ///
    /// On `Ok(())` the proposal may be stored as the table's new layout.
    /// On error, nothing about the stored layout changes.
    pub fn validate(
        &self,
        current: &LayoutDescriptor,
        proposed: &LayoutDescriptor,
    ) -> MeridianResult<()> {
        // A proposal for another table is a caller bug, not a migration
        if proposed.table() != current.table() {
            return Err(MeridianError::invalid_argument(format!(
                "proposed layout targets table '{}', current layout is for '{}'",
                proposed.table(),
                current.table()
            )));
        }

        if proposed.row_key_encoding() != current.row_key_encoding() {
            return Err(MeridianError::InvalidLayoutUpdate {
                table: current.table().to_string(),
                current: current.row_key_encoding().as_str().to_string(),
                proposed: proposed.row_key_encoding().as_str().to_string(),
            });
        }

        if proposed.version() != current.version().next() {
            return Err(MeridianError::StaleLayoutVersion {
                table: current.table().to_string(),
                current: current.version(),
                proposed: proposed.version(),
            });
        }

        self.compat.check(current, proposed)
    }
}

impl Default for MigrationValidator<AdditiveColumns> {
    fn default() -> Self {
        Self::additive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use meridian_common::types::{LayoutVersion, TableName};

    use crate::descriptor::{ColumnDef, RowKeyEncoding};

    /// Policy that accepts any column diff.
    struct AcceptAll;

    impl ColumnCompatibility for AcceptAll {
        fn check(&self, _: &LayoutDescriptor, _: &LayoutDescriptor) -> MeridianResult<()> {
            Ok(())
        }
    }

    /// Policy that rejects every column diff.
    struct RejectAll;

    impl ColumnCompatibility for RejectAll {
        fn check(
            &self,
            current: &LayoutDescriptor,
            _: &LayoutDescriptor,
        ) -> MeridianResult<()> {
            Err(MeridianError::IncompatibleColumns {
                table: current.table().to_string(),
                reason: "no column changes allowed".to_string(),
            })
        }
    }

    fn layout(name: &str, encoding: RowKeyEncoding) -> LayoutDescriptor {
        LayoutDescriptor::new(
            TableName::new(name).unwrap(),
            encoding,
            vec![ColumnDef::new("info", "name", "string")],
        )
        .unwrap()
    }

    /// Same layout serialized with a different encoding and version, as an
    /// externally supplied document would carry it.
    fn crafted(name: &str, encoding: &str, version: u64) -> LayoutDescriptor {
        let json = format!(
            r#"{{
                "table": "{name}",
                "row_key_encoding": "{encoding}",
                "columns": [
                    {{"family": "info", "qualifier": "name", "value_type": "string"}}
                ],
                "version": {version}
            }}"#
        );
        LayoutDescriptor::from_json_str(&json).unwrap()
    }

    #[test]
    fn test_accepts_well_formed_migration() {
        let current = layout("users", RowKeyEncoding::Hashed);
        let proposed = current
            .with_columns(vec![
                ColumnDef::new("info", "name", "string"),
                ColumnDef::new("info", "email", "string"),
            ])
            .unwrap();

        let validator = MigrationValidator::additive();
        assert!(validator.validate(&current, &proposed).is_ok());
    }

    #[test]
    fn test_encoding_change_rejected() {
        let current = layout("users", RowKeyEncoding::Hashed);
        let proposed = crafted("users", "RAW", 1);

        let validator = MigrationValidator::additive();
        match validator.validate(&current, &proposed) {
            Err(MeridianError::InvalidLayoutUpdate {
                current, proposed, ..
            }) => {
                assert_eq!(current, "HASHED");
                assert_eq!(proposed, "RAW");
            }
            other => panic!("expected InvalidLayoutUpdate, got {other:?}"),
        }
    }

    #[test]
    fn test_encoding_check_runs_before_version_check() {
        let current = layout("users", RowKeyEncoding::Hashed);
        // Both the encoding and the version are wrong; the encoding wins
        let proposed = crafted("users", "RAW", 9);

        let validator = MigrationValidator::additive();
        let result = validator.validate(&current, &proposed);
        assert!(matches!(
            result,
            Err(MeridianError::InvalidLayoutUpdate { .. })
        ));
    }

    #[test]
    fn test_stale_version_rejected() {
        let current = layout("users", RowKeyEncoding::Hashed);

        for bad_version in [0u64, 2, 7] {
            let proposed = crafted("users", "HASHED", bad_version);
            let validator = MigrationValidator::additive();
            match validator.validate(&current, &proposed) {
                Err(MeridianError::StaleLayoutVersion {
                    current, proposed, ..
                }) => {
                    assert_eq!(current, LayoutVersion::INITIAL);
                    assert_eq!(proposed, LayoutVersion::new(bad_version));
                }
                other => panic!("expected StaleLayoutVersion, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_version_check_runs_before_column_check() {
        let current = layout("users", RowKeyEncoding::Hashed);
        let proposed = crafted("users", "HASHED", 5);

        // RejectAll would fail the column check, but the version check fires first
        let validator = MigrationValidator::new(RejectAll);
        assert!(matches!(
            validator.validate(&current, &proposed),
            Err(MeridianError::StaleLayoutVersion { .. })
        ));
    }

    #[test]
    fn test_column_verdict_passes_through() {
        let current = layout("users", RowKeyEncoding::Hashed);
        let proposed = crafted("users", "HASHED", 1);

        let validator = MigrationValidator::new(RejectAll);
        match validator.validate(&current, &proposed) {
            Err(MeridianError::IncompatibleColumns { reason, .. }) => {
                assert_eq!(reason, "no column changes allowed");
            }
            other => panic!("expected IncompatibleColumns, got {other:?}"),
        }

        let validator = MigrationValidator::new(AcceptAll);
        assert!(validator.validate(&current, &proposed).is_ok());
    }

    #[test]
    fn test_cross_table_proposal_is_invalid_argument() {
        let current = layout("users", RowKeyEncoding::Hashed);
        // Even with a different encoding, the table mismatch is caught first
        let proposed = crafted("orders", "RAW", 1);

        let validator = MigrationValidator::additive();
        assert!(matches!(
            validator.validate(&current, &proposed),
            Err(MeridianError::InvalidArgument { .. })
        ));
    }
}
