//! Range scan planning.
//!
//! Turns user-facing scan bounds into a [`ScanRange`] over physical keys,
//! honoring the table's row-key encoding. On a raw table a textual bound
//! is a row key and maps straight onto the physical order. On a hashed
//! table row keys are scattered by the hash prefix, so a row-key literal
//! does not name a physical position and is rejected; only physical
//! bounds (`hex:` literals or [`ScanBound::Physical`]) are accepted there.

use meridian_common::error::{MeridianError, MeridianResult};
use meridian_common::types::{PhysicalKey, RowKey};

use crate::descriptor::{LayoutDescriptor, RowKeyEncoding};
use crate::keyspace;

use super::range::{ScanBound, ScanRange};

/// Literal prefix marking a bound as physical bytes written in hex.
const HEX_PREFIX: &str = "hex:";

/// Plans a scan over `layout`'s table between the given bounds.
///
/// `start` is inclusive, `limit` is exclusive, and `None` leaves that side
/// unbounded. Bounds are resolved independently; the planner does not
/// reject inverted ranges, it returns them as-is and [`ScanRange::is_empty`]
/// reports them.
pub fn plan_scan(
    layout: &LayoutDescriptor,
    start: Option<ScanBound>,
    limit: Option<ScanBound>,
) -> MeridianResult<ScanRange> {
    let start = start.map(|bound| resolve_bound(layout, bound)).transpose()?;
    let limit = limit.map(|bound| resolve_bound(layout, bound)).transpose()?;
    Ok(ScanRange::new(start, limit))
}

/// Resolves one bound to a physical key.
fn resolve_bound(layout: &LayoutDescriptor, bound: ScanBound) -> MeridianResult<PhysicalKey> {
    match bound {
        ScanBound::Physical(key) => Ok(key),
        ScanBound::Literal(literal) => resolve_literal(layout, &literal),
    }
}

fn resolve_literal(layout: &LayoutDescriptor, literal: &str) -> MeridianResult<PhysicalKey> {
    if let Some(hex) = literal.strip_prefix(HEX_PREFIX) {
        return PhysicalKey::from_hex(hex).map_err(|reason| MeridianError::InvalidScanBound {
            bound: literal.to_string(),
            reason,
        });
    }

    match layout.row_key_encoding() {
        RowKeyEncoding::Raw => Ok(keyspace::physical_key(
            RowKeyEncoding::Raw,
            &RowKey::from_str(literal),
        )),
        RowKeyEncoding::Hashed => Err(MeridianError::UnsupportedScanBound {
            table: layout.table().to_string(),
            bound: literal.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use meridian_common::types::TableName;

    use crate::descriptor::ColumnDef;

    fn layout(encoding: RowKeyEncoding) -> LayoutDescriptor {
        LayoutDescriptor::new(
            TableName::new("events").unwrap(),
            encoding,
            vec![ColumnDef::new("info", "payload", "bytes")],
        )
        .unwrap()
    }

    #[test]
    fn test_raw_table_row_key_literals() {
        let layout = layout(RowKeyEncoding::Raw);
        let range = plan_scan(&layout, Some("b".into()), Some("m".into())).unwrap();

        assert_eq!(range.start, Some(PhysicalKey::from_str("b")));
        assert_eq!(range.limit, Some(PhysicalKey::from_str("m")));
        assert!(range.contains(&PhysicalKey::from_str("cat")));
        assert!(!range.contains(&PhysicalKey::from_str("m")));
    }

    #[test]
    fn test_hex_literals_work_on_any_encoding() {
        for encoding in [RowKeyEncoding::Raw, RowKeyEncoding::Hashed] {
            let layout = layout(encoding);
            let range = plan_scan(
                &layout,
                Some("hex:40000000000000000000000000000000".into()),
                Some("hex:80000000000000000000000000000000".into()),
            )
            .unwrap();

            let start = range.start.unwrap();
            assert_eq!(start.len(), 16);
            assert_eq!(start.as_bytes()[0], 0x40);
            assert_eq!(range.limit.unwrap().as_bytes()[0], 0x80);
        }
    }

    #[test]
    fn test_hashed_table_rejects_row_key_literal() {
        let layout = layout(RowKeyEncoding::Hashed);
        match plan_scan(&layout, Some("user42".into()), None) {
            Err(MeridianError::UnsupportedScanBound { table, bound }) => {
                assert_eq!(table, "events");
                assert_eq!(bound, "user42");
            }
            other => panic!("expected UnsupportedScanBound, got {other:?}"),
        }
    }

    #[test]
    fn test_physical_bounds_accepted_on_hashed_table() {
        let layout = layout(RowKeyEncoding::Hashed);
        let midpoint = PhysicalKey::from_hex("80000000000000000000000000000000").unwrap();
        let range = plan_scan(&layout, Some(midpoint.clone().into()), None).unwrap();

        assert_eq!(range.start, Some(midpoint));
        assert_eq!(range.limit, None);
    }

    #[test]
    fn test_malformed_hex_is_invalid_scan_bound() {
        let layout = layout(RowKeyEncoding::Raw);

        // Odd digit count
        match plan_scan(&layout, Some("hex:80f".into()), None) {
            Err(MeridianError::InvalidScanBound { bound, .. }) => {
                assert_eq!(bound, "hex:80f");
            }
            other => panic!("expected InvalidScanBound, got {other:?}"),
        }

        // Non-hex character
        assert!(matches!(
            plan_scan(&layout, None, Some("hex:80zz".into())),
            Err(MeridianError::InvalidScanBound { .. })
        ));
    }

    #[test]
    fn test_bare_hex_prefix_rejected() {
        // An empty bound would silently mean "unbounded"; require None instead
        let layout = layout(RowKeyEncoding::Hashed);
        let result = plan_scan(&layout, Some("hex:".into()), None);
        assert!(matches!(
            result,
            Err(MeridianError::InvalidScanBound { .. })
        ));
    }

    #[test]
    fn test_absent_bounds_plan_an_unbounded_scan() {
        let layout = layout(RowKeyEncoding::Hashed);
        let range = plan_scan(&layout, None, None).unwrap();
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_limit_side_errors_surface_too() {
        let layout = layout(RowKeyEncoding::Hashed);
        let result = plan_scan(
            &layout,
            Some("hex:00".into()),
            Some("somewhere".into()),
        );
        assert!(matches!(
            result,
            Err(MeridianError::UnsupportedScanBound { .. })
        ));
    }
}
