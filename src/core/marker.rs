//! Marker locator - picks the column layout of a worksheet
//!
//! Ledger exports come in two shapes. Both carry the `BP04` marker on row 6,
//! either in column D (primary layout) or in column C (fallback layout).

use crate::error::{MergeError, MergeResult};
use crate::types::{LayoutVariant, Sheet, MARKER, MARKER_HEADER_ROW};

/// Header cells probed in order: column index on the marker row, and the
/// layout selected when that cell holds the marker.
pub const MARKER_CANDIDATES: [(usize, LayoutVariant); 2] = [
    (3, LayoutVariant::Primary),
    (2, LayoutVariant::Fallback),
];

/// Determine which layout `sheet` uses
pub fn locate_layout(sheet: &Sheet) -> MergeResult<LayoutVariant> {
    MARKER_CANDIDATES
        .iter()
        .find(|(col, _)| sheet.cell(MARKER_HEADER_ROW, *col).is_text(MARKER))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| MergeError::LayoutNotFound {
            sheet: sheet.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellValue, Row};

    /// Sheet whose row 6 holds `c6` in column C and `d6` in column D
    fn sheet_with_header(c6: CellValue, d6: CellValue) -> Sheet {
        let mut rows = vec![Row::default(); MARKER_HEADER_ROW];
        let mut header = Row::default();
        header.set(2, c6);
        header.set(3, d6);
        rows.push(header);
        Sheet::new("Ledger", rows)
    }

    #[test]
    fn test_marker_in_d6_selects_primary() {
        let sheet = sheet_with_header(CellValue::Empty, "BP04".into());
        assert_eq!(locate_layout(&sheet).unwrap(), LayoutVariant::Primary);
    }

    #[test]
    fn test_marker_in_c6_selects_fallback() {
        let sheet = sheet_with_header("BP04".into(), "Compte".into());
        assert_eq!(locate_layout(&sheet).unwrap(), LayoutVariant::Fallback);
    }

    #[test]
    fn test_d6_wins_when_both_match() {
        let sheet = sheet_with_header("BP04".into(), "BP04".into());
        assert_eq!(locate_layout(&sheet).unwrap(), LayoutVariant::Primary);
    }

    #[test]
    fn test_no_marker_is_layout_not_found() {
        let sheet = sheet_with_header("BP05".into(), CellValue::Number(4.0));
        match locate_layout(&sheet) {
            Err(MergeError::LayoutNotFound { sheet }) => assert_eq!(sheet, "Ledger"),
            other => panic!("expected LayoutNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_match_is_exact() {
        let sheet = sheet_with_header(" BP04".into(), "bp04".into());
        assert!(locate_layout(&sheet).is_err());
    }

    #[test]
    fn test_short_sheet_has_no_layout() {
        let sheet = Sheet::new("Tiny", vec![Row::default()]);
        assert!(matches!(
            locate_layout(&sheet),
            Err(MergeError::LayoutNotFound { .. })
        ));
    }

    #[test]
    fn test_candidates_match_layout_marker_columns() {
        for (col, variant) in MARKER_CANDIDATES {
            assert_eq!(variant.columns().marker, col);
        }
    }
}
