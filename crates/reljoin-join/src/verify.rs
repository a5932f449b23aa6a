//! Test-time result verification.
//!
//! These helpers cross-validate join strategies in tests and debug builds;
//! production joins never call them. The comparison is order-sensitive:
//! callers must sort both tables into the same canonical order (join column
//! plus a tiebreaker) before comparing.

use reljoin_table::Table;

/// Cell-by-cell equivalence of two canonically ordered result tables.
///
/// False on any row/column count mismatch. Cells are equal when both are null
/// or both are present and content-equal. Row keys are identity, not data,
/// and are ignored.
pub fn data_equals(a: &Table, b: &Table) -> bool {
    if a.row_count() != b.row_count() || a.col_count() != b.col_count() {
        return false;
    }
    for row in 0..a.row_count() {
        for col in 0..a.col_count() {
            if a.value(row, col) != b.value(row, col) {
                return false;
            }
        }
    }
    true
}

/// Panicking form of [`data_equals`] for test assertions.
pub fn assert_data_equals(a: &Table, b: &Table) {
    assert!(
        data_equals(a, b),
        "tables differ: {}x{} vs {}x{}",
        a.row_count(),
        a.col_count(),
        b.row_count(),
        b.col_count()
    );
}
