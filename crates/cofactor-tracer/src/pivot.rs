//! # Pivot Selection
//!
//! Zero entries on the expansion line are skipped without recursion, so the
//! line with the most zeros produces the fewest branches. Selection is a
//! single stable scan: the first line reaching the maximum wins.

use cofactor_core::Matrix;

use crate::config::PivotRule;
use crate::trace::Line;

/// Index of the row with the most zero entries; the lowest index wins ties.
pub fn choose_best_row(matrix: &Matrix) -> usize {
    first_max((0..matrix.dimension()).map(|r| matrix.zeros_in_row(r))).0
}

/// The row or column with the most zero entries.
///
/// Rows are scanned first, so a column is only chosen when it has strictly
/// more zeros than every row.
pub fn choose_best_line(matrix: &Matrix) -> Line {
    let n = matrix.dimension();
    let (row, row_zeros) = first_max((0..n).map(|r| matrix.zeros_in_row(r)));
    let (column, column_zeros) = first_max((0..n).map(|c| matrix.zeros_in_column(c)));
    if column_zeros > row_zeros {
        Line::Column(column)
    } else {
        Line::Row(row)
    }
}

/// Apply `rule` to `matrix`.
pub fn select_line(rule: PivotRule, matrix: &Matrix) -> Line {
    match rule {
        PivotRule::MostZerosRow => Line::Row(choose_best_row(matrix)),
        PivotRule::MostZerosLine => choose_best_line(matrix),
        PivotRule::FirstRow => Line::Row(0),
    }
}

/// `(index, count)` of the first maximum. An empty iterator yields `(0, 0)`.
fn first_max(counts: impl Iterator<Item = usize>) -> (usize, usize) {
    let mut best: Option<(usize, usize)> = None;
    for (i, zeros) in counts.enumerate() {
        if best.map_or(true, |(_, most)| zeros > most) {
            best = Some((i, zeros));
        }
    }
    best.unwrap_or((0, 0))
}
