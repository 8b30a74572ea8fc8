//! # Number and Matrix Formatting

use cofactor_core::Matrix;

/// Format a value the way a person would write it.
///
/// Integral values have no fractional part and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

/// Rows of right-aligned, bracketed entries, one string per row.
///
/// ```text
/// [  5  0  0 ]
/// [ -3  2  1 ]
/// ```
pub fn matrix_grid(matrix: &Matrix) -> Vec<String> {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .map(|row| row.iter().copied().map(format_number).collect())
        .collect();
    let width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(1);

    cells
        .iter()
        .map(|row| {
            let body = row
                .iter()
                .map(|c| format!("{c:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("[ {body} ]")
        })
        .collect()
}
