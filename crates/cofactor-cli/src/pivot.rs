//! # Pivot Subcommand
//!
//! Reports zero counts per row and column and the line each pivot rule
//! would expand along, without computing the determinant.

use anyhow::Result;
use clap::Args;

use cofactor_core::Matrix;
use cofactor_tracer::{choose_best_line, choose_best_row, Line};

use crate::input::MatrixSource;

/// Arguments for the pivot subcommand.
#[derive(Args, Debug)]
pub struct PivotArgs {
    #[command(flatten)]
    pub source: MatrixSource,
}

/// Execute the pivot subcommand.
pub fn run_pivot(args: &PivotArgs) -> Result<u8> {
    let matrix = args.source.load()?;
    print!("{}", pivot_report(&matrix));
    Ok(0)
}

/// Human-readable zero-count table and pivot choices. Indices are 1-based.
pub fn pivot_report(matrix: &Matrix) -> String {
    let n = matrix.dimension();
    let best_row = choose_best_row(matrix);
    let best_line = choose_best_line(matrix);
    let mut out = format!("dimension: {n}\n");

    for r in 0..n {
        let marker = if r == best_row { "  <- pivot row" } else { "" };
        out.push_str(&format!(
            "row {}: {} zero(s){marker}\n",
            r + 1,
            matrix.zeros_in_row(r)
        ));
    }
    for c in 0..n {
        out.push_str(&format!(
            "column {}: {} zero(s)\n",
            c + 1,
            matrix.zeros_in_column(c)
        ));
    }

    out.push_str(&format!("most-zeros-row: row {}\n", best_row + 1));
    let line = match best_line {
        Line::Row(r) => format!("row {}", r + 1),
        Line::Column(c) => format!("column {}", c + 1),
    };
    out.push_str(&format!("most-zeros-line: {line}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::demo_matrix;

    #[test]
    fn demo_report_marks_first_row() {
        let report = pivot_report(&demo_matrix().unwrap());
        assert!(report.starts_with("dimension: 4\n"));
        assert!(report.contains("row 1: 3 zero(s)  <- pivot row\n"));
        assert!(report.contains("row 2: 0 zero(s)\n"));
        assert!(report.contains("column 2: 1 zero(s)\n"));
        assert!(report.contains("most-zeros-row: row 1\n"));
        assert!(report.contains("most-zeros-line: row 1\n"));
    }

    #[test]
    fn column_can_beat_rows() {
        let m = Matrix::new(vec![
            vec![1.0, 0.0, 2.0],
            vec![3.0, 0.0, 4.0],
            vec![5.0, 0.0, 6.0],
        ])
        .unwrap();
        let report = pivot_report(&m);
        assert!(report.contains("most-zeros-row: row 1\n"));
        assert!(report.contains("most-zeros-line: column 2\n"));
    }
}
