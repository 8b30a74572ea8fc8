//! # Square Matrix
//!
//! Defines [`Matrix`], the only matrix representation in the workspace.
//!
//! ## Invariants
//!
//! - At least one row.
//! - Every row has exactly as many entries as there are rows.
//! - Every entry is finite (no NaN, no infinities).
//!
//! The fields are private and the only constructors validate, so any
//! `Matrix` value a downstream crate receives satisfies all three. Entries are
//! stored row-major in a single `Vec<f64>`.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// A square, finite, row-major matrix of `f64` entries.
///
/// Serializes as an array of rows (`[[1, 2], [3, 4]]`). Deserialization runs
/// through [`Matrix::new`], so malformed documents are rejected with a
/// [`MatrixError`] message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    dimension: usize,
    entries: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from its rows.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::Empty`] if `rows` is empty.
    /// - [`MatrixError::NotSquare`] for the first row whose length differs
    ///   from the number of rows.
    /// - [`MatrixError::NonFinite`] for the first NaN or infinite entry.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(MatrixError::Empty);
        }

        let mut entries = Vec::with_capacity(dimension * dimension);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: dimension,
                    found: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(MatrixError::NonFinite { row, column });
            }
            entries.extend(values);
        }

        Ok(Self { dimension, entries })
    }

    /// The `n`x`n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] when `dimension` is zero.
    pub fn identity(dimension: usize) -> Result<Self, MatrixError> {
        if dimension == 0 {
            return Err(MatrixError::Empty);
        }
        let mut entries = vec![0.0; dimension * dimension];
        for i in 0..dimension {
            entries[i * dimension + i] = 1.0;
        }
        Ok(Self { dimension, entries })
    }

    /// Number of rows (equal to the number of columns).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Entry at `(row, column)`, or `None` if either index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.dimension && column < self.dimension {
            Some(self.entries[row * self.dimension + column])
        } else {
            None
        }
    }

    /// A single row as a slice, or `None` if `row` is out of range.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.dimension {
            let start = row * self.dimension;
            Some(&self.entries[start..start + self.dimension])
        } else {
            None
        }
    }

    /// Iterate rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.entries.chunks_exact(self.dimension)
    }

    /// Iterate the entries of one column in row order.
    ///
    /// Yields nothing if `column` is out of range.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        let take = if column < self.dimension { self.dimension } else { 0 };
        self.entries
            .iter()
            .skip(column)
            .step_by(self.dimension)
            .take(take)
            .copied()
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Number of zero entries in `row`. Out-of-range rows count as zero.
    pub fn zeros_in_row(&self, row: usize) -> usize {
        self.row(row)
            .map(|values| values.iter().filter(|v| **v == 0.0).count())
            .unwrap_or(0)
    }

    /// Number of zero entries in `column`. Out-of-range columns count as zero.
    pub fn zeros_in_column(&self, column: usize) -> usize {
        self.column(column).filter(|v| *v == 0.0).count()
    }

    /// The submatrix obtained by deleting `row` and `column`.
    ///
    /// Relative row and column order is preserved and `self` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range, or if the matrix is 1x1.
    /// Use [`Matrix::checked_minor`] for a fallible variant.
    pub fn minor(&self, row: usize, column: usize) -> Matrix {
        assert!(self.dimension > 1, "a 1x1 matrix has no minor");
        assert!(
            row < self.dimension && column < self.dimension,
            "minor index ({row}, {column}) out of bounds for dimension {}",
            self.dimension
        );

        let dimension = self.dimension - 1;
        let entries = self
            .rows()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != column)
                    .map(|(_, v)| *v)
            })
            .collect();

        Matrix { dimension, entries }
    }

    /// Fallible form of [`Matrix::minor`].
    ///
    /// # Errors
    ///
    /// [`MatrixError::NoMinor`] for a 1x1 matrix and
    /// [`MatrixError::OutOfBounds`] for an index outside the matrix.
    pub fn checked_minor(&self, row: usize, column: usize) -> Result<Matrix, MatrixError> {
        if self.dimension == 1 {
            return Err(MatrixError::NoMinor);
        }
        self.check_index(row, column)?;
        Ok(self.minor(row, column))
    }

    /// A copy with rows `a` and `b` exchanged.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfBounds`] if either row is outside the matrix.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Matrix, MatrixError> {
        self.check_index(a, 0)?;
        self.check_index(b, 0)?;
        let mut rows = self.to_rows();
        rows.swap(a, b);
        Matrix::new(rows)
    }

    /// A copy with every entry of `row` multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfBounds`] if `row` is outside the matrix, or
    /// [`MatrixError::NonFinite`] if scaling produces a non-finite entry.
    pub fn scale_row(&self, row: usize, factor: f64) -> Result<Matrix, MatrixError> {
        self.check_index(row, 0)?;
        let mut rows = self.to_rows();
        for value in &mut rows[row] {
            *value *= factor;
        }
        Matrix::new(rows)
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Matrix {
        let n = self.dimension;
        let mut entries = Vec::with_capacity(self.entries.len());
        for column in 0..n {
            entries.extend(self.column(column));
        }
        Matrix {
            dimension: n,
            entries,
        }
    }

    fn check_index(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        if row < self.dimension && column < self.dimension {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                column,
                dimension: self.dimension,
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if either index is out of range.
    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.dimension && column < self.dimension,
            "index ({row}, {column}) out of bounds for dimension {}",
            self.dimension
        );
        &self.entries[row * self.dimension + column]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, values) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, v) in values.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
