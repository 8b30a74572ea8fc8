//! # Determinant Expansion
//!
//! The recursive tracer. Evaluation is pure and synchronous: the trace tree is
//! built bottom-up and returned fully materialized. Recursion depth equals the
//! matrix dimension.

use cofactor_core::{CofactorError, Matrix, TraceError};

use crate::config::{BaseCasePolicy, TracerConfig};
use crate::pivot::select_line;
use crate::trace::{
    Contribution, ExpansionTerm, Explanation, LaplaceExpansion, SarrusTerm, Sign, TraceNode,
};

/// Compute the determinant of `matrix` with the default configuration.
///
/// Classic base cases, most-zeros row pivot, no dimension limit. Total over
/// every valid [`Matrix`].
pub fn compute_determinant(matrix: &Matrix) -> TraceNode {
    Tracer::default().evaluate(matrix)
}

/// The submatrix of `matrix` without row `row` and column `column`.
///
/// # Panics
///
/// Panics if either index is out of range or `matrix` is 1x1. See
/// [`Matrix::minor`].
pub fn minor_matrix(matrix: &Matrix, row: usize, column: usize) -> Matrix {
    matrix.minor(row, column)
}

/// A configured determinant tracer.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    config: TracerConfig,
}

impl Tracer {
    /// Create a tracer with the given configuration.
    pub fn new(config: TracerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Compute the determinant of `matrix` and its full explanation tree.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::DimensionLimit`] if a `max_dimension` is
    /// configured and `matrix` is larger.
    pub fn trace(&self, matrix: &Matrix) -> Result<TraceNode, TraceError> {
        let dimension = matrix.dimension();
        if let Some(limit) = self.config.max_dimension {
            if dimension > limit {
                tracing::warn!(dimension, limit, "matrix rejected by dimension limit");
                return Err(TraceError::DimensionLimit { dimension, limit });
            }
        }

        tracing::debug!(
            dimension,
            base_cases = ?self.config.base_cases,
            pivot = %self.config.pivot,
            "tracing determinant"
        );
        let node = self.evaluate(matrix);
        tracing::debug!(
            determinant = node.determinant,
            nodes = node.node_count(),
            "determinant traced"
        );
        Ok(node)
    }

    /// Validate raw rows and trace them in one step.
    ///
    /// # Errors
    ///
    /// [`CofactorError::Matrix`] for empty, non-square, or non-finite input
    /// and [`CofactorError::Trace`] when the dimension limit is exceeded.
    pub fn trace_rows(&self, rows: Vec<Vec<f64>>) -> Result<TraceNode, CofactorError> {
        let matrix = Matrix::new(rows)?;
        Ok(self.trace(&matrix)?)
    }

    fn evaluate(&self, matrix: &Matrix) -> TraceNode {
        match (matrix.dimension(), self.config.base_cases) {
            (1, _) => scalar(matrix),
            (2, BaseCasePolicy::Classic) => direct(matrix),
            (3, BaseCasePolicy::Classic) => sarrus(matrix),
            _ => self.laplace(matrix),
        }
    }

    fn laplace(&self, matrix: &Matrix) -> TraceNode {
        let n = matrix.dimension();
        let line = select_line(self.config.pivot, matrix);
        let mut terms = Vec::with_capacity(n);
        let mut accumulated = 0.0;
        let mut zeros = 0;

        tracing::debug!(dimension = n, %line, "laplace expansion");

        for k in 0..n {
            let (row, column) = line.position(k);
            let entry = matrix[(row, column)];
            if entry == 0.0 {
                zeros += 1;
                terms.push(ExpansionTerm::Skipped { row, column });
                continue;
            }

            let sign = Sign::of(row, column);
            let minor = matrix.minor(row, column);
            let minor_trace = self.evaluate(&minor);
            let partial = sign.factor() * entry * minor_trace.determinant;

            tracing::trace!(row, column, entry, %sign, partial, "cofactor term");

            accumulated += partial;
            terms.push(ExpansionTerm::Contribution(Box::new(Contribution {
                row,
                column,
                entry,
                sign,
                minor,
                minor_trace,
                partial,
            })));
        }

        TraceNode {
            determinant: accumulated,
            explanation: Explanation::Laplace(LaplaceExpansion {
                matrix: matrix.clone(),
                line,
                zeros,
                terms,
                accumulated,
            }),
        }
    }
}

fn scalar(matrix: &Matrix) -> TraceNode {
    let value = matrix[(0, 0)];
    TraceNode {
        determinant: value,
        explanation: Explanation::Scalar { value },
    }
}

fn direct(matrix: &Matrix) -> TraceNode {
    let (a, b) = (matrix[(0, 0)], matrix[(0, 1)]);
    let (c, d) = (matrix[(1, 0)], matrix[(1, 1)]);
    let ad = a * d;
    let bc = b * c;
    TraceNode {
        determinant: ad - bc,
        explanation: Explanation::Direct { a, b, c, d, ad, bc },
    }
}

fn sarrus(matrix: &Matrix) -> TraceNode {
    let (a, b, c) = (matrix[(0, 0)], matrix[(0, 1)], matrix[(0, 2)]);
    let (d, e, f) = (matrix[(1, 0)], matrix[(1, 1)], matrix[(1, 2)]);
    let (g, h, i) = (matrix[(2, 0)], matrix[(2, 1)], matrix[(2, 2)]);

    let positives = [
        SarrusTerm::new([a, e, i]),
        SarrusTerm::new([b, f, g]),
        SarrusTerm::new([c, d, h]),
    ];
    let negatives = [
        SarrusTerm::new([c, e, g]),
        SarrusTerm::new([a, f, h]),
        SarrusTerm::new([b, d, i]),
    ];
    let positive_sum = positives.iter().map(|t| t.product).sum::<f64>();
    let negative_sum = negatives.iter().map(|t| t.product).sum::<f64>();

    TraceNode {
        determinant: positive_sum - negative_sum,
        explanation: Explanation::Sarrus {
            matrix: matrix.clone(),
            positives,
            negatives,
            positive_sum,
            negative_sum,
        },
    }
}
