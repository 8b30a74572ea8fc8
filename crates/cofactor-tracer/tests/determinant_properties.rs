//! # Determinant Property Tests
//!
//! Algebraic properties of the tracer checked against an independent
//! permutation-sum (Leibniz) reference. Entries are small integers, so every
//! product and sum is exact in `f64` and results compare with `==`.

use cofactor_tracer::{
    compute_determinant, BaseCasePolicy, Explanation, Matrix, PivotRule, TraceNode, Tracer,
    TracerConfig,
};
use proptest::prelude::*;

/// Leibniz formula: Σ_σ sgn(σ) Π a[i][σ(i)].
fn leibniz(matrix: &Matrix) -> f64 {
    let n = matrix.dimension();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut total = 0.0;
    permute(&mut perm, 0, &mut |p| {
        let mut inversions = 0;
        for i in 0..n {
            for j in i + 1..n {
                if p[i] > p[j] {
                    inversions += 1;
                }
            }
        }
        let sign = if inversions % 2 == 0 { 1.0 } else { -1.0 };
        let product: f64 = (0..n).map(|i| matrix[(i, p[i])]).product();
        total += sign * product;
    });
    total
}

fn permute(perm: &mut Vec<usize>, k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == perm.len() {
        visit(perm.as_slice());
        return;
    }
    for i in k..perm.len() {
        perm.swap(k, i);
        permute(perm, k + 1, visit);
        perm.swap(k, i);
    }
}

fn integer_matrix(max_dim: usize) -> impl Strategy<Value = Matrix> {
    integer_matrix_in(1..=max_dim)
}

fn integer_matrix_in(dims: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Matrix> {
    dims.prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(-4i32..=4, n), n).prop_map(|rows| {
            Matrix::new(
                rows.into_iter()
                    .map(|r| r.into_iter().map(f64::from).collect())
                    .collect(),
            )
            .unwrap()
        })
    })
}

/// Matrices of exactly dimension `n` with no zero entries.
fn dense_matrix(n: usize) -> impl Strategy<Value = Matrix> {
    let nonzero = prop_oneof![(1i32..=4), (-4i32..=-1)];
    prop::collection::vec(prop::collection::vec(nonzero, n), n).prop_map(|rows| {
        Matrix::new(
            rows.into_iter()
                .map(|r| r.into_iter().map(f64::from).collect())
                .collect(),
        )
        .unwrap()
    })
}

fn tracer(base_cases: BaseCasePolicy, pivot: PivotRule) -> Tracer {
    Tracer::new(TracerConfig {
        base_cases,
        pivot,
        max_dimension: None,
    })
}

fn det(matrix: &Matrix) -> f64 {
    compute_determinant(matrix).determinant
}

/// Every Laplace node's accumulated total equals the sum of its partials,
/// and every contribution's partial is `sign · entry · det(minor)`.
fn assert_consistent(node: &TraceNode) {
    if let Some(expansion) = node.expansion() {
        let sum: f64 = expansion.terms.iter().map(|t| t.partial()).sum();
        assert_eq!(sum, expansion.accumulated);
        assert_eq!(node.determinant, expansion.accumulated);
        assert_eq!(
            expansion.zeros,
            expansion.terms.len() - node.children().count()
        );
    }
    for c in node.contributions() {
        assert_eq!(c.partial, c.sign.factor() * c.entry * c.minor_trace.determinant);
        assert_eq!(c.minor.dimension() + 1, expansion_dimension(node));
        assert_consistent(&c.minor_trace);
    }
}

fn expansion_dimension(node: &TraceNode) -> usize {
    node.expansion().map(|e| e.matrix.dimension()).unwrap_or(0)
}

#[test]
fn spec_examples() {
    let two = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(det(&two), -2.0);

    let three = Matrix::new(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap();
    assert_eq!(det(&three), 0.0);

    let four = Matrix::new(vec![
        vec![5.0, 0.0, 0.0, 0.0],
        vec![3.0, 2.0, -3.0, 2.0],
        vec![1.0, 4.0, 2.0, 1.0],
        vec![5.0, 2.0, -4.0, 4.0],
    ])
    .unwrap();
    assert_eq!(det(&four), 130.0);
    assert_eq!(leibniz(&four), 130.0);
}

#[test]
fn identity_is_one_for_every_size() {
    for n in 1..=7 {
        let identity = Matrix::identity(n).unwrap();
        assert_eq!(det(&identity), 1.0, "det(I_{n})");
        let uniform = tracer(BaseCasePolicy::Uniform, PivotRule::MostZerosRow);
        assert_eq!(uniform.trace(&identity).unwrap().determinant, 1.0);
    }
}

#[test]
fn trace_survives_json_round_trip() {
    let four = Matrix::new(vec![
        vec![2.0, 1.0, 0.0, 3.0],
        vec![1.0, -1.0, 2.0, 0.0],
        vec![0.0, 4.0, 1.0, 1.0],
        vec![3.0, 0.0, 2.0, 5.0],
    ])
    .unwrap();
    let node = compute_determinant(&four);
    let json = serde_json::to_string(&node).unwrap();
    let back: TraceNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn five_by_five_nests_laplace_over_sarrus() {
    let five = Matrix::new(vec![
        vec![1.0, 2.0, 0.0, 1.0, 3.0],
        vec![0.0, 1.0, 4.0, 2.0, 1.0],
        vec![2.0, 0.0, 1.0, 0.0, 0.0],
        vec![1.0, 3.0, 2.0, 1.0, 2.0],
        vec![4.0, 1.0, 0.0, 2.0, 1.0],
    ])
    .unwrap();
    let node = compute_determinant(&five);
    assert_eq!(node.determinant, leibniz(&five));
    // Row 2 has three zeros, leaving two branches.
    assert_eq!(node.children().count(), 2);
    for child in node.children() {
        assert!(matches!(child.explanation, Explanation::Laplace(_)));
        for grandchild in child.children() {
            assert!(matches!(grandchild.explanation, Explanation::Sarrus { .. }));
        }
    }
    assert_consistent(&node);
}

proptest! {
    /// The tracer matches the Leibniz reference.
    #[test]
    fn matches_leibniz(matrix in integer_matrix(5)) {
        prop_assert_eq!(det(&matrix), leibniz(&matrix));
    }

    /// Neither the pivot rule nor the base-case policy changes the value.
    #[test]
    fn pivot_choice_does_not_change_result(matrix in integer_matrix(5)) {
        let expected = det(&matrix);
        for base_cases in [BaseCasePolicy::Classic, BaseCasePolicy::Uniform] {
            for pivot in PivotRule::ALL {
                let node = tracer(base_cases, pivot).trace(&matrix).unwrap();
                prop_assert_eq!(node.determinant, expected);
            }
        }
    }

    /// An all-zero row or column forces a zero determinant.
    #[test]
    fn zero_line_gives_zero(
        matrix in integer_matrix(5),
        pick in any::<prop::sample::Index>(),
        column in any::<bool>(),
    ) {
        let n = matrix.dimension();
        let k = pick.index(n);
        let mut rows = matrix.to_rows();
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                if (column && j == k) || (!column && i == k) {
                    *v = 0.0;
                }
            }
        }
        let zeroed = Matrix::new(rows).unwrap();
        prop_assert_eq!(det(&zeroed), 0.0);
    }

    /// Swapping two distinct rows negates the determinant.
    #[test]
    fn row_swap_negates(
        matrix in integer_matrix_in(2..=5),
        picks in any::<(prop::sample::Index, prop::sample::Index)>(),
    ) {
        let n = matrix.dimension();
        let a = picks.0.index(n);
        let b = (a + 1 + picks.1.index(n - 1)) % n;
        let swapped = matrix.swap_rows(a, b).unwrap();
        prop_assert_eq!(det(&swapped), -det(&matrix));
    }

    /// Scaling one row by k scales the determinant by k.
    #[test]
    fn row_scale_scales(
        matrix in integer_matrix(5),
        pick in any::<prop::sample::Index>(),
        k in -3i32..=3,
    ) {
        let row = pick.index(matrix.dimension());
        let k = f64::from(k);
        let scaled = matrix.scale_row(row, k).unwrap();
        prop_assert_eq!(det(&scaled), k * det(&matrix));
    }

    /// Transposition preserves the determinant.
    #[test]
    fn transpose_preserves(matrix in integer_matrix(5)) {
        prop_assert_eq!(det(&matrix.transpose()), det(&matrix));
    }

    /// The number of top-level children equals the nonzero count on the
    /// chosen pivot row, and every node is internally consistent.
    #[test]
    fn top_level_branching(matrix in integer_matrix_in(4..=5)) {
        let node = compute_determinant(&matrix);
        let expansion = node.expansion().unwrap();
        let row = cofactor_tracer::choose_best_row(&matrix);
        prop_assert_eq!(expansion.line, cofactor_tracer::Line::Row(row));
        let nonzero = matrix.dimension() - matrix.zeros_in_row(row);
        prop_assert_eq!(node.children().count(), nonzero);
        assert_consistent(&node);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn dense_uniform_depth_is_n_minus_one(matrix in (2usize..=5).prop_flat_map(dense_matrix)) {
        let n = matrix.dimension();
        let node = tracer(BaseCasePolicy::Uniform, PivotRule::MostZerosRow)
            .trace(&matrix)
            .unwrap();
        prop_assert_eq!(node.depth(), n - 1);
        prop_assert_eq!(node.children().count(), n);
    }

    #[test]
    fn dense_classic_depth_is_n_minus_three(matrix in (4usize..=6).prop_flat_map(dense_matrix)) {
        let n = matrix.dimension();
        let node = compute_determinant(&matrix);
        prop_assert_eq!(node.depth(), n - 3);
        prop_assert_eq!(node.determinant, leibniz(&matrix));
    }
}
