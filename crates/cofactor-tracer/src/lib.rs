//! # cofactor-tracer — Determinant Tracer
//!
//! Computes the determinant of a square [`Matrix`](cofactor_core::Matrix) by
//! recursive cofactor (Laplace) expansion and records every intermediate
//! step in a [`TraceNode`] tree suitable for step-by-step display.
//!
//! - **Expansion** (`expansion.rs`): [`compute_determinant`] and the
//!   configurable [`Tracer`]. Dimensions 1, 2, and 3 use direct formulas
//!   (single entry, `a·d − b·c`, Sarrus); larger matrices expand along the
//!   line with the most zeros.
//!
//! - **Pivot selection** (`pivot.rs`): [`choose_best_row`] and the
//!   row-or-column variant used by [`PivotRule::MostZerosLine`].
//!
//! - **Trace tree** (`trace.rs`): plain data, `Serialize`/`Deserialize`, no
//!   markup. Rendering lives in `cofactor-render`.
//!
//! - **Configuration** (`config.rs`): [`TracerConfig`] selects the base-case
//!   policy, the pivot rule, and an optional dimension limit.
//!
//! ## Mathematical Definition
//!
//! For an n×n matrix A and a fixed row r:
//!
//! ```text
//! det(A) = Σ_j (-1)^(r+j) · a[r][j] · det(M[r][j])
//! ```
//!
//! where `M[r][j]` is A with row r and column j removed. Terms whose entry is
//! zero are recorded as skipped and never recursed into, so choosing the row
//! with the most zeros minimizes the number of recursive branches. The result
//! is independent of the row (or column) chosen.

pub mod config;
pub mod expansion;
pub mod pivot;
pub mod trace;

pub use cofactor_core::{CofactorError, Matrix, TraceError};
pub use config::{BaseCasePolicy, PivotRule, TracerConfig};
pub use expansion::{compute_determinant, minor_matrix, Tracer};
pub use pivot::{choose_best_line, choose_best_row};
pub use trace::{
    Contribution, ExpansionTerm, Explanation, LaplaceExpansion, Line, SarrusTerm, Sign, TraceNode,
};
