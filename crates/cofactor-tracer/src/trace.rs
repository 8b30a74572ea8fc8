//! # Trace Tree
//!
//! The explanation produced for one matrix at one recursion depth. A
//! [`TraceNode`] owns its whole subtree: nested minors are stored by value
//! inside each [`Contribution`], there are no back-references, and nothing is
//! shared between nodes.
//!
//! All types serialize with a `method`/`kind` tag in `snake_case` so a JSON
//! dump can be walked by renderers written in any language.

use std::fmt;

use serde::{Deserialize, Serialize};

use cofactor_core::Matrix;

/// Result of evaluating one matrix: its determinant and how it was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceNode {
    /// Determinant of the matrix this node describes.
    pub determinant: f64,
    /// Ordered record of the steps that produced `determinant`.
    pub explanation: Explanation,
}

/// How a determinant was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Explanation {
    /// 1x1: the determinant is the single entry.
    Scalar {
        /// The entry.
        value: f64,
    },
    /// 2x2 `[[a, b], [c, d]]`: `a·d − b·c`.
    Direct {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        /// `a·d`.
        ad: f64,
        /// `b·c`.
        bc: f64,
    },
    /// 3x3 rule of Sarrus over row-major labels `a..i`.
    Sarrus {
        /// The 3x3 matrix being evaluated.
        matrix: Matrix,
        /// `a·e·i`, `b·f·g`, `c·d·h`.
        positives: [SarrusTerm; 3],
        /// `c·e·g`, `a·f·h`, `b·d·i`.
        negatives: [SarrusTerm; 3],
        positive_sum: f64,
        negative_sum: f64,
    },
    /// Cofactor expansion along one row or column.
    Laplace(LaplaceExpansion),
}

/// One diagonal product in the rule of Sarrus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SarrusTerm {
    pub factors: [f64; 3],
    pub product: f64,
}

impl SarrusTerm {
    pub(crate) fn new(factors: [f64; 3]) -> Self {
        Self {
            factors,
            product: factors[0] * factors[1] * factors[2],
        }
    }
}

/// A single level of Laplace expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaplaceExpansion {
    /// The matrix being expanded.
    pub matrix: Matrix,
    /// The row or column expanded along.
    pub line: Line,
    /// Number of zero entries on `line`, i.e. the number of skipped terms.
    pub zeros: usize,
    /// One term per entry on `line`, in index order.
    pub terms: Vec<ExpansionTerm>,
    /// Sum of all partial products at this level.
    pub accumulated: f64,
}

/// The line a Laplace expansion runs along. Indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl Line {
    /// Zero-based index of the row or column.
    pub fn index(self) -> usize {
        match self {
            Self::Row(i) | Self::Column(i) => i,
        }
    }

    /// `(row, column)` of the `k`-th entry along this line.
    pub fn position(self, k: usize) -> (usize, usize) {
        match self {
            Self::Row(r) => (r, k),
            Self::Column(c) => (k, c),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "row {i}"),
            Self::Column(i) => write!(f, "column {i}"),
        }
    }
}

/// One entry along the expansion line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpansionTerm {
    /// The entry is zero; its contribution is zero and it was not recursed into.
    Skipped { row: usize, column: usize },
    /// A nonzero entry and its fully traced minor.
    Contribution(Box<Contribution>),
}

impl ExpansionTerm {
    /// `(row, column)` of the entry this term covers.
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::Skipped { row, column } => (*row, *column),
            Self::Contribution(c) => (c.row, c.column),
        }
    }

    /// The signed partial product, zero for skipped terms.
    pub fn partial(&self) -> f64 {
        match self {
            Self::Skipped { .. } => 0.0,
            Self::Contribution(c) => c.partial,
        }
    }
}

/// A nonzero entry's contribution: `sign · entry · det(minor)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub row: usize,
    pub column: usize,
    pub entry: f64,
    /// `(-1)^(row + column)`.
    pub sign: Sign,
    /// The matrix with `row` and `column` removed.
    pub minor: Matrix,
    /// Full trace of `minor`.
    pub minor_trace: TraceNode,
    /// `sign · entry · minor_trace.determinant`.
    pub partial: f64,
}

/// Cofactor sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `(-1)^(row + column)`.
    pub fn of(row: usize, column: usize) -> Self {
        if (row + column) % 2 == 0 {
            Self::Plus
        } else {
            Self::Minus
        }
    }

    /// `1.0` or `-1.0`.
    pub fn factor(self) -> f64 {
        match self {
            Self::Plus => 1.0,
            Self::Minus => -1.0,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl TraceNode {
    /// The Laplace expansion at this node, if this node was expanded.
    pub fn expansion(&self) -> Option<&LaplaceExpansion> {
        match &self.explanation {
            Explanation::Laplace(expansion) => Some(expansion),
            _ => None,
        }
    }

    /// Nonzero contributions at this node, in line order.
    pub fn contributions(&self) -> impl Iterator<Item = &Contribution> {
        self.expansion()
            .into_iter()
            .flat_map(|e| e.terms.iter())
            .filter_map(|term| match term {
                ExpansionTerm::Contribution(c) => Some(c.as_ref()),
                ExpansionTerm::Skipped { .. } => None,
            })
    }

    /// Direct child traces (one per nonzero entry on the expansion line).
    pub fn children(&self) -> impl Iterator<Item = &TraceNode> {
        self.contributions().map(|c| &c.minor_trace)
    }

    /// Number of expansion edges on the longest root-to-leaf path.
    ///
    /// Base-case nodes and expansions whose line is entirely zero have depth 0.
    pub fn depth(&self) -> usize {
        self.children()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(TraceNode::node_count).sum::<usize>()
    }
}
