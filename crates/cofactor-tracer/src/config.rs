//! # Tracer Configuration
//!
//! [`TracerConfig`] is deserializable with every field defaulted, so a YAML
//! file naming only the settings it cares about is valid:
//!
//! ```yaml
//! base_cases: uniform
//! max_dimension: 8
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which dimensions are evaluated by a closed formula instead of expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCasePolicy {
    /// 1x1 entry, 2x2 `a·d − b·c`, 3x3 Sarrus; Laplace expansion from 4x4 up.
    #[default]
    Classic,
    /// Laplace expansion for every dimension ≥ 2, bottoming out at 1x1.
    Uniform,
}

/// How the expansion line is chosen at each recursive level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotRule {
    /// The row with the most zero entries; the first such row wins ties.
    #[default]
    MostZerosRow,
    /// The row or column with the most zero entries. Rows win ties against
    /// columns, and lower indices win ties within rows or columns.
    MostZerosLine,
    /// Always the first row.
    FirstRow,
}

impl PivotRule {
    /// All rules, in declaration order.
    pub const ALL: [PivotRule; 3] = [Self::MostZerosRow, Self::MostZerosLine, Self::FirstRow];

    /// The kebab-case name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MostZerosRow => "most-zeros-row",
            Self::MostZerosLine => "most-zeros-line",
            Self::FirstRow => "first-row",
        }
    }
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| {
                let known = Self::ALL.map(PivotRule::as_str).join(", ");
                format!("unknown pivot rule '{s}' (expected one of: {known})")
            })
    }
}

/// Settings for a [`Tracer`](crate::Tracer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Base-case thresholds.
    pub base_cases: BaseCasePolicy,
    /// Expansion line selection.
    pub pivot: PivotRule,
    /// Reject matrices larger than this. Expansion is factorial in the
    /// dimension, so services exposing the tracer should set a limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dimension: Option<usize>,
}
