//! # Matrix Input
//!
//! Exactly one source per invocation: an inline JSON array, a JSON or YAML
//! file, or the built-in worked example. Shape validation happens in
//! `Matrix` deserialization, so a ragged or non-square document fails here
//! with the offending row in the message.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use cofactor_core::Matrix;

/// The 4x4 worked example: a first row with three zeros.
pub const DEMO_MATRIX: [[f64; 4]; 4] = [
    [5.0, 0.0, 0.0, 0.0],
    [3.0, 2.0, -3.0, 2.0],
    [1.0, 4.0, 2.0, 1.0],
    [5.0, 2.0, -4.0, 4.0],
];

/// Where to read the matrix from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct MatrixSource {
    /// Inline matrix as a JSON array of rows, e.g. '[[1,2],[3,4]]'.
    #[arg(long)]
    pub matrix: Option<String>,

    /// Read the matrix from a file (YAML for .yaml/.yml, JSON otherwise).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Use the built-in 4x4 worked example.
    #[arg(long)]
    pub demo: bool,
}

impl MatrixSource {
    /// Resolve the source into a validated matrix.
    pub fn load(&self) -> Result<Matrix> {
        if let Some(inline) = &self.matrix {
            return parse_json(inline).context("invalid --matrix value");
        }
        if let Some(path) = &self.file {
            return load_file(path);
        }
        if self.demo {
            return demo_matrix();
        }
        anyhow::bail!("no matrix given: use --matrix, --file, or --demo")
    }
}

/// The worked example as a `Matrix`.
pub fn demo_matrix() -> Result<Matrix> {
    let rows = DEMO_MATRIX.iter().map(|row| row.to_vec()).collect();
    Ok(Matrix::new(rows)?)
}

fn parse_json(text: &str) -> Result<Matrix> {
    Ok(serde_json::from_str(text)?)
}

fn load_file(path: &Path) -> Result<Matrix> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read matrix file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let matrix: Matrix = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML matrix: {}", path.display()))?
    } else {
        parse_json(&content)
            .with_context(|| format!("failed to parse JSON matrix: {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), "loaded matrix file");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(matrix: Option<&str>, file: Option<PathBuf>, demo: bool) -> MatrixSource {
        MatrixSource {
            matrix: matrix.map(str::to_string),
            file,
            demo,
        }
    }

    #[test]
    fn inline_json_is_parsed() {
        let m = source(Some("[[1, 2], [3, 4]]"), None, false).load().unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn inline_non_square_reports_shape() {
        let err = source(Some("[[1, 2, 3], [4, 5, 6]]"), None, false)
            .load()
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid --matrix value"));
        assert!(message.contains("not square"), "{message}");
    }

    #[test]
    fn inline_empty_is_rejected() {
        assert!(source(Some("[]"), None, false).load().is_err());
    }

    #[test]
    fn demo_is_the_worked_example() {
        let m = source(None, None, true).load().unwrap();
        assert_eq!(m.dimension(), 4);
        assert_eq!(m[(1, 2)], -3.0);
    }

    #[test]
    fn json_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        std::fs::write(&path, "[[2, 0], [1, 3]]").unwrap();
        let m = source(None, Some(path), false).load().unwrap();
        assert_eq!(m.to_rows(), vec![vec![2.0, 0.0], vec![1.0, 3.0]]);
    }

    #[test]
    fn yaml_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.yaml");
        std::fs::write(&path, "- [1, 0, 0]\n- [0, 2, 0]\n- [0, 0, 3]\n").unwrap();
        let m = source(None, Some(path), false).load().unwrap();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m[(2, 2)], 3.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = source(None, Some(PathBuf::from("/nonexistent/m.json")), false)
            .load()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/m.json"));
    }

    #[test]
    fn no_source_is_an_error() {
        assert!(source(None, None, false).load().is_err());
    }
}
