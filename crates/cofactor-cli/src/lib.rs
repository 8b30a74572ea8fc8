//! # cofactor-cli — Command-Line Interface
//!
//! Provides the `cofactor` binary. Argument parsing lives here; the
//! determinant itself is computed by `cofactor-tracer` and presented by
//! `cofactor-render`.
//!
//! ## Subcommands
//!
//! - `cofactor det` — trace a determinant and print the steps.
//! - `cofactor pivot` — show per-line zero counts and the chosen pivot.
//!
//! ```bash
//! cofactor det --demo
//! cofactor det --matrix '[[1,2],[3,4]]' --format json
//! cofactor det --file matrix.yaml --uniform --format html > steps.html
//! cofactor --config cofactor.yaml det --file matrix.json
//! ```

pub mod config;
pub mod det;
pub mod input;
pub mod pivot;

pub use config::{load_config, CliConfig, OutputFormat};
pub use input::{MatrixSource, DEMO_MATRIX};
