//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, and
//! command-line flags override whatever the file sets.
//!
//! ```yaml
//! format: html
//! tracer:
//!   base_cases: uniform
//!   pivot: most-zeros-line
//!   max_dimension: 8
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use cofactor_tracer::TracerConfig;

/// How a trace is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented plain text.
    #[default]
    Text,
    /// Nested collapsible HTML fragment.
    Html,
    /// The raw trace tree as pretty-printed JSON.
    Json,
}

/// Settings loaded from a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Tracer settings.
    pub tracer: TracerConfig,
    /// Default output format for `det`.
    pub format: OutputFormat,
}

/// Load the configuration file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}
