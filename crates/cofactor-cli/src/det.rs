//! # Det Subcommand
//!
//! Traces a determinant and prints the explanation in the chosen format.

use anyhow::{Context, Result};
use clap::Args;

use cofactor_render::{HtmlRenderer, Render, TextRenderer};
use cofactor_tracer::{BaseCasePolicy, PivotRule, TraceNode, Tracer, TracerConfig};

use crate::config::{CliConfig, OutputFormat};
use crate::input::MatrixSource;

/// Arguments for the det subcommand.
#[derive(Args, Debug)]
pub struct DetArgs {
    #[command(flatten)]
    pub source: MatrixSource,

    /// Output format. Defaults to the config file value, then text.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expand every dimension down to 1x1 instead of using the
    /// 2x2 and Sarrus formulas.
    #[arg(long)]
    pub uniform: bool,

    /// Pivot rule: most-zeros-row, most-zeros-line, or first-row.
    #[arg(long)]
    pub pivot: Option<PivotRule>,

    /// Refuse matrices larger than this dimension.
    #[arg(long)]
    pub max_dimension: Option<usize>,
}

impl DetArgs {
    /// Merge command-line overrides onto the file configuration.
    pub fn tracer_config(&self, base: &TracerConfig) -> TracerConfig {
        let mut config = base.clone();
        if self.uniform {
            config.base_cases = BaseCasePolicy::Uniform;
        }
        if let Some(pivot) = self.pivot {
            config.pivot = pivot;
        }
        if self.max_dimension.is_some() {
            config.max_dimension = self.max_dimension;
        }
        config
    }
}

/// Execute the det subcommand.
pub fn run_det(args: &DetArgs, config: &CliConfig) -> Result<u8> {
    let matrix = args.source.load()?;
    let tracer = Tracer::new(args.tracer_config(&config.tracer));
    let format = args.format.unwrap_or(config.format);

    tracing::info!(dimension = matrix.dimension(), ?format, "computing determinant");
    let trace = tracer.trace(&matrix)?;
    tracing::info!(determinant = trace.determinant, "determinant computed");

    let output = render_trace(&trace, format)?;
    println!("{}", output.trim_end());
    Ok(0)
}

/// Render `trace` in `format`.
pub fn render_trace(trace: &TraceNode, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextRenderer.render(trace)),
        OutputFormat::Html => Ok(HtmlRenderer::default().render(trace)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(trace).context("failed to serialize trace")
        }
    }
}
