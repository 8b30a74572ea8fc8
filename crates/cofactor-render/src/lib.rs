//! # cofactor-render — Trace Renderers
//!
//! Walks a [`TraceNode`] and produces a human-readable explanation. The
//! tracer knows nothing about this crate; renderers only read the trace
//! data shape.
//!
//! - [`TextRenderer`]: indented plain text for terminals and logs.
//! - [`HtmlRenderer`]: nested `<details>` blocks with `<table>` matrices,
//!   ready to drop into a page that styles `step-block`, `matrix-table`, and
//!   `minor-matrix`.
//!
//! Positions are printed 1-based (`a_12`, `M_12`, "row 1") as in textbook
//! notation; the trace itself stores zero-based indices.

pub mod format;
pub mod html;
pub mod text;

use cofactor_tracer::TraceNode;

pub use format::{format_number, matrix_grid};
pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// A presentation of a determinant trace.
pub trait Render {
    /// Render the full explanation of `trace`, ending with the final value.
    fn render(&self, trace: &TraceNode) -> String;
}
