//! # HTML Renderer
//!
//! Produces an HTML fragment: one `step-block` div per step, one
//! `<details open>` per nonzero cofactor term with the minor's explanation
//! nested inside, and zero terms as closed, empty `<details>`. No page chrome,
//! no styles, no scripts.

use cofactor_core::Matrix;
use cofactor_tracer::{Contribution, ExpansionTerm, Explanation, LaplaceExpansion, TraceNode};

use crate::format::format_number;
use crate::text::{expansion_formula, label, line_name, sarrus_rows, sign_factor, sum_expression};
use crate::Render;

/// Renders a trace as nested, collapsible HTML.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Class of the top-level matrix table.
    pub matrix_class: String,
    /// Class of every nested minor table.
    pub minor_class: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            matrix_class: "matrix-table".to_string(),
            minor_class: "minor-matrix".to_string(),
        }
    }
}

impl Render for HtmlRenderer {
    fn render(&self, trace: &TraceNode) -> String {
        let mut html = String::new();
        self.node(&mut html, trace, true);
        html.push_str(&format!(
            "<div class=\"final-result\">Final determinant: <strong>{}</strong></div>",
            format_number(trace.determinant)
        ));
        html
    }
}

impl HtmlRenderer {
    /// A `<table>` of the matrix entries.
    pub fn table(&self, matrix: &Matrix, class: &str) -> String {
        let mut html = format!("<table class=\"{class}\">");
        for row in matrix.rows() {
            html.push_str("<tr>");
            for v in row {
                html.push_str(&format!("<td>{}</td>", format_number(*v)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }

    fn node(&self, html: &mut String, node: &TraceNode, top: bool) {
        match &node.explanation {
            Explanation::Scalar { value } => {
                let v = format_number(*value);
                step(html, &format!("det( [{v}] ) = {v}"));
            }
            Explanation::Direct { a, b, c, d, ad, bc } => step(
                html,
                &format!(
                    "2×2 determinant = <strong>{}·{} - {}·{}</strong> = {} - {} = <strong>{}</strong>",
                    format_number(*a),
                    format_number(*d),
                    format_number(*b),
                    format_number(*c),
                    format_number(*ad),
                    format_number(*bc),
                    format_number(node.determinant),
                ),
            ),
            Explanation::Sarrus {
                matrix,
                positives,
                negatives,
                positive_sum,
                negative_sum,
            } => {
                step(html, "3×3 determinant (rule of Sarrus):");
                step(
                    html,
                    &format!("3×3 matrix:<br>{}", self.table(matrix, self.class(top))),
                );
                for (title, terms, sum, kind) in [
                    ("Positive terms (a·e·i, b·f·g, c·d·h)", positives, positive_sum, "positives"),
                    ("Negative terms (c·e·g, a·f·h, b·d·i)", negatives, negative_sum, "negatives"),
                ] {
                    let mut block = format!("{title}:<br>");
                    for row in sarrus_rows(terms) {
                        block.push_str(&format!("&nbsp;&nbsp;{row}<br>"));
                    }
                    block.push_str(&format!(
                        "&nbsp;&nbsp;Sum of {kind} = {} = <strong>{}</strong>",
                        sum_expression(terms),
                        format_number(*sum)
                    ));
                    step(html, &block);
                }
                step(
                    html,
                    &format!(
                        "Determinant = positives - negatives = {} - {} = <strong>{}</strong>",
                        format_number(*positive_sum),
                        format_number(*negative_sum),
                        format_number(node.determinant)
                    ),
                );
            }
            Explanation::Laplace(expansion) => self.laplace(html, expansion, top),
        }
    }

    fn laplace(&self, html: &mut String, expansion: &LaplaceExpansion, top: bool) {
        step(
            html,
            &format!("Laplace expansion along {}:", line_name(expansion.line)),
        );
        step(
            html,
            &format!(
                "Matrix:<br>{}",
                self.table(&expansion.matrix, self.class(top))
            ),
        );
        step(
            html,
            &format!("Expansion: {}", expansion_formula(expansion.line)),
        );

        for term in &expansion.terms {
            match term {
                ExpansionTerm::Skipped { row, column } => html.push_str(&format!(
                    "<details><summary>{} = 0 → contribution = 0 (skipped)</summary></details>",
                    label("a", *row, *column)
                )),
                ExpansionTerm::Contribution(c) => self.contribution(html, c),
            }
        }

        step(
            html,
            &format!(
                "<strong>Accumulated at this level = {}</strong>",
                format_number(expansion.accumulated)
            ),
        );
    }

    fn contribution(&self, html: &mut String, c: &Contribution) {
        let minor = label("M", c.row, c.column);
        html.push_str(&format!(
            "<details open><summary>Contribution of {} = {} → term = {} {}·det({minor})</summary>",
            label("a", c.row, c.column),
            format_number(c.entry),
            c.sign,
            format_number(c.entry),
        ));
        html.push_str("<div style=\"margin-left:12px;\">");
        step(
            html,
            &format!(
                "Minor {minor}:<br>{}",
                self.table(&c.minor, &self.minor_class)
            ),
        );
        step(
            html,
            &format!(
                "Cofactor sign: (-1)^({}+{}) = {}",
                c.row + 1,
                c.column + 1,
                sign_factor(c.sign)
            ),
        );

        let mut nested = String::new();
        self.node(&mut nested, &c.minor_trace, false);
        step(
            html,
            &format!("det({minor}) = <div style=\"margin-left:8px;\">{nested}</div>"),
        );
        step(
            html,
            &format!(
                "Term = {} × {} × ({}) = <strong>{}</strong>",
                sign_factor(c.sign),
                format_number(c.entry),
                format_number(c.minor_trace.determinant),
                format_number(c.partial)
            ),
        );
        html.push_str("</div></details>");
    }

    fn class(&self, top: bool) -> &str {
        if top {
            &self.matrix_class
        } else {
            &self.minor_class
        }
    }
}

fn step(html: &mut String, body: &str) {
    html.push_str("<div class=\"step-block\">");
    html.push_str(body);
    html.push_str("</div>");
}
