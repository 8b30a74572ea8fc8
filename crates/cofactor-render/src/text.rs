//! # Plain-Text Renderer
//!
//! Indented step-by-step text. Each recursion level indents two spaces.

use cofactor_core::Matrix;
use cofactor_tracer::{
    Contribution, ExpansionTerm, Explanation, LaplaceExpansion, Line, SarrusTerm, Sign, TraceNode,
};

use crate::format::{format_number, matrix_grid};
use crate::Render;

/// Renders a trace as indented plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(&self, trace: &TraceNode) -> String {
        let mut out = TextOut::default();
        out.node(trace);
        out.line(&format!("det(A) = {}", format_number(trace.determinant)));
        out.buf
    }
}

/// 1-based entry label: `a_12`, or `a_10,3` once an index has two digits.
pub(crate) fn label(prefix: &str, row: usize, column: usize) -> String {
    let (i, j) = (row + 1, column + 1);
    if i < 10 && j < 10 {
        format!("{prefix}_{i}{j}")
    } else {
        format!("{prefix}_{i},{j}")
    }
}

/// The cofactor-sum formula for an expansion line, 1-based.
pub(crate) fn expansion_formula(line: Line) -> String {
    match line {
        Line::Row(r) => {
            let i = r + 1;
            format!("det = Σ_j (-1)^({i}+j) · a_{i}j · det(M_{i}j)")
        }
        Line::Column(c) => {
            let j = c + 1;
            format!("det = Σ_i (-1)^(i+{j}) · a_i{j} · det(M_i{j})")
        }
    }
}

pub(crate) fn line_name(line: Line) -> String {
    match line {
        Line::Row(r) => format!("row {} (index {r})", r + 1),
        Line::Column(c) => format!("column {} (index {c})", c + 1),
    }
}

pub(crate) fn sign_factor(sign: Sign) -> &'static str {
    match sign {
        Sign::Plus => "1",
        Sign::Minus => "-1",
    }
}

pub(crate) fn sarrus_rows(terms: &[SarrusTerm; 3]) -> Vec<String> {
    terms
        .iter()
        .enumerate()
        .map(|(k, t)| {
            let factors = t.factors.map(format_number).join("·");
            format!("{}) {factors} = {}", k + 1, format_number(t.product))
        })
        .collect()
}

pub(crate) fn sum_expression(terms: &[SarrusTerm; 3]) -> String {
    terms
        .iter()
        .map(|t| format_number(t.product))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[derive(Default)]
struct TextOut {
    buf: String,
    indent: usize,
}

impl TextOut {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn grid(&mut self, matrix: &Matrix) {
        self.nested(|out| {
            for row in matrix_grid(matrix) {
                out.line(&row);
            }
        });
    }

    fn node(&mut self, node: &TraceNode) {
        match &node.explanation {
            Explanation::Scalar { value } => {
                let v = format_number(*value);
                self.line(&format!("det([{v}]) = {v}"));
            }
            Explanation::Direct { a, b, c, d, ad, bc } => {
                let f = |x: &f64| format_number(*x);
                self.line(&format!(
                    "2x2 determinant = a·d - b·c = {}·{} - {}·{} = {} - {} = {}",
                    f(a),
                    f(d),
                    f(b),
                    f(c),
                    f(ad),
                    f(bc),
                    f(&node.determinant),
                ));
            }
            Explanation::Sarrus {
                matrix,
                positives,
                negatives,
                positive_sum,
                negative_sum,
            } => {
                self.line("3x3 determinant (rule of Sarrus):");
                self.grid(matrix);
                self.line("Positive terms (a·e·i, b·f·g, c·d·h):");
                self.nested(|out| {
                    for row in sarrus_rows(positives) {
                        out.line(&row);
                    }
                    out.line(&format!(
                        "Sum of positives = {} = {}",
                        sum_expression(positives),
                        format_number(*positive_sum)
                    ));
                });
                self.line("Negative terms (c·e·g, a·f·h, b·d·i):");
                self.nested(|out| {
                    for row in sarrus_rows(negatives) {
                        out.line(&row);
                    }
                    out.line(&format!(
                        "Sum of negatives = {} = {}",
                        sum_expression(negatives),
                        format_number(*negative_sum)
                    ));
                });
                self.line(&format!(
                    "Determinant = positives - negatives = {} - {} = {}",
                    format_number(*positive_sum),
                    format_number(*negative_sum),
                    format_number(node.determinant)
                ));
            }
            Explanation::Laplace(expansion) => self.laplace(expansion),
        }
    }

    fn laplace(&mut self, expansion: &LaplaceExpansion) {
        self.line(&format!(
            "Laplace expansion along {}:",
            line_name(expansion.line)
        ));
        self.line("Matrix:");
        self.grid(&expansion.matrix);
        self.line(&format!("Expansion: {}", expansion_formula(expansion.line)));

        for term in &expansion.terms {
            match term {
                ExpansionTerm::Skipped { row, column } => self.line(&format!(
                    "{} = 0 -> contribution = 0 (skipped)",
                    label("a", *row, *column)
                )),
                ExpansionTerm::Contribution(c) => self.contribution(c),
            }
        }

        self.line(&format!(
            "Accumulated at this level = {}",
            format_number(expansion.accumulated)
        ));
    }

    fn contribution(&mut self, c: &Contribution) {
        let minor = label("M", c.row, c.column);
        self.line(&format!(
            "Contribution of {} = {} -> term = {} {}·det({minor})",
            label("a", c.row, c.column),
            format_number(c.entry),
            c.sign,
            format_number(c.entry),
        ));
        self.nested(|out| {
            out.line(&format!("Minor {minor}:"));
            out.grid(&c.minor);
            out.line(&format!(
                "Cofactor sign: (-1)^({}+{}) = {}",
                c.row + 1,
                c.column + 1,
                sign_factor(c.sign)
            ));
            out.line(&format!("det({minor}):"));
            out.nested(|out| out.node(&c.minor_trace));
            out.line(&format!(
                "Term = {} × {} × ({}) = {}",
                sign_factor(c.sign),
                format_number(c.entry),
                format_number(c.minor_trace.determinant),
                format_number(c.partial)
            ));
        });
    }
}
