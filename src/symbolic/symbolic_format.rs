//! # Symbolic Formatting Module
//!
//! Rendering of expression trees to text, in two registers:
//!
//! - `sym_to_str` - plain mathematical notation, fully parenthesized. The
//!   output is guaranteed to re-parse into a structurally equal tree, which
//!   is the property the round-trip tests pin down.
//! - `to_latex` - LaTeX markup for the form layer to typeset: `\frac` for
//!   quotients, `\cdot` for products, braced exponents, `\sin`, `\cos`,
//!   `\log`, `e^{..}`.
//!
//! Both renderers are total and deterministic: any valid tree formats without
//! failure, and equal trees format to identical strings.

use crate::symbolic::symbolic_engine::Expr;

/// Wraps a LaTeX fragment in sized brackets when the expression is a sum or
/// difference, so products and powers read unambiguously.
fn latex_group(expr: &Expr) -> String {
    match expr {
        Expr::Add(_, _) | Expr::Sub(_, _) => format!("\\left({}\\right)", expr.to_latex()),
        _ => expr.to_latex(),
    }
}

impl Expr {
    /// Converts the expression to a fully parenthesized human-readable string.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x + 2").unwrap();
    /// assert_eq!(expr.sym_to_str(), "(x) + (2)");
    /// ```
    pub fn sym_to_str(&self) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({}) + ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Sub(lhs, rhs) => format!("({}) - ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Mul(lhs, rhs) => format!("({}) * ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Div(lhs, rhs) => format!("({}) / ({})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Pow(base, exp) => format!("({}^{})", base.sym_to_str(), exp.sym_to_str()),
            Expr::Exp(expr) => format!("exp({})", expr.sym_to_str()),
            Expr::Ln(expr) => format!("ln({})", expr.sym_to_str()),
            Expr::sin(expr) => format!("sin({})", expr.sym_to_str()),
            Expr::cos(expr) => format!("cos({})", expr.sym_to_str()),
        }
    }

    /// Renders the expression as LaTeX markup.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 / 2").unwrap();
    /// assert_eq!(expr.to_latex(), "\\frac{x^{2}}{2}");
    /// ```
    pub fn to_latex(&self) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("{} + {}", lhs.to_latex(), rhs.to_latex()),
            Expr::Sub(lhs, rhs) => format!("{} - {}", lhs.to_latex(), latex_group(rhs)),
            Expr::Mul(lhs, rhs) => {
                format!("{} \\cdot {}", latex_group(lhs), latex_group(rhs))
            }
            Expr::Div(lhs, rhs) => {
                format!("\\frac{{{}}}{{{}}}", lhs.to_latex(), rhs.to_latex())
            }
            Expr::Pow(base, exp) => {
                let base_str = match base.as_ref() {
                    Expr::Var(_) => base.to_latex(),
                    Expr::Const(c) if *c >= 0.0 => base.to_latex(),
                    _ => format!("\\left({}\\right)", base.to_latex()),
                };
                format!("{}^{{{}}}", base_str, exp.to_latex())
            }
            Expr::Exp(expr) => format!("e^{{{}}}", expr.to_latex()),
            Expr::Ln(expr) => format!("\\log\\left({}\\right)", expr.to_latex()),
            Expr::sin(expr) => format!("\\sin\\left({}\\right)", expr.to_latex()),
            Expr::cos(expr) => format!("\\cos\\left({}\\right)", expr.to_latex()),
        }
    }
}
