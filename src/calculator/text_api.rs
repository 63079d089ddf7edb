//! # Text API Module
//!
//! The calculator's outward-facing surface: every function takes the raw
//! strings the form layer extracted from a request and returns either a
//! rendered result (LaTeX for calculus, a plain grid for matrices) or a
//! typed `CalcError` the form layer turns into a user-facing message.
//!
//! Calculus results are simplified before rendering so the output reads like
//! a hand-written answer rather than a raw rule application.

use crate::calculator::arithmetic;
use crate::errors::CalcError;
use crate::matrixops::matrix_parser::parse_matrix_literal;
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, info};
use std::fmt;

/// Result of `integrate_text`: a rendered antiderivative for the indefinite
/// form, a number for the definite form.
#[derive(Clone, Debug, PartialEq)]
pub enum IntegralResult {
    Indefinite(String),
    Definite(f64),
}

impl fmt::Display for IntegralResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegralResult::Indefinite(latex) => write!(f, "{}", latex),
            IntegralResult::Definite(value) => write!(f, "{}", value),
        }
    }
}

/// Arithmetic over form inputs; thin re-export point so the form layer only
/// needs this module.
pub fn arithmetic_text(operation: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    arithmetic::apply(operation, a, b)
}

/// Differentiates the expression text with respect to `variable` and returns
/// the LaTeX rendering of the simplified derivative.
pub fn differentiate_text(expr: &str, variable: &str) -> Result<String, CalcError> {
    debug!("differentiate '{}' with respect to '{}'", expr, variable);
    let parsed = Expr::parse_expression(expr)?;
    let derivative = parsed.diff(variable).simplify();
    info!("d/d{} [{}] = {}", variable, expr, derivative);
    Ok(derivative.to_latex())
}

/// Integrates the expression text with respect to `variable`.
///
/// Without bounds the result is the LaTeX rendering of the simplified
/// antiderivative (no constant of integration); with `(lower, upper)` bounds
/// the antiderivative is evaluated at both bounds and the number
/// F(upper) - F(lower) is returned.
pub fn integrate_text(
    expr: &str,
    variable: &str,
    bounds: Option<(f64, f64)>,
) -> Result<IntegralResult, CalcError> {
    debug!(
        "integrate '{}' with respect to '{}', bounds {:?}",
        expr, variable, bounds
    );
    let parsed = Expr::parse_expression(expr)?;
    match bounds {
        None => {
            let antiderivative = parsed.integrate(variable)?.simplify();
            info!("∫ {} d{} = {}", expr, variable, antiderivative);
            Ok(IntegralResult::Indefinite(antiderivative.to_latex()))
        }
        Some((lower, upper)) => {
            let value = parsed.definite_integrate(variable, lower, upper)?;
            info!("∫ {} d{} over [{}, {}] = {}", expr, variable, lower, upper, value);
            Ok(IntegralResult::Definite(value))
        }
    }
}

/// Sum of two matrix literals, rendered as a grid.
pub fn matrix_sum_text(first: &str, second: &str) -> Result<String, CalcError> {
    debug!("matrix sum of '{}' and '{}'", first, second);
    let a = parse_matrix_literal(first)?;
    let b = parse_matrix_literal(second)?;
    Ok(a.add(&b)?.render())
}

/// Product of a matrix literal with either a scalar or a second matrix
/// literal. The operand is a scalar when it parses as a plain number,
/// otherwise it must be a matrix literal.
pub fn matrix_product_text(matrix: &str, operand: &str) -> Result<String, CalcError> {
    debug!("matrix product of '{}' and '{}'", matrix, operand);
    let a = parse_matrix_literal(matrix)?;
    if let Ok(scalar) = operand.trim().parse::<f64>() {
        return Ok(a.scale(scalar).render());
    }
    let b = parse_matrix_literal(operand)?;
    Ok(a.multiply(&b)?.render())
}

/// Transpose of a matrix literal, rendered as a grid.
pub fn matrix_transpose_text(matrix: &str) -> Result<String, CalcError> {
    debug!("matrix transpose of '{}'", matrix);
    let a = parse_matrix_literal(matrix)?;
    Ok(a.transpose().render())
}

/// Inverse of a square matrix literal, rendered as a grid.
pub fn matrix_inverse_text(matrix: &str) -> Result<String, CalcError> {
    debug!("matrix inverse of '{}'", matrix);
    let a = parse_matrix_literal(matrix)?;
    Ok(a.inverse()?.render())
}

/// Non-negative integer power of a square matrix literal, rendered as a
/// grid. Exponent text that is not an integer is `InvalidExponent`.
pub fn matrix_power_text(matrix: &str, exponent: &str) -> Result<String, CalcError> {
    debug!("matrix power of '{}' to '{}'", matrix, exponent);
    let a = parse_matrix_literal(matrix)?;
    let exponent: i64 = exponent.trim().parse().map_err(|_| {
        CalcError::InvalidExponent(format!(
            "'{}' is not an integer exponent",
            exponent.trim()
        ))
    })?;
    Ok(a.pow(exponent)?.render())
}
