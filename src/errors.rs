//! # Error Types Module
//!
//! One crate-wide error enum covering every failure the calculator core can
//! report. Each variant carries a human-readable message suitable for direct
//! display by the form layer; the variant itself is the distinguishable error
//! kind the caller can match on.
//!
//! No operation in this crate panics on user input - every failure path is a
//! `CalcError` value.

use thiserror::Error;

/// Typed error returned by every fallible operation of the calculator core.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// Malformed expression or matrix literal text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Operation name received from the form layer is not recognized.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Expression does not reduce to a linear combination of table integrals.
    #[error("cannot integrate: {0}")]
    UnsupportedIntegral(String),

    /// Numeric evaluation is undefined at the requested point.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Matrix operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Operation is defined only for square matrices.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Square matrix with zero determinant has no inverse.
    #[error("matrix is singular, determinant is 0")]
    SingularMatrix,

    /// Matrix power requires a non-negative integer exponent.
    #[error("invalid exponent: {0}")]
    InvalidExponent(String),

    /// Division by zero is not permitted.
    #[error("division by 0 is not permitted")]
    DivisionByZero,
}
