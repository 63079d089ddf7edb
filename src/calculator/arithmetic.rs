//! # Arithmetic Module
//!
//! The four basic numeric operations and their dispatch by operation name.
//! Division by zero is reported as a typed error value, never a crash, and an
//! operation name the form layer sends that the calculator does not know is
//! `CalcError::UnsupportedOperation`.

use crate::errors::CalcError;
use log::debug;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Division; `b == 0` is a `DivisionByZero` error, not a panic and not an
/// infinity.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}

/// Operation selector as received from the form layer ("add", "subtract",
/// "multiply", "divide").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Dispatches an arithmetic operation by name.
pub fn apply(operation: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    let op = ArithmeticOp::from_str(operation.trim())
        .map_err(|_| CalcError::UnsupportedOperation(operation.trim().to_string()))?;
    debug!("arithmetic: {}({}, {})", op, a, b);
    match op {
        ArithmeticOp::Add => Ok(add(a, b)),
        ArithmeticOp::Subtract => Ok(subtract(a, b)),
        ArithmeticOp::Multiply => Ok(multiply(a, b)),
        ArithmeticOp::Divide => divide(a, b),
    }
}
