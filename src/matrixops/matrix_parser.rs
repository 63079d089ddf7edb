//! # Matrix Literal Parser Module
//!
//! Turns nested array literal text like `[[1, 2], [3.5, -4]]` into a
//! `Matrix`. This is a small dedicated recursive parser over `[`, `]`, `,`
//! and floating point numbers - user text is never evaluated as code, which
//! removes the arbitrary-code-execution risk of a generic evaluation
//! mechanism entirely.
//!
//! Malformed literals fail with `CalcError::Parse`; well-formed literals with
//! ragged rows fail with `CalcError::DimensionMismatch` from the `Matrix`
//! constructor.

use crate::errors::CalcError;
use crate::matrixops::dense_matrix::Matrix;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::multispace0,
    multi::separated_list0,
    number::complete::double,
    sequence::delimited,
};

fn parse_number(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0).parse(input)
}

/// One row: `[1, 2, 3]`
fn parse_row(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        delimited(multispace0, tag("["), multispace0),
        separated_list0(tag(","), parse_number),
        delimited(multispace0, tag("]"), multispace0),
    )
    .parse(input)
}

/// The whole literal: `[[1, 2], [3, 4]]`
fn parse_rows(input: &str) -> IResult<&str, Vec<Vec<f64>>> {
    delimited(
        delimited(multispace0, tag("["), multispace0),
        separated_list0(delimited(multispace0, tag(","), multispace0), parse_row),
        delimited(multispace0, tag("]"), multispace0),
    )
    .parse(input)
}

/// Parses a nested numeric array literal into a matrix.
///
/// # Examples
/// ```rust, ignore
/// let m = parse_matrix_literal("[[1, 2], [3, 4]]").unwrap();
/// assert_eq!(m.rows(), 2);
/// ```
pub fn parse_matrix_literal(input: &str) -> Result<Matrix, CalcError> {
    match parse_rows(input) {
        Ok((rest, rows)) => {
            if !rest.trim().is_empty() {
                return Err(CalcError::Parse(format!(
                    "unexpected trailing input '{}' after matrix literal",
                    rest.trim()
                )));
            }
            Matrix::from_rows(rows)
        }
        Err(_) => Err(CalcError::Parse(format!(
            "invalid matrix literal '{}': expected nested rows like [[1, 2], [3, 4]]",
            input
        ))),
    }
}
