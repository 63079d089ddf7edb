//! a module turns a String expression into a symbolic expression
//!
//! Recursive descent by operator scanning: the splitting operator for the
//! current precedence level is located outside all brackets, the text is cut
//! at that point and both halves are parsed recursively. `+ -` and `* /`
//! split at their rightmost top-level occurrence (left associativity), `^`
//! splits at its leftmost occurrence (right associativity). What remains
//! after all operator levels is a function call, a bracketed group, a numeric
//! literal or a variable name.
//!
//! The grammar recognizes the function names `sin`, `cos`, `exp`, `log`
//! (natural logarithm, `ln` accepted as an alias) applied to one bracketed
//! argument. `**` is accepted as an alias for `^` and is normalized away
//! before parsing. Implicit multiplication (`2x`, `xy`) is not supported:
//! `2x` is a parse error and `xy` is a single variable named "xy".
//!
//! Parsing is pure: the same input text always yields a structurally equal
//! tree, and malformed input always yields `CalcError::Parse`.
//!
//! # Example
//! ```rust, ignore
//! use symcalc::symbolic::symbolic_engine::Expr;
//! let parsed = Expr::parse_expression("x^2 + sin(y)").unwrap();
//! println!("parsed: {}", parsed);
//! ```

use crate::errors::CalcError;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    find_leftmost_operator_outside_brackets, find_matching_bracket,
    find_rightmost_operator_outside_brackets,
};

/// Strips whitespace and rewrites the `**` power alias to `^`.
fn normalize(input: &str) -> String {
    let without_ws: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    without_ws.replace("**", "^")
}

/// Verifies every `(` has a matching `)` before any recursive splitting runs.
fn check_brackets(input: &str) -> Result<(), CalcError> {
    let mut depth: i32 = 0;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(CalcError::Parse(format!(
                        "unbalanced brackets in '{}'",
                        input
                    )));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(CalcError::Parse(format!(
            "unbalanced brackets in '{}'",
            input
        )));
    }
    Ok(())
}

fn parse_function_name(name: &str, inner: Expr) -> Result<Expr, CalcError> {
    match name {
        "sin" => Ok(Expr::sin(inner.boxed())),
        "cos" => Ok(Expr::cos(inner.boxed())),
        "exp" => Ok(Expr::Exp(inner.boxed())),
        "log" | "ln" => Ok(Expr::Ln(inner.boxed())),
        _ => Err(CalcError::Parse(format!("unknown function '{}'", name))),
    }
}

fn parse_expression_rec(input: &str) -> Result<Expr, CalcError> {
    if input.is_empty() {
        return Err(CalcError::Parse("empty expression".to_string()));
    }

    // addition and subtraction, lowest precedence
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = &input[..pos];
        let right = &input[pos + 1..];
        if right.is_empty() {
            return Err(CalcError::Parse(format!(
                "missing right operand for '{}' in '{}'",
                op, input
            )));
        }
        let lhs = parse_expression_rec(left)?;
        let rhs = parse_expression_rec(right)?;
        return match op {
            '+' => Ok(Expr::Add(lhs.boxed(), rhs.boxed())),
            '-' => Ok(Expr::Sub(lhs.boxed(), rhs.boxed())),
            _ => unreachable!(),
        };
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = &input[..pos];
        let right = &input[pos + 1..];
        if right.is_empty() {
            return Err(CalcError::Parse(format!(
                "missing right operand for '{}' in '{}'",
                op, input
            )));
        }
        let lhs = parse_expression_rec(left)?;
        let rhs = parse_expression_rec(right)?;
        return match op {
            '*' => Ok(Expr::Mul(lhs.boxed(), rhs.boxed())),
            '/' => Ok(Expr::Div(lhs.boxed(), rhs.boxed())),
            _ => unreachable!(),
        };
    }

    // power, right-associative
    if let Some(pos) = find_leftmost_operator_outside_brackets(input, '^') {
        let base = &input[..pos];
        let exponent = &input[pos + 1..];
        if exponent.is_empty() {
            return Err(CalcError::Parse(format!(
                "missing exponent in '{}'",
                input
            )));
        }
        let base_expr = parse_expression_rec(base)?;
        let exponent_expr = parse_expression_rec(exponent)?;
        return Ok(Expr::Pow(base_expr.boxed(), exponent_expr.boxed()));
    }

    // numeric literal, including a signed one like "-2.5"
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }

    // unary minus over a whole product/power chain
    if let Some(rest) = input.strip_prefix('-') {
        let inner = parse_expression_rec(rest)?;
        return Ok(Expr::Mul(Box::new(Expr::Const(-1.0)), inner.boxed()));
    }

    // function call: a name directly followed by a bracketed argument that
    // closes at the end of the input
    if input.ends_with(')') {
        if let Some(open) = input.find('(') {
            let name = &input[..open];
            if find_matching_bracket(input, open) == Some(input.len() - 1) {
                let inner = parse_expression_rec(&input[open + 1..input.len() - 1])?;
                if name.is_empty() {
                    // the whole expression is in brackets
                    return Ok(inner);
                }
                if name.chars().all(char::is_alphabetic) {
                    return parse_function_name(name, inner);
                }
            }
        }
    }

    // variable name
    if input.chars().next().is_some_and(char::is_alphabetic)
        && input.chars().all(|c| c.is_alphanumeric() || c == '_')
    {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(CalcError::Parse(format!("unrecognized token '{}'", input)))
}

impl Expr {
    /// Parses a textual mathematical expression into a symbolic tree.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 * log(x + y)").unwrap();
    /// ```
    pub fn parse_expression(input: &str) -> Result<Expr, CalcError> {
        let normalized = normalize(input);
        // operator scanning slices the text by byte position, so the
        // grammar is restricted to ASCII up front
        if !normalized.is_ascii() {
            return Err(CalcError::Parse(format!(
                "expression '{}' contains non-ASCII characters",
                input
            )));
        }
        check_brackets(&normalized)?;
        parse_expression_rec(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exponential() {
        let expr = Expr::parse_expression("exp(x)").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_constant() {
        let expr = Expr::parse_expression("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_negative_constant() {
        let expr = Expr::parse_expression("-2.5").unwrap();
        assert_eq!(expr, Expr::Const(-2.5));
    }

    #[test]
    fn test_parse_variable() {
        let expr = Expr::parse_expression("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = Expr::parse_expression("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction_left_associative() {
        // a - b - c must parse as (a - b) - c
        let expr = Expr::parse_expression("a - b - c").unwrap();
        let a = Box::new(Expr::Var("a".to_string()));
        let b = Box::new(Expr::Var("b".to_string()));
        let c = Box::new(Expr::Var("c".to_string()));
        assert_eq!(expr, Expr::Sub(Box::new(Expr::Sub(a, b)), c));
    }

    #[test]
    fn test_parse_multiplication() {
        let expr = Expr::parse_expression("x * 2").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_division() {
        let expr = Expr::parse_expression("x / 2").unwrap();
        assert_eq!(
            expr,
            Expr::Div(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = Expr::parse_expression("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_double_star_power_alias() {
        assert_eq!(
            Expr::parse_expression("x**2").unwrap(),
            Expr::parse_expression("x^2").unwrap()
        );
    }

    #[test]
    fn test_parse_power_right_associative() {
        // 2^3^2 must parse as 2^(3^2)
        let expr = Expr::parse_expression("2^3^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Const(3.0)),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_parse_logarithm_aliases() {
        let expr = Expr::parse_expression("log(x)").unwrap();
        assert_eq!(expr, Expr::Ln(Box::new(Expr::Var("x".to_string()))));
        assert_eq!(expr, Expr::parse_expression("ln(x)").unwrap());
    }

    #[test]
    fn test_parse_expression_with_brackets() {
        let expr = Expr::parse_expression("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("z".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_complex_expression() {
        let expr = Expr::parse_expression("(x + y) * (z - 2) / exp(w)").unwrap();
        let x = Box::new(Expr::Var("x".to_string()));
        let y = Box::new(Expr::Var("y".to_string()));
        let z = Box::new(Expr::Var("z".to_string()));
        let w = Box::new(Expr::Var("w".to_string()));
        let c = Box::new(Expr::Const(2.0));
        let x_plus_y = Box::new(Expr::Add(x, y));
        let z_minus_c = Box::new(Expr::Sub(z, c));
        let e = Box::new(Expr::Exp(w));
        let res = Expr::Div(Box::new(Expr::Mul(x_plus_y, z_minus_c)), e);
        assert_eq!(expr, res);
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = Expr::parse_expression("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_minus_after_operator_is_a_sign() {
        let expr = Expr::parse_expression("2 * -3").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(Box::new(Expr::Const(2.0)), Box::new(Expr::Const(-3.0)))
        );
    }

    #[test]
    fn test_invalid_expression() {
        assert!(matches!(
            Expr::parse_expression("(x +"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(matches!(
            Expr::parse_expression("(x + y"),
            Err(CalcError::Parse(_))
        ));
        assert!(matches!(
            Expr::parse_expression("x + y)"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_function_rejected() {
        assert!(matches!(
            Expr::parse_expression("sinh(x)"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_implicit_multiplication_rejected() {
        assert!(matches!(
            Expr::parse_expression("2x"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_multi_letter_identifier_is_one_variable() {
        let expr = Expr::parse_expression("xy").unwrap();
        assert_eq!(expr, Expr::Var("xy".to_string()));
    }

    #[test]
    fn test_multiple_addition() {
        let result = Expr::parse_expression("x^2 - x - 1").unwrap();
        let x = Box::new(Expr::Var("x".to_string()));
        let to_check =
            Expr::Pow(x.clone(), Box::new(Expr::Const(2.0))) - *x - Expr::Const(1.0);
        assert_eq!(result, to_check);
    }

    #[test]
    fn test_parse_nested_trig() {
        let expr = Expr::parse_expression("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_non_ascii_input_rejected() {
        assert!(matches!(
            Expr::parse_expression("x + π"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = Expr::parse_expression("sin(x) + x^2/3").unwrap();
        let b = Expr::parse_expression("sin(x) + x^2/3").unwrap();
        assert_eq!(a, b);
    }
}
