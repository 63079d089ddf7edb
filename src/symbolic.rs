#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "x^2 * log(x + y)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) defines the symbolic expression tree
/// 2) provides substitution, variable queries and operator overloads
/// 3) is extended by the sibling modules with parsing, differentiation,
///    integration, simplification and formatting
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "x^2 + exp(y)";
/// // here you've got symbolic expression
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // differentiate with respect to x and y
/// let df_dx = parsed_expression.diff("x");
/// let df_dy = parsed_expression.diff("y");
/// println!("df_dx = {}, df_dy = {}", df_dx, df_dy);
/// // evaluate the expression directly
/// let res = parsed_expression.eval_expression(vec!["x", "y"], &[1.0, 2.0]);
/// println!("res = {}", res);
/// ```
pub mod symbolic_engine;
/// Analytical differentiation and direct numeric evaluation of expressions.
pub mod symbolic_engine_derivatives;
/// Indefinite (table + linearity) and definite (fundamental theorem of
/// calculus) integration.
pub mod symbolic_integration;
/// Constant folding and algebraic identity simplification.
pub mod symbolic_simplify;
/// Rendering of expressions to plain text and LaTeX markup.
pub mod symbolic_format;
/// bracket-aware text scanning helpers shared by the parser
pub mod utils;
