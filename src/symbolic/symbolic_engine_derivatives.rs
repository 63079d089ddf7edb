//! # Symbolic Derivatives and Evaluation Module
//!
//! Extends `Expr` with analytical differentiation and direct numeric
//! evaluation.
//!
//! ## Key Methods
//!
//! - `diff(var: &str)` - analytical partial/total derivative
//! - `eval_expression()` - direct evaluation without closure creation
//! - `eval1D()` - one-variable convenience evaluation
//!
//! Differentiation implements the complete rule set for the supported
//! expression grammar:
//! - Power rule: d/dx(f^n) = n*f^(n-1)*f' when n does not depend on x
//! - General exponential rule: d/dx(f^g) = f^g * (g'*ln(f) + g*f'/f)
//!   when the exponent depends on x (defined where f > 0)
//! - Product rule: d/dx(f*g) = f'*g + f*g'
//! - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
//! - Chain rule through exp, ln, sin, cos
//!
//! Derivatives are returned as raw trees; callers simplify and format
//! separately. The numeric agreement of `diff` with finite differences is
//! exercised in symbolic_engine_tests.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a
    /// variable. For multivariable expressions this is the partial derivative.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x^1*1
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // d/dx(f^g) = f^g * (g'*ln(f) + g*f'/f), f > 0 assumed
                    Expr::Mul(
                        Box::new(Expr::Pow(base.clone(), exp.clone())),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                } else {
                    // d/dx(f^n) = n * f^(n-1) * f'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
        }
    } // end of diff

    /// EVALUATION

    /// Evaluates the expression numerically with the given variable bindings.
    ///
    /// A variable without a binding evaluates to NaN, as does any
    /// mathematically undefined operation (ln of a non-positive number,
    /// division by zero and so on) - callers treat a non-finite result as
    /// "undefined at this point".
    pub fn eval_expression(&self, vars: Vec<&str>, values: &[f64]) -> f64 {
        match self {
            Expr::Var(name) => match vars.iter().position(|&x| x == name.as_str()) {
                Some(index) => values[index],
                None => f64::NAN,
            },
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) + rhs.eval_expression(vars, values)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) - rhs.eval_expression(vars, values)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) * rhs.eval_expression(vars, values)
            }
            Expr::Div(lhs, rhs) => {
                let denominator = rhs.eval_expression(vars.clone(), values);
                if denominator == 0.0 {
                    f64::NAN
                } else {
                    lhs.eval_expression(vars, values) / denominator
                }
            }
            Expr::Pow(base, exp) => {
                let base_val = base.eval_expression(vars.clone(), values);
                let exp_val = exp.eval_expression(vars, values);
                base_val.powf(exp_val)
            }
            Expr::Exp(expr) => expr.eval_expression(vars, values).exp(),
            Expr::Ln(expr) => {
                let arg = expr.eval_expression(vars, values);
                if arg <= 0.0 { f64::NAN } else { arg.ln() }
            }
            Expr::sin(expr) => expr.eval_expression(vars, values).sin(),
            Expr::cos(expr) => expr.eval_expression(vars, values).cos(),
        }
    }

    /// One-variable convenience wrapper around eval_expression.
    pub fn eval1D(&self, var: &str, value: f64) -> f64 {
        self.eval_expression(vec![var], &[value])
    }
}
