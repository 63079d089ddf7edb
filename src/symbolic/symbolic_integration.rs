//! # Symbolic Integration Module
//!
//! Table-driven indefinite integration plus definite integration through the
//! fundamental theorem of calculus.
//!
//! The integration table covers: constants, `x^n` (n != -1), `x^-1 -> ln(x)`,
//! `sin`, `cos` and `exp` of the integration variable (with a constant linear
//! coefficient), and `ln(x)` in closed form. Linearity distributes the
//! integral over sums and differences and pulls constant factors out of
//! products and divisions.
//!
//! Everything outside the table fails with `CalcError::UnsupportedIntegral`.
//! This is a deliberate scope limit: there is no general symbolic integration
//! algorithm here, no substitution and no integration by parts beyond the
//! closed forms listed above.

use crate::errors::CalcError;
use crate::symbolic::symbolic_engine::Expr;

/// Recognizes `x`, `a*x` and `x*a` with respect to `var`; returns the linear
/// coefficient a.
fn linear_coefficient(expr: &Expr, var: &str) -> Option<f64> {
    match expr {
        Expr::Var(name) if name == var => Some(1.0),
        Expr::Mul(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
            (Expr::Const(a), Expr::Var(name)) if name == var => Some(*a),
            (Expr::Var(name), Expr::Const(a)) if name == var => Some(*a),
            _ => None,
        },
        _ => None,
    }
}

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Main integration method - integrates with respect to a variable.
    /// Returns the indefinite integral (without constant of integration).
    pub fn integrate(&self, var: &str) -> Result<Expr, CalcError> {
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(Expr::Const(2.0)),
                    ) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // ∫ (f + g) dx = ∫ f dx + ∫ g dx
            Expr::Add(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int + rhs_int)
            }

            // ∫ (f - g) dx = ∫ f dx - ∫ g dx
            Expr::Sub(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int - rhs_int)
            }

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var),

            Expr::Div(lhs, rhs) => self.integrate_division(lhs, rhs, var),

            // ∫ x^n dx = x^(n+1)/(n+1) for n ≠ -1
            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            Expr::Exp(expr) => self.integrate_exponential(expr, var),

            Expr::Ln(expr) => self.integrate_logarithm(expr, var),

            Expr::sin(expr) => self.integrate_sin(expr, var),

            Expr::cos(expr) => self.integrate_cos(expr, var),
        }
    }

    /// Constant factors pull out of products; anything else is outside the
    /// table.
    fn integrate_multiplication(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        var: &str,
    ) -> Result<Expr, CalcError> {
        if !lhs.contains_variable(var) {
            let rhs_int = rhs.integrate(var)?;
            return Ok(lhs.clone() * rhs_int);
        }

        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(rhs.clone() * lhs_int);
        }

        Err(CalcError::UnsupportedIntegral(format!(
            "product of two expressions in '{}': {} * {}",
            var, lhs, rhs
        )))
    }

    /// Constant denominators pull out; f'(x)/f(x) is not attempted.
    fn integrate_division(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(lhs_int / rhs.clone());
        }

        // ∫ c/x dx = c*ln(x)
        if !lhs.contains_variable(var) {
            if let Expr::Var(name) = rhs {
                if name == var {
                    return Ok(lhs.clone() * Expr::Ln(Box::new(Expr::Var(var.to_string()))));
                }
            }
        }

        Err(CalcError::UnsupportedIntegral(format!(
            "quotient {} / {}",
            lhs, rhs
        )))
    }

    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ x^n dx where n is constant
        if let (Expr::Var(x), Expr::Const(n)) = (base, exp) {
            if x == var {
                if (*n - (-1.0)).abs() < f64::EPSILON {
                    // ∫ x^(-1) dx = ln(x)
                    return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
                } else {
                    // ∫ x^n dx = x^(n+1)/(n+1)
                    let new_exp = Expr::Const(n + 1.0);
                    let integrated = Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(new_exp.clone()),
                    ) / new_exp;
                    return Ok(integrated);
                }
            }
        }

        // base and exponent both free of the variable: a constant
        if !base.contains_variable(var) && !exp.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(CalcError::UnsupportedIntegral(format!(
            "power ({})^({})",
            base, exp
        )))
    }

    fn integrate_exponential(&self, expr: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ e^(ax) dx = (1/a) * e^(ax), with a = 1 covering ∫ e^x dx
        if let Some(a) = linear_coefficient(expr, var) {
            if a != 0.0 {
                return Ok(Expr::Exp(Box::new(expr.clone())) / Expr::Const(a));
            }
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(CalcError::UnsupportedIntegral(format!("e^({})", expr)))
    }

    fn integrate_logarithm(&self, expr: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ ln(x) dx = x*ln(x) - x
        if let Expr::Var(x) = expr {
            if x == var {
                let x_var = Expr::Var(var.to_string());
                return Ok(x_var.clone() * Expr::Ln(Box::new(x_var.clone())) - x_var);
            }
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(CalcError::UnsupportedIntegral(format!("ln({})", expr)))
    }

    fn integrate_sin(&self, expr: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ sin(ax) dx = -cos(ax)/a
        if let Some(a) = linear_coefficient(expr, var) {
            if a != 0.0 {
                return Ok(Expr::Const(-1.0) * Expr::cos(Box::new(expr.clone()))
                    / Expr::Const(a));
            }
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(CalcError::UnsupportedIntegral(format!("sin({})", expr)))
    }

    fn integrate_cos(&self, expr: &Expr, var: &str) -> Result<Expr, CalcError> {
        // ∫ cos(ax) dx = sin(ax)/a
        if let Some(a) = linear_coefficient(expr, var) {
            if a != 0.0 {
                return Ok(Expr::sin(Box::new(expr.clone())) / Expr::Const(a));
            }
        }

        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        Err(CalcError::UnsupportedIntegral(format!("cos({})", expr)))
    }

    /// Definite integration using the fundamental theorem of calculus:
    /// the indefinite antiderivative F is evaluated at the bounds and the
    /// result is F(upper) - F(lower).
    pub fn definite_integrate(
        &self,
        var: &str,
        lower: f64,
        upper: f64,
    ) -> Result<f64, CalcError> {
        let indefinite = self.integrate(var)?;
        let upper_val = indefinite.eval1D(var, upper);
        if !upper_val.is_finite() {
            return Err(CalcError::Evaluation(format!(
                "antiderivative {} is undefined at upper bound {}",
                indefinite, upper
            )));
        }
        let lower_val = indefinite.eval1D(var, lower);
        if !lower_val.is_finite() {
            return Err(CalcError::Evaluation(format!(
                "antiderivative {} is undefined at lower bound {}",
                indefinite, lower
            )));
        }
        Ok(upper_val - lower_val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn x() -> Expr {
        Expr::Var("x".to_string())
    }

    #[test]
    fn test_integrate_constant() {
        // ∫ 5 dx = 5x
        let result = Expr::Const(5.0).integrate("x").unwrap();
        assert_relative_eq!(result.eval1D("x", 2.0), 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_variable() {
        // ∫ x dx = x²/2
        let result = x().integrate("x").unwrap();
        assert_relative_eq!(result.eval1D("x", 4.0), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_different_variable() {
        // ∫ y dx = y*x (y is treated as constant)
        let expr = Expr::Var("y".to_string());
        let result = expr.integrate("x").unwrap();
        let expected = Expr::Var("y".to_string()) * x();
        assert_eq!(result.simplify(), expected.simplify());
    }

    #[test]
    fn test_integrate_addition() {
        // ∫ (x + 3) dx = x²/2 + 3x
        let expr = x() + Expr::Const(3.0);
        let result = expr.integrate("x").unwrap();
        // 2^2/2 + 3*2 = 2 + 6 = 8
        assert_relative_eq!(result.eval1D("x", 2.0), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_subtraction() {
        // ∫ (x² - x) dx = x³/3 - x²/2
        let expr = x().pow(Expr::Const(2.0)) - x();
        let result = expr.integrate("x").unwrap();
        let x_val: f64 = 3.0;
        let expected = x_val.powi(3) / 3.0 - x_val.powi(2) / 2.0;
        assert_relative_eq!(result.eval1D("x", x_val), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_constant_multiplication() {
        // ∫ 3x dx = 3x²/2
        let expr = Expr::Const(3.0) * x();
        let result = expr.integrate("x").unwrap();
        assert_relative_eq!(result.eval1D("x", 2.0), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_power() {
        // ∫ x³ dx = x⁴/4
        let result = x().pow(Expr::Const(3.0)).integrate("x").unwrap();
        assert_relative_eq!(result.eval1D("x", 2.0), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_reciprocal_is_log() {
        // ∫ x⁻¹ dx = ln(x)
        let result = x().pow(Expr::Const(-1.0)).integrate("x").unwrap();
        assert_eq!(result, Expr::Ln(Box::new(x())));
    }

    #[test]
    fn test_integrate_one_over_x_division_form() {
        // ∫ 1/x dx = ln(x)
        let result = (Expr::Const(1.0) / x()).integrate("x").unwrap();
        let expected: f64 = 3.0_f64.ln();
        assert_relative_eq!(result.eval1D("x", 3.0), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_sin() {
        // ∫ sin(x) dx = -cos(x)
        let result = Expr::sin(x().boxed()).integrate("x").unwrap();
        let x_val: f64 = 1.2;
        assert_relative_eq!(result.eval1D("x", x_val), -x_val.cos(), epsilon = 1e-10);
    }

    #[test]
    fn test_integrate_cos_with_linear_argument() {
        // ∫ cos(2x) dx = sin(2x)/2
        let arg = Expr::Const(2.0) * x();
        let result = Expr::cos(arg.boxed()).integrate("x").unwrap();
        let x_val: f64 = 0.9;
        assert_relative_eq!(
            result.eval1D("x", x_val),
            (2.0 * x_val).sin() / 2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_integrate_exponential() {
        // ∫ e^(2x) dx = e^(2x)/2
        let expr = (Expr::Const(2.0) * x()).exp();
        let result = expr.integrate("x").unwrap();
        let x_val: f64 = 0.5;
        assert_relative_eq!(
            result.eval1D("x", x_val),
            (2.0 * x_val).exp() / 2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_integrate_logarithm() {
        // ∫ ln(x) dx = x*ln(x) - x
        let result = x().ln().integrate("x").unwrap();
        let x_val: f64 = 2.0;
        assert_relative_eq!(
            result.eval1D("x", x_val),
            x_val * x_val.ln() - x_val,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_unsupported_integral_product() {
        // ∫ x*sin(x) dx is outside the table
        let expr = x() * Expr::sin(x().boxed());
        assert!(matches!(
            expr.integrate("x"),
            Err(CalcError::UnsupportedIntegral(_))
        ));
    }

    #[test]
    fn test_unsupported_integral_nested_function() {
        // ∫ sin(x^2) dx is outside the table
        let expr = Expr::sin(x().pow(Expr::Const(2.0)).boxed());
        assert!(matches!(
            expr.integrate("x"),
            Err(CalcError::UnsupportedIntegral(_))
        ));
    }

    #[test]
    fn test_definite_integration_square() {
        // ∫₀³ x² dx = 9
        let expr = x().pow(Expr::Const(2.0));
        let result = expr.definite_integrate("x", 0.0, 3.0).unwrap();
        assert_relative_eq!(result, 9.0, epsilon = 1e-10);
    }

    #[test]
    fn test_definite_integration_sin_half_period() {
        // ∫₀^π sin(x) dx = 2
        let expr = Expr::sin(x().boxed());
        let result = expr.definite_integrate("x", 0.0, PI).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_definite_integration_undefined_at_bound() {
        // ∫ 1/x has antiderivative ln(x), undefined at a non-positive bound
        let expr = Expr::Const(1.0) / x();
        assert!(matches!(
            expr.definite_integrate("x", -1.0, 1.0),
            Err(CalcError::Evaluation(_))
        ));
    }
}
