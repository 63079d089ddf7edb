//! # Symbolic Expression Simplification Module
//!
//! Algebraic cleanup applied before results are rendered. The differentiation
//! and integration rules produce raw trees full of structural noise
//! (multiplications by 1, additions of 0, constant subtrees); this module
//! folds them away so the formatted output reads like a hand-written result.
//!
//! ## Simplification Strategy
//!
//! 1. **Constant Folding**: arithmetic on numerical constants is evaluated
//! 2. **Algebraic Identities**: x + 0 = x, x * 1 = x, x * 0 = 0, x^1 = x,
//!    x^0 = 1, 0/x = 0, x - x = 0
//! 3. **Special Values**: sin(0) = 0, cos(0) = 1, exp(0) = 1, ln(1) = 0
//!
//! `simplify_()` performs one bottom-up pass; `simplify()` iterates passes to
//! a fixed point. Transcendental functions of non-trivial constants are left
//! symbolic (exp(2) stays exp(2)) so rendered results keep exact form.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// One bottom-up simplification pass: children first, then the local
    /// rewrite rules for this node.
    pub fn simplify_(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), _) if *a == 0.0 => rhs,
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ => Expr::Add(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ if lhs == rhs => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 0.0 => {
                        Expr::Mul(Box::new(Expr::Const(-1.0)), rhs.boxed())
                    }
                    _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 1.0 => rhs,
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    _ => Expr::Mul(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    // division by a zero constant is left in place so that
                    // numeric evaluation reports the undefined point
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    _ if lhs == rhs && !lhs.is_zero() => Expr::Const(1.0),
                    _ => Expr::Div(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_();
                let exp = exp.simplify_();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    (_, Expr::Const(b)) if *b == 1.0 => base,
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(1.0),
                    (Expr::Const(a), _) if *a == 1.0 => Expr::Const(1.0),
                    _ => Expr::Pow(base.boxed(), exp.boxed()),
                }
            }
            Expr::Exp(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(c) if *c == 0.0 => Expr::Const(1.0),
                    _ => Expr::Exp(expr.boxed()),
                }
            }
            Expr::Ln(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(c) if *c == 1.0 => Expr::Const(0.0),
                    _ => Expr::Ln(expr.boxed()),
                }
            }
            Expr::sin(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(c) if *c == 0.0 => Expr::Const(0.0),
                    _ => Expr::sin(expr.boxed()),
                }
            }
            Expr::cos(expr) => {
                let expr = expr.simplify_();
                match &expr {
                    Expr::Const(c) if *c == 0.0 => Expr::Const(1.0),
                    _ => Expr::cos(expr.boxed()),
                }
            }
        }
    }

    /// Simplifies to a fixed point: passes are applied until the tree stops
    /// changing. The iteration cap only guards against a rewrite cycle.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        for _ in 0..64 {
            let next = current.simplify_();
            if next == current {
                return next;
            }
            current = next;
        }
        current
    }
}
