//! # Dense Matrix Module
//!
//! The `Matrix` value type behind the calculator's matrix operations: a dense
//! rectangular `f64` container stored as a `nalgebra::DMatrix`, with every
//! operation returning a fresh matrix or a typed error. Nothing is mutated in
//! place and nothing panics on user input - shape validation runs before any
//! arithmetic is delegated to nalgebra.
//!
//! ## Operations
//!
//! - `add`, `scale`, `multiply`, `transpose` - elementwise and product
//!   arithmetic with dimension checks
//! - `determinant` - LU elimination with partial pivoting, sign-tracked
//! - `inverse` - Gauss-Jordan elimination on the augmented system
//! - `pow` - non-negative integer powers by exponentiation by squaring
//!
//! ## Singularity test
//!
//! Invertibility of floating matrices cannot use an exact determinant == 0
//! test. The rule used throughout this module: a pivot (and the final
//! determinant) counts as zero when its magnitude is at most
//! `1e-12 * max(1, max|a_ij|)`. Exact-integer inputs like [[1,2],[2,4]]
//! eliminate to a true zero, well-conditioned matrices keep pivots far above
//! the threshold.

use crate::errors::CalcError;
use itertools::Itertools;
use nalgebra::DMatrix;

/// Relative scale factor of the pivot/determinant zero test.
const SINGULARITY_EPS: f64 = 1e-12;

/// Dense 2D matrix of f64 cells. Immutable value type: every operation
/// builds a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    values: DMatrix<f64>,
}

impl Matrix {
    /// Builds a matrix from nested rows. Every row must have the same number
    /// of entries; empty input produces the degenerate 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, CalcError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(CalcError::DimensionMismatch(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
        }
        let values = DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]);
        Ok(Matrix { values })
    }

    /// Identity matrix of size n x n.
    pub fn identity(n: usize) -> Matrix {
        Matrix {
            values: DMatrix::identity(n, n),
        }
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Cell accessor, row-major indexing.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Threshold under which a pivot or determinant counts as zero, scaled
    /// to the magnitude of the matrix entries.
    fn zero_tolerance(&self) -> f64 {
        let scale = self.values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        SINGULARITY_EPS * scale.max(1.0)
    }

    /// MATRIX ARITHMETIC

    /// Elementwise sum; operands must have identical shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, CalcError> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(CalcError::DimensionMismatch(format!(
                "cannot add {}x{} and {}x{} matrices",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(Matrix {
            values: &self.values + &other.values,
        })
    }

    /// Multiplies every cell by the scalar k.
    pub fn scale(&self, k: f64) -> Matrix {
        Matrix {
            values: &self.values * k,
        }
    }

    /// Row-by-column matrix product; requires self.cols == other.rows.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, CalcError> {
        if self.cols() != other.rows() {
            return Err(CalcError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}: column count of the first \
                 must equal row count of the second",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(Matrix {
            values: &self.values * &other.values,
        })
    }

    /// Transposed copy, shape cols x rows.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            values: self.values.transpose(),
        }
    }

    /// DETERMINANT AND INVERSE

    /// Determinant by LU elimination with partial pivoting. A pivot below
    /// the scaled tolerance short-circuits to exactly 0.
    pub fn determinant(&self) -> Result<f64, CalcError> {
        let n = self.rows();
        if n != self.cols() {
            return Err(CalcError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let mut a = self.values.clone();
        let tol = self.zero_tolerance();
        let mut det = 1.0;
        for col in 0..n {
            // partial pivoting: largest magnitude in the column
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..n {
                if a[(row, col)].abs() > max_val {
                    max_val = a[(row, col)].abs();
                    max_row = row;
                }
            }
            if max_val <= tol {
                return Ok(0.0);
            }
            if max_row != col {
                a.swap_rows(col, max_row);
                det = -det;
            }
            let pivot = a[(col, col)];
            det *= pivot;
            for row in (col + 1)..n {
                let factor = a[(row, col)] / pivot;
                for k in col..n {
                    a[(row, k)] -= factor * a[(col, k)];
                }
            }
        }
        Ok(det)
    }

    /// Inverse by Gauss-Jordan elimination on the augmented system [A | I].
    /// Fails with `NotSquare` for rectangular input and `SingularMatrix`
    /// when the determinant is zero under the documented tolerance.
    pub fn inverse(&self) -> Result<Matrix, CalcError> {
        let n = self.rows();
        if n != self.cols() {
            return Err(CalcError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.determinant()? == 0.0 {
            return Err(CalcError::SingularMatrix);
        }

        let tol = self.zero_tolerance();
        let mut aug = DMatrix::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = self.values[(i, j)];
            }
            aug[(i, n + i)] = 1.0;
        }

        for col in 0..n {
            let mut max_row = col;
            let mut max_val = aug[(col, col)].abs();
            for row in (col + 1)..n {
                if aug[(row, col)].abs() > max_val {
                    max_val = aug[(row, col)].abs();
                    max_row = row;
                }
            }
            if max_val <= tol {
                return Err(CalcError::SingularMatrix);
            }
            if max_row != col {
                aug.swap_rows(col, max_row);
            }
            let pivot = aug[(col, col)];
            for k in 0..(2 * n) {
                aug[(col, k)] /= pivot;
            }
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[(row, col)];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..(2 * n) {
                    aug[(row, k)] -= factor * aug[(col, k)];
                }
            }
        }

        let values = DMatrix::from_fn(n, n, |i, j| aug[(i, n + j)]);
        Ok(Matrix { values })
    }

    /// Non-negative integer power by exponentiation by squaring.
    /// `pow(0)` is the identity of matching size.
    pub fn pow(&self, exponent: i64) -> Result<Matrix, CalcError> {
        let n = self.rows();
        if n != self.cols() {
            return Err(CalcError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if exponent < 0 {
            return Err(CalcError::InvalidExponent(format!(
                "exponent must be a non-negative integer, got {}",
                exponent
            )));
        }
        let mut result = Matrix::identity(n);
        let mut base = self.clone();
        let mut e = exponent as u64;
        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.multiply(&base)?;
            }
        }
        Ok(result)
    }

    /// RENDERING

    /// Textual grid: one line per row, cells separated by single spaces.
    pub fn render(&self) -> String {
        (0..self.rows())
            .map(|i| {
                (0..self.cols())
                    .map(|j| self.values[(i, j)].to_string())
                    .join(" ")
            })
            .join("\n")
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn mat(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, epsilon: f64) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                assert_relative_eq!(a.get(i, j), b.get(i, j), epsilon = epsilon);
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(CalcError::DimensionMismatch(_))));
    }

    #[test]
    fn test_addition() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = mat(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, mat(vec![vec![6.0, 8.0], vec![10.0, 12.0]]));
    }

    #[test]
    fn test_addition_dimension_mismatch() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(a.add(&b), Err(CalcError::DimensionMismatch(_))));
    }

    #[test]
    fn test_scale() {
        let a = mat(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
        let scaled = a.scale(2.0);
        assert_eq!(scaled, mat(vec![vec![2.0, -4.0], vec![1.0, 8.0]]));
    }

    #[test]
    fn test_multiply() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = mat(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, mat(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn test_multiply_rectangular_shapes() {
        // (2x3) * (3x2) -> 2x2
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = mat(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, mat(vec![vec![58.0, 64.0], vec![139.0, 154.0]]));
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        // a 2x3 cannot be multiplied by a 2x2
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!(matches!(
            a.multiply(&b),
            Err(CalcError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_transpose() {
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, mat(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_determinant_2x2() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_relative_eq!(a.determinant().unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_3x3() {
        let a = mat(vec![
            vec![2.0, 0.0, 1.0],
            vec![1.0, 3.0, 2.0],
            vec![1.0, 1.0, 4.0],
        ]);
        // cofactor expansion along the first row: 2*10 - 0 + 1*(-2) = 18
        assert_relative_eq!(a.determinant().unwrap(), 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_of_singular_is_exact_zero() {
        let a = mat(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(a.determinant().unwrap(), 0.0);
    }

    #[test]
    fn test_determinant_not_square() {
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            a.determinant(),
            Err(CalcError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_inverse_2x2() {
        let a = mat(vec![vec![4.0, 7.0], vec![2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        let expected = mat(vec![vec![0.6, -0.7], vec![-0.2, 0.4]]);
        assert_matrix_eq(&inv, &expected, 1e-12);
    }

    #[test]
    fn test_inverse_round_trip_fixed() {
        let a = mat(vec![
            vec![2.0, -1.0, 0.0],
            vec![-1.0, 2.0, -1.0],
            vec![0.0, -1.0, 2.0],
        ]);
        let inv = a.inverse().unwrap();
        let product = a.multiply(&inv).unwrap();
        assert_matrix_eq(&product, &Matrix::identity(3), 1e-10);
        let product_other_side = inv.multiply(&a).unwrap();
        assert_matrix_eq(&product_other_side, &Matrix::identity(3), 1e-10);
    }

    #[test]
    fn test_inverse_round_trip_random() {
        let mut rng = rand::rng();
        let n = 6;
        // diagonal dominance keeps the random matrix comfortably invertible
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let v: f64 = rng.random_range(-1.0..1.0);
                        if i == j { v + (n as f64) } else { v }
                    })
                    .collect()
            })
            .collect();
        let a = mat(rows);
        let inv = a.inverse().unwrap();
        let product = a.multiply(&inv).unwrap();
        assert_matrix_eq(&product, &Matrix::identity(n), 1e-9);
    }

    #[test]
    fn test_inverse_singular_matrix() {
        let a = mat(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert!(matches!(a.inverse(), Err(CalcError::SingularMatrix)));
    }

    #[test]
    fn test_inverse_not_square() {
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(a.inverse(), Err(CalcError::NotSquare { .. })));
    }

    #[test]
    fn test_pow_zero_is_identity() {
        let a = mat(vec![vec![3.0, 1.0], vec![2.0, 5.0]]);
        assert_eq!(a.pow(0).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn test_pow_three_equals_repeated_multiplication() {
        let a = mat(vec![vec![1.0, 1.0], vec![0.0, 2.0]]);
        let cubed = a.pow(3).unwrap();
        let manual = a.multiply(&a).unwrap().multiply(&a).unwrap();
        assert_matrix_eq(&cubed, &manual, 1e-12);
    }

    #[test]
    fn test_pow_large_exponent() {
        // powers of the identity stay the identity regardless of exponent
        let a = Matrix::identity(3);
        assert_eq!(a.pow(63).unwrap(), Matrix::identity(3));
    }

    #[test]
    fn test_pow_negative_exponent() {
        let a = mat(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(matches!(a.pow(-2), Err(CalcError::InvalidExponent(_))));
    }

    #[test]
    fn test_pow_not_square() {
        let a = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(a.pow(2), Err(CalcError::NotSquare { .. })));
    }

    #[test]
    fn test_render_grid() {
        let a = mat(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.render(), "1 2\n3 4");
    }
}
