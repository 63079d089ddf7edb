#![allow(non_snake_case)]
/// # Dense matrix engine
/// a module
/// 1) defines the dense `Matrix` value type over nalgebra storage
/// 2) implements addition, scalar and matrix multiplication, transpose,
///    determinant, inverse and non-negative integer powers with typed
///    dimension validation
/// 3) renders matrices to the textual grid shown by the form layer
///# Example
/// ```
/// use symcalc::matrixops::dense_matrix::Matrix;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = a.transpose();
/// let product = a.multiply(&b).unwrap();
/// println!("{}", product);
/// ```
pub mod dense_matrix;
/// recursive nom parser turning nested array literals like `[[1,2],[3,4]]`
/// into matrices, replacing any dynamic evaluation of user text
pub mod matrix_parser;
