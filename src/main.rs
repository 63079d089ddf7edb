#![allow(non_snake_case)]
use log::LevelFilter;
use symcalc::Utils::logger::init_console_logger;
use symcalc::calculator::arithmetic;
use symcalc::calculator::text_api::{
    differentiate_text, integrate_text, matrix_inverse_text, matrix_power_text, matrix_sum_text,
};
use symcalc::matrixops::dense_matrix::Matrix;
use symcalc::symbolic::symbolic_engine::Expr;

fn main() {
    init_console_logger(LevelFilter::Info);
    let example = 0;
    match example {
        0 => {
            // SYMBOLIC CALCULUS
            // parse expression from string to symbolic expression
            let input = "x^2 + sin(x) * exp(2 * x)";
            let parsed_expression = Expr::parse_expression(input).unwrap();
            println!("parsed_expression {}", parsed_expression);
            // differentiate with respect to x and simplify
            let df_dx = parsed_expression.diff("x").simplify();
            println!("df_dx = {}", df_dx);
            // render as LaTeX the way the form layer would show it
            println!("LaTeX: {}", df_dx.to_latex());
            // definite integral via the text API
            let area = integrate_text("x^2", "x", Some((0.0, 3.0))).unwrap();
            println!("integral of x^2 over [0, 3] = {}", area);
            // unsupported integrals report a typed error instead of panicking
            let unsupported = integrate_text("x * sin(x)", "x", None);
            println!("x*sin(x): {:?}", unsupported);
        }
        1 => {
            // MATRIX ALGEBRA
            let a = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
            println!("A =\n{}", a);
            println!("A^T =\n{}", a.transpose());
            println!("det(A) = {}", a.determinant().unwrap());
            let inv = a.inverse().unwrap();
            println!("A^-1 =\n{}", inv);
            println!("A * A^-1 =\n{}", a.multiply(&inv).unwrap());
            println!("A^3 =\n{}", a.pow(3).unwrap());
        }
        2 => {
            // TEXT-LEVEL API, the calls a form layer makes
            println!("2 + 3 = {}", arithmetic::apply("add", 2.0, 3.0).unwrap());
            println!("5 / 0 -> {:?}", arithmetic::apply("divide", 5.0, 0.0));
            println!(
                "d/dx x^3: {}",
                differentiate_text("x^3", "x").unwrap()
            );
            println!(
                "[[1,2],[3,4]] + [[5,6],[7,8]] =\n{}",
                matrix_sum_text("[[1,2],[3,4]]", "[[5,6],[7,8]]").unwrap()
            );
            println!(
                "inverse of singular matrix -> {:?}",
                matrix_inverse_text("[[1,2],[2,4]]")
            );
            println!(
                "[[1,1],[0,1]]^5 =\n{}",
                matrix_power_text("[[1,1],[0,1]]", "5").unwrap()
            );
        }
        _ => {
            println!("no such example");
        }
    }
}
