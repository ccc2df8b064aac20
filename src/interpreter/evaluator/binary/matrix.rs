use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::{eval_binary, operation_name},
            core::EvalResult,
        },
        value::{core::Value, matrix::Matrix},
    },
};

/// Multiplies two matrices.
///
/// `a` is `m x n`, `b` is `n x p`; the result is `m x p`. Elements are
/// combined with the ordinary `*` and `+` operators, so block matrices
/// multiply their blocks. An inner dimension of zero yields zeros.
///
/// # Errors
/// `DimensionError` if the column count of `a` differs from the row count of
/// `b`, plus any error from combining the elements.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::binary::matrix::eval_matrix_product,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let eye = Matrix::identity(3, 3).unwrap();
/// let ones = Matrix::filled(3, 3, &Value::Real(1.0)).unwrap();
///
/// assert_eq!(eval_matrix_product(&eye, &ones), Ok(Value::from(ones.clone())));
///
/// let column = Matrix::filled(2, 1, &Value::Real(1.0)).unwrap();
/// assert_eq!(eval_matrix_product(&eye, &column).unwrap_err().kind(), "DimensionError");
/// ```
pub fn eval_matrix_product(a: &Matrix, b: &Matrix) -> EvalResult<Value> {
    let ((rows_a, cols_a), (rows_b, cols_b)) = (a.shape(), b.shape());
    if cols_a != rows_b {
        return Err(RuntimeError::DimensionError {
            details: format!("Matrix dimensions incompatible for multiplication: \
                              ({rows_a}x{cols_a}) * ({rows_b}x{cols_b})"),
            line: None,
        });
    }

    let product = Matrix::try_from_fn(rows_a, cols_b, |row, col| {
                      let mut sum: Option<Value> = None;
                      for k in 0..cols_a {
                          let term = eval_binary(BinaryOperator::Mul, a.get(row, k)?, b.get(k, col)?)?;
                          sum = Some(match sum {
                                         Some(acc) => eval_binary(BinaryOperator::Add, &acc, &term)?,
                                         None => term,
                                     });
                      }
                      Ok(sum.unwrap_or(Value::Real(0.0)))
                  })?;
    Ok(Value::from(product))
}

/// Combines two matrices of the same shape element by element.
///
/// Used for the dotted operators and for `+`, `-` and `/` between matrices.
/// When both elements are themselves matrices, a dotted operator is applied
/// to them recursively.
///
/// # Errors
/// `DimensionError` if the shapes differ, plus any error from combining the
/// elements.
pub fn eval_elementwise(op: BinaryOperator, a: &Matrix, b: &Matrix) -> EvalResult<Value> {
    if a.shape() != b.shape() {
        let ((rows_a, cols_a), (rows_b, cols_b)) = (a.shape(), b.shape());
        let kind = if op.is_elementwise() { "element-wise " } else { "" };
        return Err(RuntimeError::DimensionError {
            details: format!("Matrix dimensions must match for {kind}{}: ({rows_a}x{cols_a}) vs \
                              ({rows_b}x{cols_b})",
                             operation_name(op)),
            line: None,
        });
    }

    let combined = a.zip_with(b, |x, y| {
                        if x.is_matrix() && y.is_matrix() {
                            eval_binary(op, x, y)
                        } else {
                            eval_binary(op.scalar_form(), x, y)
                        }
                    })?;
    Ok(Value::from(combined))
}

/// Applies a scalar to every element of a matrix.
///
/// `scalar_first` keeps the written operand order, so `1 / A` divides one by
/// every element while `A / 2` divides every element by two.
pub fn eval_matrix_scalar(op: BinaryOperator,
                          matrix: &Matrix,
                          scalar: &Value,
                          scalar_first: bool)
                          -> EvalResult<Value> {
    let mapped = matrix.map(|element| {
                           if scalar_first {
                               eval_binary(op, scalar, element)
                           } else {
                               eval_binary(op, element, scalar)
                           }
                       })?;
    Ok(Value::from(mapped))
}
