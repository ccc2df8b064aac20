use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::num::i64_to_usize,
};

/// Generates a constructor filling an `n x n` or `rows x cols` matrix with a
/// constant float.
///
/// # Example
/// ```
/// use matlang::interpreter::{evaluator::function::builtin::zeros, value::core::Value};
///
/// let Value::Matrix(m) = zeros(&[Value::Integer(2), Value::Integer(3)]).unwrap() else {
///     panic!("zeros must build a matrix");
/// };
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2).unwrap(), &Value::Real(0.0));
/// ```
macro_rules! filled_builtin {
    ($fname:ident, $fill:expr) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let (rows, cols) = dimensions(stringify!($fname), args)?;
            Ok(Value::from(Matrix::filled(rows, cols, &Value::Real($fill))?))
        }
    };
}

filled_builtin!(zeros, 0.0);
filled_builtin!(ones, 1.0);

/// Builds an identity matrix.
///
/// With one argument the matrix is `n x n`. With two it is `rows x cols`
/// and the diagonal holds `min(rows, cols)` ones.
///
/// # Example
/// ```
/// use matlang::interpreter::{evaluator::function::builtin::eye, value::core::Value};
///
/// let Value::Matrix(m) = eye(&[Value::Integer(2), Value::Integer(3)]).unwrap() else {
///     panic!("eye must build a matrix");
/// };
/// assert_eq!(m.get(1, 1).unwrap(), &Value::Real(1.0));
/// assert_eq!(m.get(1, 2).unwrap(), &Value::Real(0.0));
/// ```
pub fn eye(args: &[Value]) -> EvalResult<Value> {
    let (rows, cols) = dimensions("eye", args)?;
    Ok(Value::from(Matrix::identity(rows, cols)?))
}

/// Reads the `(rows, cols)` arguments of a constructor. A single argument
/// `n` means `n x n`.
fn dimensions(name: &str, args: &[Value]) -> EvalResult<(usize, usize)> {
    let extent = |value: &Value| -> EvalResult<usize> {
        let Value::Integer(n) = value else {
            let details = format!("'{name}' expects int arguments, got {}", value.type_name());
            return Err(RuntimeError::TypeError { details,
                                                 line: None });
        };
        i64_to_usize(*n).ok_or_else(|| RuntimeError::DimensionError {
                            details: format!("'{name}' dimensions must be non-negative, got {n}"),
                            line:    None,
                        })
    };

    match args {
        [n] => {
            let n = extent(n)?;
            Ok((n, n))
        },
        [rows, cols] => Ok((extent(rows)?, extent(cols)?)),
        _ => {
            let details = format!("'{name}' expects 1 or 2 arguments, got {}", args.len());
            Err(RuntimeError::TypeError { details,
                                          line: None })
        },
    }
}
