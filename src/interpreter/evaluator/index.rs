use std::{io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::i64_to_usize,
};

impl<W: Write> Interpreter<W> {
    /// Reads from a matrix with one index (a row, as a `1 x cols` matrix) or
    /// two indices (a single element). Indices are zero-based.
    ///
    /// # Errors
    /// - `TypeError` if the target is not a matrix or an index is not an
    ///   `int`.
    /// - `IndexError` for any other number of indices or an index outside
    ///   the matrix.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let zeros = Value::from(Matrix::filled(2, 3, &Value::Real(0.0)).unwrap());
    ///
    /// let at = |row, col| [Value::Integer(row), Value::Integer(col)];
    ///
    /// let element = Interpreter::<Vec<u8>>::eval_index(&zeros, &at(0, 0));
    /// assert_eq!(element, Ok(Value::Real(0.0)));
    ///
    /// let outside = Interpreter::<Vec<u8>>::eval_index(&zeros, &at(5, 5));
    /// assert_eq!(outside.unwrap_err().kind(), "IndexError");
    /// ```
    pub fn eval_index(target: &Value, indices: &[Value]) -> EvalResult<Value> {
        let Value::Matrix(matrix) = target else {
            return Err(not_indexable(target));
        };

        match indices {
            [row] => Ok(Value::from(matrix.row(to_index(row)?)?)),
            [row, col] => Ok(matrix.get(to_index(row)?, to_index(col)?)?.clone()),
            _ => Err(wrong_index_count(indices.len())),
        }
    }

    /// Writes through one index (replacing a whole row) or two indices
    /// (replacing an element) into the matrix held by `slot`.
    ///
    /// The matrix is copied first if another value still shares it.
    ///
    /// # Errors
    /// As [`Self::eval_index`], plus `DimensionError` when a row is replaced
    /// by anything other than a `1 x cols` matrix.
    pub(crate) fn assign_index(slot: &mut Value, indices: &[Value], value: Value) -> EvalResult<()> {
        let matrix = match slot {
            Value::Matrix(matrix) => matrix,
            other => return Err(not_indexable(other)),
        };

        match indices {
            [row] => {
                let row = to_index(row)?;
                let Value::Matrix(values) = &value else {
                    return Err(RuntimeError::DimensionError {
                        details: format!("Cannot assign {} to a matrix row", value.type_name()),
                        line:    None,
                    });
                };
                Rc::make_mut(matrix).set_row(row, values)
            },
            [row, col] => {
                let (row, col) = (to_index(row)?, to_index(col)?);
                Rc::make_mut(matrix).set(row, col, value)
            },
            _ => Err(wrong_index_count(indices.len())),
        }
    }
}

/// Converts an index value to a zero-based position.
fn to_index(value: &Value) -> EvalResult<usize> {
    let Value::Integer(n) = value else {
        return Err(RuntimeError::TypeError { details: format!("Index must be int, found {}",
                                                              value.type_name()),
                                             line:    None, });
    };
    i64_to_usize(*n).ok_or_else(|| RuntimeError::IndexError { details: format!("Negative index {n}"),
                                                              line:    None, })
}

fn not_indexable(value: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot index into {}", value.type_name()),
                              line:    None, }
}

fn wrong_index_count(count: usize) -> RuntimeError {
    RuntimeError::IndexError { details: format!("Expected 1 or 2 indices, found {count}"),
                               line:    None, }
}
