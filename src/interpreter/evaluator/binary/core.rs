use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                matrix::{eval_elementwise, eval_matrix_product, eval_matrix_scalar},
                scalar::{eval_comparison, eval_scalar},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// This function routes the operation to specialized handlers depending on
/// the operator and operand kinds:
/// - comparisons use [`eval_comparison`];
/// - the dotted operators require two matrices of equal shape;
/// - `*` on two matrices is the matrix product, `+ - /` combine elements;
/// - a matrix with a scalar applies the scalar to every element, keeping the
///   operand order;
/// - two scalars use [`eval_scalar`].
///
/// Errors carry no line; the evaluator attaches it.
///
/// # Example
/// ```
/// use matlang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Real(0.5));
/// assert_eq!(sum, Ok(Value::Real(3.5)));
///
/// let quotient = eval_binary(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2));
/// assert_eq!(quotient, Ok(Value::Integer(3)));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    if op.is_comparison() {
        return eval_comparison(op, left, right);
    }

    match (left, right) {
        (Value::Matrix(a), Value::Matrix(b)) => match op {
            BinaryOperator::Mul => eval_matrix_product(a, b),
            _ => eval_elementwise(op, a, b),
        },
        _ if op.is_elementwise() => Err(RuntimeError::TypeError {
            details: format!("Element-wise {} requires matrices", operation_name(op)),
            line: None,
        }),
        (Value::Matrix(a), scalar) => eval_matrix_scalar(op, a, scalar, false),
        (scalar, Value::Matrix(b)) => eval_matrix_scalar(op, b, scalar, true),
        _ => eval_scalar(op, left, right),
    }
}

/// The English name of an arithmetic operator, used in error messages.
pub(crate) const fn operation_name(op: BinaryOperator) -> &'static str {
    match op.scalar_form() {
        BinaryOperator::Add => "addition",
        BinaryOperator::Sub => "subtraction",
        BinaryOperator::Mul => "multiplication",
        BinaryOperator::Div => "division",
        _ => "comparison",
    }
}
