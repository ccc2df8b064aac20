use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operator applied to a value.
///
/// - `Negate` negates numbers (integers with overflow checking) and every
///   element of a matrix.
/// - `Plus` returns numbers and matrices unchanged.
///
/// # Errors
/// - `Overflow` when negating `i64::MIN`.
/// - `UnknownOperatorError` for strings and booleans.
///
/// # Example
/// ```
/// use matlang::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Value::Integer(4)), Ok(Value::Integer(-4)));
/// assert!(eval_unary(UnaryOperator::Negate, &Value::Bool(true)).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Plus, Value::Integer(_) | Value::Real(_) | Value::Matrix(_)) => {
            Ok(value.clone())
        },
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or_else(|| RuntimeError::Overflow { details: format!("-({n}) overflows"),
                                                     line:    None, })
        },
        (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
        (UnaryOperator::Negate, Value::Matrix(m)) => {
            Ok(Value::from(m.map(|element| eval_unary(op, element))?))
        },
        _ => Err(RuntimeError::UnknownOperatorError { details: format!("Unary '{op}' is not \
                                                                        defined for {}",
                                                                       value.type_name()),
                                                      line:    None, }),
    }
}
