use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an arithmetic operator on two scalar values.
///
/// - Two integers use checked integer arithmetic; division truncates.
/// - Mixed integer/real operands are promoted to real.
/// - Two strings support `+` (concatenation).
///
/// # Errors
/// - `DivisionByZeroError` for any division by zero.
/// - `Overflow` when integer arithmetic overflows.
/// - `UnknownOperatorError` when the operator has no meaning for the
///   operands (string `-`, boolean arithmetic).
/// - `TypeError` when the operand kinds do not mix (e.g. `int + string`).
pub fn eval_scalar(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer(op, *a, *b),
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            eval_real(op, left.as_real()?, right.as_real()?)
        },
        (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
            Ok(Value::Str(format!("{a}{b}")))
        },
        (Value::Str(_), Value::Str(_)) | (Value::Bool(_), Value::Bool(_)) => {
            Err(unknown_operator(op, left, right))
        },
        _ => Err(RuntimeError::TypeError { details: format!("Unsupported operand types for \
                                                             '{op}': {} and {}",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line:    None, }),
    }
}

/// Evaluates a comparison operator.
///
/// Numbers compare numerically (mixed integer/real allowed), strings
/// lexicographically, booleans only for `==` and `!=`.
///
/// # Errors
/// - `UnknownOperatorError` for ordering booleans or comparing matrices.
/// - `TypeError` when the operand kinds do not mix.
///
/// # Example
/// ```
/// use matlang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_comparison, value::core::Value},
/// };
///
/// let lt = eval_comparison(BinaryOperator::Less, &Value::Integer(1), &Value::Real(1.5));
/// assert_eq!(lt, Ok(Value::Bool(true)));
///
/// let eq = eval_comparison(BinaryOperator::Equal, &"a".to_string().into(), &"b".to_string().into());
/// assert_eq!(eq, Ok(Value::Bool(false)));
/// ```
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            left.as_real()?.partial_cmp(&right.as_real()?)
        },
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b))
            if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
        {
            Some(a.cmp(b))
        },
        (Value::Bool(_), Value::Bool(_)) | (Value::Matrix(_), _) | (_, Value::Matrix(_)) => {
            return Err(unknown_operator(op, left, right));
        },
        _ => {
            return Err(RuntimeError::TypeError { details: format!("Cannot compare {} with {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line:    None, });
        },
    };

    // NaN compares unequal to everything.
    let result = match op {
        BinaryOperator::Equal => ordering == Some(Ordering::Equal),
        BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
        BinaryOperator::Less => ordering == Some(Ordering::Less),
        BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::Greater => ordering == Some(Ordering::Greater),
        BinaryOperator::GreaterEqual => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        },
        _ => return Err(unknown_operator(op, left, right)),
    };
    Ok(Value::Bool(result))
}

fn eval_integer(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
    let result = match op.scalar_form() {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b)
        },
        _ => return Err(unknown_operator(op, &Value::Integer(a), &Value::Integer(b))),
    };

    result.map(Value::Integer)
          .ok_or_else(|| RuntimeError::Overflow { details: format!("{a} {op} {b} overflows"),
                                                  line:    None, })
}

#[allow(clippy::float_cmp)]
fn eval_real(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
    let result = match op.scalar_form() {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        },
        _ => return Err(unknown_operator(op, &Value::Real(a), &Value::Real(b))),
    };
    Ok(Value::Real(result))
}

fn division_by_zero() -> RuntimeError {
    RuntimeError::DivisionByZeroError { details: "Division by zero".to_string(),
                                        line:    None, }
}

fn unknown_operator(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnknownOperatorError { details: format!("Operator '{op}' is not defined for \
                                                           {} and {}",
                                                          left.type_name(),
                                                          right.type_name()),
                                         line:    None, }
}
