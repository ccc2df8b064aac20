use std::rc::Rc;

use crate::{
    ast::Literal,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::matrix::Matrix},
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.). Used as
    /// conditions in `if` and `while` statements, where the condition must
    /// evaluate to `Bool`.
    Bool(bool),
    /// A string value.
    Str(String),
    /// A two-dimensional matrix. Shared until written through an index
    /// assignment, which copies on write.
    Matrix(Rc<Matrix>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(Rc::new(m))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => Self::Integer(*n),
            Literal::Float(r) => Self::Real(*r),
            Literal::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. Integers beyond `2^53`
    /// round to the nearest float.
    ///
    /// # Errors
    /// Returns `TypeError` if the value is not a number.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Value::Integer(i64::MAX).as_real().unwrap(), 9.223_372_036_854_776e18);
    /// assert!(Value::Bool(true).as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(self.expected("a number")),
        }
    }

    /// The name of the value's kind, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Returns `true` if the value is [`Value::Matrix`].
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    fn expected(&self, what: &str) -> RuntimeError {
        RuntimeError::TypeError { details: format!("Expected {what}, found {}", self.type_name()),
                                  line:    None, }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
