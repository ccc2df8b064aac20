/// Binary operator evaluation logic.
///
/// Handles arithmetic, elementwise and comparison operators over scalars and
/// matrices, including the matrix product.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and unary plus for numbers and matrices.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its frame stack, the `Flow` control signal and
/// expression dispatch.
pub mod core;

/// Statement execution.
///
/// Assignments, `print`, blocks, conditionals, `while` loops and the
/// statements that produce control signals.
pub mod statement;

/// Evaluation of `for` loops over integer ranges.
pub mod for_loop;

/// Matrix indexing and index assignment.
pub mod index;

/// Function evaluation.
///
/// Handles builtin function calls and argument checking.
pub mod function;
