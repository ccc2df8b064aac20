/// Matrix storage.
///
/// Defines the row-major `Matrix` type held by `Value::Matrix`, with checked
/// element and row access, transposition and elementwise combinators.
pub mod matrix;

/// Runtime values.
///
/// Defines `Value`, the scalars and shared matrices the interpreter computes
/// with, and how each one is printed.
pub mod core;
