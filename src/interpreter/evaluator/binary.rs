/// Operator dispatch on operand kinds.
pub mod core;

/// Matrix product, elementwise combination and matrix-scalar broadcasting.
pub mod matrix;

/// Scalar arithmetic and comparisons.
///
/// Integer arithmetic is checked, integer division truncates and mixed
/// integer/real operands are promoted to real.
pub mod scalar;
