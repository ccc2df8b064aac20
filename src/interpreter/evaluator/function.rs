/// Built-in matrix constructors.
///
/// `zeros`, `ones` and `eye`, each taking one (`n x n`) or two
/// (`rows x cols`) non-negative integer arguments.
pub mod builtin;

/// The builtin lookup table and call dispatch.
pub mod core;
