/// The checker state and its entry point.
pub mod core;

/// Expression typing: literals, variables, matrix literals, indexing and
/// builtin calls.
pub mod expression;

/// Typing rules for unary and binary operators, including shape checks for
/// matrix operands.
pub mod operator;

/// The frame chain used to resolve variable types and to validate `break`
/// and `continue`.
pub mod scope;

/// Statement checks: assignments, conditions, loops and blocks.
pub mod statement;

/// The static type domain.
///
/// Scalars, matrices with optionally known extents (nested for block
/// matrices) and ranges.
pub mod types;

pub use self::core::TypeChecker;
