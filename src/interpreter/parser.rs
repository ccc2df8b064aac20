/// Entry points, recovery and the expression root.
///
/// Holds [`parse_program`], [`parse_source`] and [`ParseOutcome`], the
/// resynchronization logic shared by the top level and blocks, and
/// `parse_expression`, which every other submodule starts from.
pub mod core;

/// Statement parsing.
///
/// Assignments, `print`, `return`, `break`, `continue` and the `if`,
/// `while` and `for` control statements.
pub mod statement;

/// Braced blocks.
pub mod block;

/// Binary operator parsing, one function per precedence level.
pub mod binary;

/// Unary, postfix and primary expressions: literals, names, grouping,
/// matrix literals, builtin constructor calls, transpose and indexing.
pub mod unary;

/// Small helpers shared by the parsing functions.
pub mod utils;

pub use self::core::{ParseOutcome, ParseResult, parse_program, parse_source};
