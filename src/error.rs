/// Syntax errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Syntax errors are recovered from individually; the parser collects
/// them and the caller decides whether to continue.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes.
/// Runtime errors are fatal: the first one aborts interpretation.
pub mod runtime_error;
/// Type checker diagnostics.
///
/// Static type and shape problems found by the checker. These are advisory
/// and never stop the checking pass.
pub mod check_error;

pub use check_error::CheckError;
pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;
