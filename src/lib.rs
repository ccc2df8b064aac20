//! # matlang
//!
//! matlang is an interpreter for a small MATLAB-like matrix language written
//! in Rust. It parses programs with error recovery, statically checks types
//! and matrix shapes, and executes them with a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    error::{CheckError, SyntaxErrors},
    interpreter::{
        checker::TypeChecker, evaluator::core::Interpreter, parser::parse_source,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and consumed by the checker, the evaluator and the
/// printer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Defines the operator enums shared by all phases.
pub mod ast;
/// Provides unified error types for parsing, checking and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// checking or evaluating code. Every error carries the source line it refers
/// to.
///
/// # Responsibilities
/// - Defines error types for all failure modes (syntax, type, runtime).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, checking, evaluation, value
/// representations and output formatting.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker, evaluator and
///   printer.
/// - Provides entry points for parsing, checking and evaluating programs.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// Parses and type checks a program without running it.
///
/// # Returns
/// The checker diagnostics; an empty vector means the program is well typed.
///
/// # Errors
/// Returns the [`SyntaxErrors`] if the program does not parse.
///
/// # Examples
/// ```
/// use matlang::check_source;
///
/// let diagnostics = check_source("x = 1; x = \"one\";").unwrap();
/// assert_eq!(diagnostics[0].to_string(), "[line 1] Cannot assign string to int");
///
/// assert!(check_source("x = ;").is_err());
/// ```
pub fn check_source(source: &str) -> Result<Vec<CheckError>, SyntaxErrors> {
    let outcome = parse_source(source);
    if outcome.had_errors() {
        return Err(SyntaxErrors(outcome.errors));
    }
    Ok(TypeChecker::new().check(&outcome.program))
}

/// Parses and executes a program, writing `print` output to `out`.
///
/// The type checker is not consulted; its diagnostics are advisory and can
/// be obtained with [`check_source`].
///
/// # Returns
/// The value of a top-level `return`, or `None` if the program ran to its
/// end.
///
/// # Errors
/// Returns [`SyntaxErrors`] if parsing fails, or the first runtime error.
///
/// # Examples
/// ```
/// use matlang::get_result;
///
/// let mut out = Vec::new();
/// let result = get_result("A = eye(2); print A * A;", &mut out);
/// assert!(result.is_ok());
/// assert_eq!(String::from_utf8(out).unwrap(), "[[1.0, 0.0], [0.0, 1.0]]\n");
///
/// // Example with an intentional error (unknown variable).
/// let mut out = Vec::new();
/// assert!(get_result("print y;", &mut out).is_err());
/// ```
pub fn get_result<W: Write>(source: &str,
                            out: &mut W)
                            -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let outcome = parse_source(source);
    if outcome.had_errors() {
        debug!(errors = outcome.errors.len(), "not running a program with syntax errors");
        return Err(Box::new(SyntaxErrors(outcome.errors)));
    }

    let mut interpreter = Interpreter::new(out);
    Ok(interpreter.run(&outcome.program)?)
}
