/// The checker module statically verifies types and matrix shapes.
///
/// The checker walks the AST without executing it, inferring a type for
/// every expression and tracking variable types through nested scopes. Matrix
/// types carry their extents when they can be known before running.
///
/// # Responsibilities
/// - Reports operand type mismatches, shape mismatches and bad indexing.
/// - Validates builtin calls, ranges and conditions.
/// - Rejects `break` and `continue` outside of loops.
pub mod checker;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs scalar and matrix arithmetic, manages variable frames, and
/// writes `print` output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, builtin constructors and control flow.
/// - Reports runtime errors such as division by zero or shape mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens tagged with their line.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports illegal characters without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. A syntax error skips to the next statement so that one pass
/// reports as many errors as possible.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with line info.
/// - Resynchronizes after errors.
pub mod parser;
/// Source and tree output for parsed programs.
///
/// Formats the AST back into re-parsable source text and renders the
/// indented node tree shown by `--ast`.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with: integers,
/// reals, booleans, strings and dense matrices whose elements are values
/// themselves.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Matrix` container.
/// - Implements conversions and shape-checked element access.
/// - Formats values for `print`.
pub mod value;
