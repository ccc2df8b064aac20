use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_comparison, statement::parse_statement, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The result of parsing a whole program.
///
/// Parsing never stops at the first syntax error. Each failed statement is
/// recorded and skipped, so `program` holds every statement that did parse
/// and `errors` every diagnostic in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The statements that parsed successfully.
    pub program: Program,
    /// Syntax errors in the order they were found.
    pub errors:  Vec<ParseError>,
}

impl ParseOutcome {
    /// Returns `true` if any syntax error was recorded.
    ///
    /// Callers must not check or run a program with syntax errors.
    #[must_use]
    pub const fn had_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, comparison, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := comparison`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}

/// Parses a token stream into a program, recovering from syntax errors.
///
/// After a failed statement the parser skips ahead to the next statement
/// boundary and continues. A `}` with no matching `{` is reported and
/// dropped.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer.
///
/// # Returns
/// A [`ParseOutcome`] with the parsed program and all syntax errors.
///
/// ## Example
/// ```
/// use matlang::interpreter::{lexer::tokenize, parser::parse_program};
///
/// let (tokens, _) = tokenize("x = ; y = 2; print y;");
/// let outcome = parse_program(&tokens);
///
/// assert!(outcome.had_errors());
/// assert_eq!(outcome.errors.len(), 1);
/// assert_eq!(outcome.program.statements.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseOutcome {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while let Some((tok, _)) = iter.peek() {
        if *tok == Token::RBrace {
            errors.push(unexpected(iter.next()));
            continue;
        }
        match parse_statement(&mut iter, &mut errors) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                debug!(%error, "recovering from syntax error");
                errors.push(error);
                synchronize(&mut iter);
            },
        }
    }

    ParseOutcome { program: Program { statements },
                   errors }
}

/// Lexes and parses source text.
///
/// Lexical errors come first in the resulting error list, followed by the
/// syntax errors of the parser.
///
/// ## Example
/// ```
/// use matlang::interpreter::parser::parse_source;
///
/// let outcome = parse_source("a = 1 $ 2;");
/// assert_eq!(outcome.errors[0].to_string(), "Illegal character '$' at line 1");
/// ```
#[must_use]
pub fn parse_source(source: &str) -> ParseOutcome {
    let (tokens, mut errors) = tokenize(source);
    let mut outcome = parse_program(&tokens);
    errors.append(&mut outcome.errors);
    outcome.errors = errors;
    outcome
}

/// Parses statements until the closing `}` of a block.
///
/// Errors inside the block are recorded into `errors` and recovered from in
/// the same way as at the top level; only a missing `}` fails the block.
pub(in crate::interpreter::parser) fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>,
                                                                  errors: &mut Vec<ParseError>)
                                                                  -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput),
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => match parse_statement(tokens, errors) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    debug!(%error, "recovering from syntax error inside block");
                    errors.push(error);
                    synchronize(tokens);
                },
            },
        }
    }
}

/// Skips tokens up to and including the next `;`, or up to (but not
/// including) the next `}`, or to the end of input.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((tok, _)) = tokens.peek() {
        match tok {
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::RBrace => return,
            _ => {
                tokens.next();
            },
        }
    }
}
