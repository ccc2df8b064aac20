use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_statement_list},
            utils::expect,
        },
    },
};

/// Parses a braced block of statements.
///
/// Grammar: `block := "{" statement* "}"`
///
/// Syntax errors inside the block are recorded into `errors` and do not
/// abort the block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the opening `{`.
/// - `errors`: Collector for recovered syntax errors.
///
/// # Returns
/// A [`Statement::Block`] holding the parsed statements.
///
/// # Errors
/// Fails if the block is not closed before the end of input.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          errors: &mut Vec<ParseError>)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace)?;
    let statements = parse_statement_list(tokens, errors)?;
    Ok(Statement::Block { statements, line })
}
