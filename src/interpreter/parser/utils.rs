use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Builds the error reported for an unexpected token, or for running out of
/// tokens.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>) -> ParseError {
    match found {
        Some((tok, line)) => ParseError::UnexpectedToken { kind:  tok.kind_name().to_string(),
                                                           value: tok.lexeme(),
                                                           line:  *line, },
        None => ParseError::UnexpectedEndOfInput,
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` (or `UnexpectedEndOfInput`) without consuming
/// anything when the next token is different.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((tok, line)) if tok == expected => {
            let line = *line;
            tokens.next();
            Ok(line)
        },
        other => Err(unexpected(other.copied())),
    }
}

/// Parses a comma-separated list of expressions until a closing token.
///
/// Used by the `print` statement, whose list ends at `;`. At least one
/// expression is required; the closing token is consumed.
///
/// Grammar (simplified): `list := expression ("," expression)* closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `closing`: The token that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(tokens: &mut Peekable<I>,
                                                                   closing: &Token)
                                                                   -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = vec![parse_expression(tokens)?];
    loop {
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
                items.push(parse_expression(tokens)?);
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            other => return Err(unexpected(other.copied())),
        }
    }
    Ok(items)
}

/// Parses `[ expression ]` or `[ expression , expression ]` following an
/// indexed name or expression. The opening bracket must be the next token.
pub(in crate::interpreter::parser) fn parse_index_list<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBracket)?;
    let first = parse_expression(tokens)?;
    if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        let second = parse_expression(tokens)?;
        expect(tokens, &Token::RBracket)?;
        return Ok(vec![first, second]);
    }
    expect(tokens, &Token::RBracket)?;
    Ok(vec![first])
}
