use std::iter::Peekable;

use crate::{
    ast::{AssignOperator, Expr, LValue, Range, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_index_list, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// Grammar:
/// ```text
///     statement := ";"
///                | "break" ";" | "continue" ";"
///                | "return" expression ";"
///                | "print" expression ("," expression)* ";"
///                | "if" "(" expression ")" statement ["else" statement]
///                | "while" "(" expression ")" statement
///                | "for" ID "=" range statement
///                | block
///                | assignment
/// ```
/// An `else` always binds to the nearest `if` without one, because the
/// innermost `if` checks for it first.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `errors`: Collector for syntax errors recovered inside nested blocks.
///
/// # Errors
/// Returns the first syntax error of the statement. The caller is
/// responsible for resynchronizing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              errors: &mut Vec<ParseError>)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(entry) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let line = entry.1;

    match &entry.0 {
        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Empty { line })
        },
        Token::Break => {
            tokens.next();
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Break { line })
        },
        Token::Continue => {
            tokens.next();
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Continue { line })
        },
        Token::Return => {
            tokens.next();
            let value = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Return { value, line })
        },
        Token::Print => {
            tokens.next();
            let values = parse_comma_separated(tokens, &Token::Semicolon)?;
            Ok(Statement::Print { values, line })
        },
        Token::If => parse_if(tokens, errors, line),
        Token::While => parse_while(tokens, errors, line),
        Token::For => parse_for(tokens, errors, line),
        Token::LBrace => parse_block(tokens, errors),
        Token::Identifier(_) => parse_assignment(tokens, line),
        _ => Err(unexpected(Some(entry))),
    }
}

/// Parses `if (condition) statement [else statement]`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   errors: &mut Vec<ParseError>,
                   line: usize)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::If)?;
    let condition = parse_condition(tokens)?;
    let then_branch = Box::new(parse_statement(tokens, errors)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens, errors)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while (condition) statement`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      errors: &mut Vec<ParseError>,
                      line: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::While)?;
    let condition = parse_condition(tokens)?;
    let body = Box::new(parse_statement(tokens, errors)?);
    Ok(Statement::While { condition, body, line })
}

/// Parses `for ID = start:end[:step] statement`.
///
/// Range bounds are additive-level expressions, so `for i = 1:n-1` reads as
/// `1:(n-1)`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>,
                    errors: &mut Vec<ParseError>,
                    line: usize)
                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::For)?;
    let var = match tokens.peek().copied() {
        Some((Token::Identifier(name), _)) => {
            tokens.next();
            name.clone()
        },
        other => return Err(unexpected(other)),
    };
    let range_line = expect(tokens, &Token::Equals)?;

    let start = parse_additive(tokens)?;
    expect(tokens, &Token::Colon)?;
    let end = parse_additive(tokens)?;
    let step = if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
        Some(parse_additive(tokens)?)
    } else {
        None
    };

    let body = Box::new(parse_statement(tokens, errors)?);
    Ok(Statement::For { var,
                        range: Range { start,
                                       end,
                                       step,
                                       line: range_line },
                        body,
                        line })
}

/// Parses a parenthesized `if`/`while` condition.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(condition)
}

/// Parses an assignment statement.
///
/// Grammar:
/// ```text
///     assignment := lvalue ("=" | "+=" | "-=" | "*=" | "/=") expression ";"
///     lvalue     := ID | ID "[" expression ["," expression] "]"
/// ```
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        other => return Err(unexpected(other)),
    };

    let target = if let Some((Token::LBracket, _)) = tokens.peek() {
        let indices = parse_index_list(tokens)?;
        LValue::Index { name, indices, line }
    } else {
        LValue::Variable { name, line }
    };

    let op = match tokens.peek().copied() {
        Some((Token::Equals, _)) => AssignOperator::Assign,
        Some((Token::PlusAssign, _)) => AssignOperator::AddAssign,
        Some((Token::MinusAssign, _)) => AssignOperator::SubAssign,
        Some((Token::MulAssign, _)) => AssignOperator::MulAssign,
        Some((Token::DivAssign, _)) => AssignOperator::DivAssign,
        other => return Err(unexpected(other)),
    };
    tokens.next();

    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;
    Ok(Statement::Assign { target,
                           op,
                           value,
                           line })
}
