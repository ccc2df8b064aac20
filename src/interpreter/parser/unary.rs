use std::iter::Peekable;

use crate::{
    ast::{Expr, Literal, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_index_list, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (identity). Unary
/// operators are right-associative and bind looser than the postfix
/// operators, so `-A'` is parsed as `-(A')`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Plus, line)) => Some((UnaryOperator::Plus, *line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::Unary { op,
                         operand: Box::new(operand),
                         line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INTNUM | FLOATNUM | STRING | ID
///              | "(" expression ")"
///              | "[" rows "]"
///              | ("zeros" | "ones" | "eye") "(" expression ["," expression] ")"
/// ```
/// On failure the offending token is left in the stream.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(entry) = tokens.peek().copied() else {
        return Err(unexpected(None));
    };
    let line = entry.1;

    let literal = |value: Literal| Expr::Literal { value, line };

    match &entry.0 {
        Token::IntNum(value) => {
            tokens.next();
            Ok(literal(Literal::Int(*value)))
        },
        Token::FloatNum(float) => {
            tokens.next();
            Ok(literal(Literal::Float(float.value)))
        },
        Token::Str(value) => {
            tokens.next();
            Ok(literal(Literal::Str(value.clone())))
        },
        Token::Identifier(name) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::LBracket => parse_matrix_literal(tokens),
        Token::Zeros | Token::Ones | Token::Eye => parse_builtin_call(tokens),
        _ => Err(unexpected(Some(entry))),
    }
}

/// Parses postfix operators applied to an expression.
///
/// Two postfix forms exist, both binding tighter than any prefix or binary
/// operator and applied left to right:
///
/// 1. **Transpose** `expr'`
/// 2. **Indexing** `expr[i]` (a row) or `expr[i, j]` (an element)
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "'"
///              | postfix "[" expression ["," expression] "]"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::Apostrophe, line)) => {
                let line = *line;
                tokens.next();
                node = Expr::Transpose { operand: Box::new(node),
                                         line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                let indices = parse_index_list(tokens)?;
                node = Expr::Index { target: Box::new(node),
                                     indices,
                                     line };
            },
            _ => return Ok(node),
        }
    }
}

/// Parses a matrix literal.
///
/// Rows are separated by `;` and elements by `,`. `[]` is the empty matrix.
/// Row lengths are not checked here; jagged literals are reported by the
/// type checker and rejected by the interpreter.
///
/// Grammar:
/// ```text
///     matrix := "[" "]"
///             | "[" row (";" row)* "]"
///     row    := expression ("," expression)*
/// ```
fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBracket)?;
    let mut rows = Vec::new();

    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Matrix { rows, line });
    }

    let mut row = vec![parse_expression(tokens)?];
    loop {
        match tokens.peek().copied() {
            Some((Token::Comma, _)) => {
                tokens.next();
                row.push(parse_expression(tokens)?);
            },
            Some((Token::Semicolon, _)) => {
                tokens.next();
                rows.push(std::mem::take(&mut row));
                row.push(parse_expression(tokens)?);
            },
            Some((Token::RBracket, _)) => {
                tokens.next();
                rows.push(row);
                return Ok(Expr::Matrix { rows, line });
            },
            other => return Err(unexpected(other)),
        }
    }
}

/// Parses a call of one of the builtin matrix constructors `zeros`, `ones`
/// or `eye`, taking one or two arguments.
fn parse_builtin_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Zeros, line)) => ("zeros", *line),
        Some((Token::Ones, line)) => ("ones", *line),
        Some((Token::Eye, line)) => ("eye", *line),
        other => return Err(unexpected(other)),
    };

    expect(tokens, &Token::LParen)?;
    let mut arguments = vec![parse_expression(tokens)?];
    if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        arguments.push(parse_expression(tokens)?);
    }
    expect(tokens, &Token::RParen)?;

    Ok(Expr::Call { name: name.to_string(),
                    arguments,
                    line })
}
