use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::unexpected},
    },
};

/// Parses a comparison expression.
///
/// Comparisons are non-associative: at most one comparison operator may
/// appear at this level, so `a < b < c` is a syntax error rather than a
/// chained comparison. Parenthesize to compare a comparison result.
///
/// The rule is: `comparison := additive [("==" | "!=" | "<" | "<=" | ">" |
/// ">=") additive]`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
///
/// # Errors
/// Reports the second comparison operator as an unexpected token.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens)?;

    let Some((op, line)) = peek_operator(tokens, BinaryOperator::is_comparison) else {
        return Ok(left);
    };
    tokens.next();
    let right = parse_additive(tokens)?;

    if peek_operator(tokens, BinaryOperator::is_comparison).is_some() {
        return Err(unexpected(tokens.peek().copied()));
    }

    Ok(Expr::Binary { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line })
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+`, `-`, `.+` and `.-`.
///
/// The rule is: `additive := multiplicative (("+" | "-" | ".+" | ".-")
/// multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((op, line)) = peek_operator(tokens, |op| {
                                     matches!(op,
                                              BinaryOperator::Add
                                              | BinaryOperator::Sub
                                              | BinaryOperator::DotAdd
                                              | BinaryOperator::DotSub)
                                 })
    {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `.*` and `./`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | ".*" | "./") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    while let Some((op, line)) = peek_operator(tokens, |op| {
                                     matches!(op,
                                              BinaryOperator::Mul
                                              | BinaryOperator::Div
                                              | BinaryOperator::DotMul
                                              | BinaryOperator::DotDiv)
                                 })
    {
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    Ok(left)
}

/// Looks at the next token and returns its binary operator and line if the
/// operator belongs to the requested precedence level.
fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                        level: impl Fn(BinaryOperator) -> bool)
                        -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.peek()?;
    token_to_binary_operator(token).filter(|op| level(*op))
                                   .map(|op| (op, *line))
}

/// Maps a token to the corresponding binary operator, if any.
///
/// # Parameters
/// - `token`: The token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token represents a binary operator,
/// otherwise `None`.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, Div, DotAdd, DotDiv, DotMul, DotSub, Equal, Greater, GreaterEqual, Less, LessEqual,
        Mul, NotEqual, Sub,
    };
    match token {
        Token::Plus => Some(Add),
        Token::Minus => Some(Sub),
        Token::Star => Some(Mul),
        Token::Slash => Some(Div),
        Token::DotPlus => Some(DotAdd),
        Token::DotMinus => Some(DotSub),
        Token::DotStar => Some(DotMul),
        Token::DotSlash => Some(DotDiv),
        Token::EqualEqual => Some(Equal),
        Token::BangEqual => Some(NotEqual),
        Token::Less => Some(Less),
        Token::LessEqual => Some(LessEqual),
        Token::Greater => Some(Greater),
        Token::GreaterEqual => Some(GreaterEqual),
        _ => None,
    }
}
