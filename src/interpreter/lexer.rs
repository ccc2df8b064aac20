use logos::Logos;

use crate::error::ParseError;

/// A float literal together with the text it was written as.
#[derive(Debug, PartialEq, Clone)]
pub struct FloatLiteral {
    /// The parsed value.
    pub value: f64,
    /// The literal as it appears in the source, reported in syntax errors.
    pub text:  String,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `1.`, `.5` or `2e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    FloatNum(FloatLiteral),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    IntNum(i64),
    /// String literal tokens. The surrounding quotes are stripped.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    Str(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// `zeros`
    #[token("zeros")]
    Zeros,
    /// `ones`
    #[token("ones")]
    Ones,
    /// `eye`
    #[token("eye")]
    Eye,
    /// Identifier tokens; variable names such as `x` or `matrix_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `.+`
    #[token(".+")]
    DotPlus,
    /// `.-`
    #[token(".-")]
    DotMinus,
    /// `.*`
    #[token(".*")]
    DotStar,
    /// `./`
    #[token("./")]
    DotSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `'` (postfix transpose)
    #[token("'")]
    Apostrophe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the grammar name of the token, as used in syntax error
    /// messages.
    ///
    /// Named terminals use upper-case names (`ID`, `INTNUM`, `PLUS`), while
    /// single-character punctuation is reported quoted (`';'`).
    ///
    /// ## Example
    /// ```
    /// use matlang::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::DotStar.kind_name(), "DOTMUL");
    /// assert_eq!(Token::Semicolon.kind_name(), "';'");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::FloatNum(_) => "FLOATNUM",
            Self::IntNum(_) => "INTNUM",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "ID",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Return => "RETURN",
            Self::Print => "PRINT",
            Self::Zeros => "ZEROS",
            Self::Ones => "ONES",
            Self::Eye => "EYE",
            Self::PlusAssign => "ADDASSIGN",
            Self::MinusAssign => "SUBASSIGN",
            Self::MulAssign => "MULASSIGN",
            Self::DivAssign => "DIVASSIGN",
            Self::DotPlus => "DOTADD",
            Self::DotMinus => "DOTSUB",
            Self::DotStar => "DOTMUL",
            Self::DotSlash => "DOTDIV",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "TIMES",
            Self::Slash => "DIVIDE",
            Self::EqualEqual => "EQ",
            Self::BangEqual => "NE",
            Self::LessEqual => "LE",
            Self::GreaterEqual => "GE",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::Equals => "'='",
            Self::Apostrophe => "'''",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Comment | Self::NewLine | Self::Ignored => "IGNORED",
        }
    }

    /// Returns the source text the token stands for.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::FloatNum(float) => float.text.clone(),
            Self::IntNum(value) => value.to_string(),
            Self::Str(value) => format!("\"{value}\""),
            Self::Identifier(name) => name.clone(),
            Self::If => "if".to_string(),
            Self::Else => "else".to_string(),
            Self::While => "while".to_string(),
            Self::For => "for".to_string(),
            Self::Break => "break".to_string(),
            Self::Continue => "continue".to_string(),
            Self::Return => "return".to_string(),
            Self::Print => "print".to_string(),
            Self::Zeros => "zeros".to_string(),
            Self::Ones => "ones".to_string(),
            Self::Eye => "eye".to_string(),
            Self::PlusAssign => "+=".to_string(),
            Self::MinusAssign => "-=".to_string(),
            Self::MulAssign => "*=".to_string(),
            Self::DivAssign => "/=".to_string(),
            Self::DotPlus => ".+".to_string(),
            Self::DotMinus => ".-".to_string(),
            Self::DotStar => ".*".to_string(),
            Self::DotSlash => "./".to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Star => "*".to_string(),
            Self::Slash => "/".to_string(),
            Self::EqualEqual => "==".to_string(),
            Self::BangEqual => "!=".to_string(),
            Self::LessEqual => "<=".to_string(),
            Self::GreaterEqual => ">=".to_string(),
            Self::Less => "<".to_string(),
            Self::Greater => ">".to_string(),
            Self::Equals => "=".to_string(),
            Self::Apostrophe => "'".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::LBracket => "[".to_string(),
            Self::RBracket => "]".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Colon => ":".to_string(),
            Self::Comma => ",".to_string(),
            Self::Comment | Self::NewLine | Self::Ignored => String::new(),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into line-tagged tokens.
///
/// Scanning never stops at a bad character: every unrecognized character is
/// reported as [`ParseError::IllegalCharacter`] and skipped, so the parser
/// still sees the rest of the program.
///
/// ## Example
/// ```
/// use matlang::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, errors) = tokenize("x = 1;\ny = x';");
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[4], (Token::Identifier("y".to_string()), 2));
/// assert_eq!(tokens[7].0, Token::Apostrophe);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<(Token, usize)>, Vec<ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let character = lexer.slice().chars().next().unwrap_or('?');
            errors.push(ParseError::IllegalCharacter { character,
                                                       line: lexer.extras.line });
        }
    }

    (tokens, errors)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(FloatLiteral)`: The parsed value and its source text.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<FloatLiteral> {
    let text = lex.slice();
    Some(FloatLiteral { value: text.parse().ok()?,
                        text:  text.to_string(), })
}
/// Parses an integer literal from the current token slice.
///
/// Literals that do not fit into an `i64` fail to lex.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Strips the quotes from a string literal and accounts for any line breaks
/// inside it.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}
