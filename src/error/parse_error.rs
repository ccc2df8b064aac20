#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Grammar name of the token, e.g. `ID` or `';'`.
        kind:  String,
        /// Source text of the token.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput,
    /// The lexer met a character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl ParseError {
    /// Returns the line the error was reported on, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { line, .. } | Self::IllegalCharacter { line, .. } => {
                Some(*line)
            },
            Self::UnexpectedEndOfInput => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { kind, value, line } => write!(f,
                                                                  "Syntax error at line {line}: unexpected token {kind} (value={value})"),
            Self::UnexpectedEndOfInput => {
                write!(f, "Syntax error at EOF (unexpected end of file)")
            },
            Self::IllegalCharacter { character, line } => {
                write!(f, "Illegal character '{character}' at line {line}")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// All syntax errors of one parse, in the order they were found.
///
/// Returned when a program cannot be executed because parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrors(pub Vec<ParseError>);

impl std::fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxErrors {}
