/// A single diagnostic produced by the type checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckError {
    /// Human readable description of the problem.
    pub message: String,
    /// The source line of the offending node.
    pub line:    usize,
}

impl CheckError {
    /// Creates a diagnostic for the given line.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self { message: message.into(),
               line }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message)
    }
}

impl std::error::Error for CheckError {}
