use tracing::debug;

use crate::{
    ast::Program,
    error::CheckError,
    interpreter::checker::scope::Scope,
};

/// Statically checks programs for type and shape errors.
///
/// ## Usage
///
/// The checker never stops at the first problem: it visits the whole tree
/// and returns every diagnostic it found. Each call to
/// [`check`](TypeChecker::check) starts from an empty global scope.
///
/// ```
/// use matlang::interpreter::{checker::TypeChecker, parser::parse_source};
///
/// let outcome = parse_source("a = zeros(2, 3); b = a * a; break;");
/// let errors = TypeChecker::new().check(&outcome.program);
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[1].to_string(),
///            "[line 1] Break outside of the \"while\" or \"for\" loop");
/// ```
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub(super) scope:  Scope,
    pub(super) errors: Vec<CheckError>,
}

impl TypeChecker {
    /// Creates a checker with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a whole program.
    ///
    /// # Returns
    /// All diagnostics in the order they were found. An empty vector means
    /// the program is well typed.
    pub fn check(&mut self, program: &Program) -> Vec<CheckError> {
        self.scope = Scope::new();
        self.errors.clear();

        for statement in &program.statements {
            self.check_statement(statement);
        }

        debug!(diagnostics = self.errors.len(), "type check finished");
        std::mem::take(&mut self.errors)
    }

    /// Records a diagnostic.
    pub(super) fn error(&mut self, message: impl Into<String>, line: usize) {
        self.errors.push(CheckError::new(message, line));
    }

    /// Runs `body` in a child frame. `in_loop` marks the frame as a loop
    /// body; the flag is inherited from the enclosing frame either way.
    pub(super) fn with_frame(&mut self, in_loop: bool, body: impl FnOnce(&mut Self)) {
        self.scope.push(in_loop);
        body(self);
        self.scope.pop();
    }
}
