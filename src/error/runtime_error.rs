#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Every variant carries a description and an optional source line. Helpers
/// that work on bare values raise errors without a line; the evaluator fills
/// it in with [`RuntimeError::at`] once it knows which node failed.
pub enum RuntimeError {
    /// Operand shapes do not fit the operation.
    DimensionError {
        /// Details about the shape mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// A value had an unexpected or incompatible kind.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// A bad index count or an index outside the matrix extent.
    IndexError {
        /// Details about the failed access.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// An operator has no meaning for the operands it was given.
    UnknownOperatorError {
        /// Details about the operator and its operands.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// Called an unknown function.
    UnknownFunctionError {
        /// Details naming the function.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// Attempted division by zero.
    DivisionByZeroError {
        /// Details about the division.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// Tried to read or update a variable that has no binding.
    UnknownVariable {
        /// Details naming the variable.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Details about the overflowing operation.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// A `for` range cannot be iterated.
    InvalidLoopBounds {
        /// Details describing why the bounds are invalid.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
    /// Writing `print` output failed.
    Output {
        /// Details from the underlying writer.
        details: String,
        /// The source line where the error occurred.
        line:    Option<usize>,
    },
}

impl RuntimeError {
    /// Attaches a source line to the error unless it already has one.
    ///
    /// ## Example
    /// ```
    /// use matlang::error::RuntimeError;
    ///
    /// let error = RuntimeError::IndexError { details: "index 5 out of range".to_string(),
    ///                                        line:    None, }.at(3);
    /// assert_eq!(error.line(), Some(3));
    /// assert_eq!(error.to_string(), "[line 3] IndexError: index 5 out of range");
    ///
    /// // The innermost line wins.
    /// assert_eq!(error.at(9).line(), Some(3));
    /// ```
    #[must_use]
    pub fn at(mut self, line: usize) -> Self {
        let slot = match &mut self {
            Self::DimensionError { line, .. }
            | Self::TypeError { line, .. }
            | Self::IndexError { line, .. }
            | Self::UnknownOperatorError { line, .. }
            | Self::UnknownFunctionError { line, .. }
            | Self::DivisionByZeroError { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::Overflow { line, .. }
            | Self::InvalidLoopBounds { line, .. }
            | Self::Output { line, .. } => line,
        };
        if slot.is_none() {
            *slot = Some(line);
        }
        self
    }

    /// Gets the source line of the error, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::DimensionError { line, .. }
            | Self::TypeError { line, .. }
            | Self::IndexError { line, .. }
            | Self::UnknownOperatorError { line, .. }
            | Self::UnknownFunctionError { line, .. }
            | Self::DivisionByZeroError { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::Overflow { line, .. }
            | Self::InvalidLoopBounds { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }

    /// Gets the name of the error kind, e.g. `DimensionError`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DimensionError { .. } => "DimensionError",
            Self::TypeError { .. } => "TypeError",
            Self::IndexError { .. } => "IndexError",
            Self::UnknownOperatorError { .. } => "UnknownOperatorError",
            Self::UnknownFunctionError { .. } => "UnknownFunctionError",
            Self::DivisionByZeroError { .. } => "DivisionByZeroError",
            Self::UnknownVariable { .. } => "UnknownVariable",
            Self::Overflow { .. } => "Overflow",
            Self::InvalidLoopBounds { .. } => "InvalidLoopBounds",
            Self::Output { .. } => "OutputError",
        }
    }

    const fn details(&self) -> &String {
        match self {
            Self::DimensionError { details, .. }
            | Self::TypeError { details, .. }
            | Self::IndexError { details, .. }
            | Self::UnknownOperatorError { details, .. }
            | Self::UnknownFunctionError { details, .. }
            | Self::DivisionByZeroError { details, .. }
            | Self::UnknownVariable { details, .. }
            | Self::Overflow { details, .. }
            | Self::InvalidLoopBounds { details, .. }
            | Self::Output { details, .. } => details,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line() {
            Some(line) => write!(f, "[line {line}] {}: {}", self.kind(), self.details()),
            None => write!(f, "{}: {}", self.kind(), self.details()),
        }
    }
}

impl std::error::Error for RuntimeError {}
