/// Represents a literal value in the language.
///
/// `Literal` covers the raw constants that can appear directly in source
/// code: integers, floating-point numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A string literal, without its quotes.
    Str(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// The root of a parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it came from. Consumers (the type
/// checker, the evaluator and the printers) match on this enum exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: Literal,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix `+` or `-`.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation: arithmetic, elementwise or comparison.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A builtin matrix constructor call such as `zeros(2, 3)`.
    Call {
        /// Name of the builtin.
        name:      String,
        /// Arguments to the builtin.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A matrix literal: semicolon separated rows of comma separated elements.
    Matrix {
        /// The rows, each an ordered list of element expressions.
        rows: Vec<Vec<Self>>,
        /// Line number in the source code.
        line: usize,
    },
    /// Postfix transpose (`A'`).
    Transpose {
        /// The matrix expression being transposed.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Indexing with one (row) or two (row, column) indices.
    Index {
        /// The matrix being indexed.
        target:  Box<Self>,
        /// The index expressions.
        indices: Vec<Self>,
        /// Line number in the source code.
        line:    usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use matlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Call { line, .. }
            | Self::Matrix { line, .. }
            | Self::Transpose { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// The target of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum LValue {
    /// A plain variable.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An element or row of a matrix variable.
    Index {
        /// Name of the matrix variable.
        name:    String,
        /// One or two index expressions.
        indices: Vec<Expr>,
        /// Line number in the source code.
        line:    usize,
    },
}

impl LValue {
    /// Gets the name of the assigned variable.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Variable { name, .. } | Self::Index { name, .. } => name,
        }
    }
}

/// An inclusive integer range `start:end[:step]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    /// First value.
    pub start: Expr,
    /// Last value (inclusive).
    pub end:   Expr,
    /// Optional step; defaults to `1`.
    pub step:  Option<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Plain or compound assignment.
    Assign {
        /// The variable or matrix element being written.
        target: LValue,
        /// `=`, `+=`, `-=`, `*=` or `/=`.
        op:     AssignOperator,
        /// The assigned expression.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `print a, b, ...;`
    Print {
        /// The printed expressions.
        values: Vec<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if (cond) stmt [else stmt]`
    If {
        /// The condition.
        condition:   Expr,
        /// Statement run when the condition holds.
        then_branch: Box<Self>,
        /// Statement run otherwise.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (cond) stmt`
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for id = start:end[:step] stmt`
    For {
        /// The loop variable name.
        var:   String,
        /// The iterated range.
        range: Range,
        /// The loop body.
        body:  Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `{ statements }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `break;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue;`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `return expr;`
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A lone `;`.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Block { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. }
            | Self::Empty { line } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, elementwise arithmetic and
/// comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication, the matrix product for two matrices (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Elementwise addition (`.+`)
    DotAdd,
    /// Elementwise subtraction (`.-`)
    DotSub,
    /// Elementwise multiplication (`.*`)
    DotMul,
    /// Elementwise division (`./`)
    DotDiv,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for `<`, `>`, `<=`, `>=`, `==` and `!=`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }

    /// Returns `true` for the dotted elementwise operators.
    #[must_use]
    pub const fn is_elementwise(self) -> bool {
        matches!(self, Self::DotAdd | Self::DotSub | Self::DotMul | Self::DotDiv)
    }

    /// Maps an elementwise operator to the scalar operator it applies per
    /// element. Other operators map to themselves.
    ///
    /// ## Example
    /// ```
    /// use matlang::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::DotMul.scalar_form(), BinaryOperator::Mul);
    /// assert_eq!(BinaryOperator::Sub.scalar_form(), BinaryOperator::Sub);
    /// ```
    #[must_use]
    pub const fn scalar_form(self) -> Self {
        match self {
            Self::DotAdd => Self::Add,
            Self::DotSub => Self::Sub,
            Self::DotMul => Self::Mul,
            Self::DotDiv => Self::Div,
            other => other,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents an assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignOperator {
    /// The binary operator a compound assignment applies, or `None` for `=`.
    #[must_use]
    pub const fn binary(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, DotAdd, DotDiv, DotMul, DotSub, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            DotAdd => ".+",
            DotSub => ".-",
            DotMul => ".*",
            DotDiv => "./",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}
