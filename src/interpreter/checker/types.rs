/// A static type as seen by the checker.
///
/// Matrix extents are `None` when they cannot be known before running the
/// program. A matrix element may itself be a matrix type, which is how block
/// matrices are modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A 64-bit integer.
    Int,
    /// A double-precision float.
    Float,
    /// The result of a comparison.
    Bool,
    /// A string literal or concatenation.
    Str,
    Matrix {
        /// Type of every element.
        element: Box<Self>,
        /// Number of rows, if statically known.
        rows:    Option<usize>,
        /// Number of columns, if statically known.
        cols:    Option<usize>,
    },
    /// The type of a `start:end[:step]` range, carrying its bound type.
    Range(Box<Self>),
}

impl Type {
    /// Builds a matrix type.
    #[must_use]
    pub fn matrix(element: Self, rows: Option<usize>, cols: Option<usize>) -> Self {
        Self::Matrix { element: Box::new(element),
                       rows,
                       cols }
    }

    /// Returns `true` for `int` and `float`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns `true` for matrix types.
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix { .. })
    }

    /// The innermost non-matrix element type.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::checker::types::Type;
    ///
    /// let block = Type::matrix(Type::matrix(Type::Int, Some(2), Some(2)), Some(1), Some(1));
    /// assert_eq!(block.base_element(), &Type::Int);
    /// ```
    #[must_use]
    pub fn base_element(&self) -> &Self {
        match self {
            Self::Matrix { element, .. } => element.base_element(),
            other => other,
        }
    }

    /// The row and column extent of a matrix after flattening nested blocks.
    ///
    /// Returns `None` for non-matrix types. An extent is unknown if it is
    /// unknown at any nesting level.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::checker::types::Type;
    ///
    /// let block = Type::matrix(Type::matrix(Type::Float, Some(2), Some(3)), Some(2), None);
    /// assert_eq!(block.total_shape(), Some((Some(4), None)));
    /// assert_eq!(Type::Int.total_shape(), None);
    /// ```
    #[must_use]
    pub fn total_shape(&self) -> Option<(Option<usize>, Option<usize>)> {
        let Self::Matrix { element, rows, cols } = self else {
            return None;
        };
        match element.total_shape() {
            Some((inner_rows, inner_cols)) => {
                let scale = |outer: Option<usize>, inner: Option<usize>| {
                    outer.zip(inner).and_then(|(a, b)| a.checked_mul(b))
                };
                Some((scale(*rows, inner_rows), scale(*cols, inner_cols)))
            },
            None => Some((*rows, *cols)),
        }
    }

    /// Checks whether a value of type `other` may be stored where `self` is
    /// expected. Unknown matrix extents match any extent.
    #[must_use]
    pub fn accepts(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Matrix { element: a,
                            rows: rows_a,
                            cols: cols_a, },
             Self::Matrix { element: b,
                            rows: rows_b,
                            cols: cols_b, }) => {
                a.accepts(b) && extents_match(*rows_a, *rows_b) && extents_match(*cols_a, *cols_b)
            },
            (Self::Range(a), Self::Range(b)) => a.accepts(b),
            _ => self == other,
        }
    }
}

/// Numeric promotion: `int` with `int` stays `int`, any `float` gives
/// `float`. Returns `None` if either side is not numeric.
#[must_use]
pub const fn promote(a: &Type, b: &Type) -> Option<Type> {
    match (a, b) {
        (Type::Int, Type::Int) => Some(Type::Int),
        (Type::Int | Type::Float, Type::Int | Type::Float) => Some(Type::Float),
        _ => None,
    }
}

/// Two extents match when they are equal or either one is unknown.
#[must_use]
pub fn extents_match(a: Option<usize>, b: Option<usize>) -> bool {
    a.zip(b).is_none_or(|(a, b)| a == b)
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let extent = |n: &Option<usize>| n.map_or_else(|| "?".to_string(), |n| n.to_string());
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Str => write!(f, "string"),
            Self::Matrix { element, rows, cols } => {
                write!(f, "matrix<{element}>[{}x{}]", extent(rows), extent(cols))
            },
            Self::Range(bound) => write!(f, "range<{bound}>"),
        }
    }
}

