use tracing::debug;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::checker::{
        core::TypeChecker,
        types::{Type, extents_match, promote},
    },
};

impl TypeChecker {
    /// Unary `+` and `-` apply to numbers and numeric matrices.
    pub(super) fn check_unary(&mut self,
                              op: UnaryOperator,
                              operand: Type,
                              line: usize)
                              -> Option<Type> {
        if operand.base_element().is_numeric() {
            Some(operand)
        } else {
            self.error(format!("Unary '{op}' is not defined for {operand}"), line);
            None
        }
    }

    /// Types a binary operation on two known operand types.
    ///
    /// - comparisons produce `bool`;
    /// - dotted operators need two matrices;
    /// - two matrices go through [`check_matrix_pair`](Self::check_matrix_pair);
    /// - a matrix with a scalar keeps the matrix shape;
    /// - scalars follow the numeric promotion table, plus `string + string`.
    pub(super) fn check_binary(&mut self,
                               op: BinaryOperator,
                               left: &Type,
                               right: &Type,
                               line: usize)
                               -> Option<Type> {
        if op.is_comparison() {
            return Some(self.check_comparison(op, left, right, line));
        }

        match (left.is_matrix(), right.is_matrix()) {
            (true, true) => self.check_matrix_pair(op, left, right, line),
            _ if op.is_elementwise() => {
                self.error(format!("Element-wise '{op}' requires matrices, found {left} and \
                                    {right}"),
                           line);
                None
            },
            (true, false) => self.check_matrix_scalar(op, left, right, line),
            (false, true) => self.check_matrix_scalar(op, right, left, line),
            (false, false) => match (left, right) {
                (Type::Str, Type::Str) if op == BinaryOperator::Add => Some(Type::Str),
                (Type::Str | Type::Bool, _) | (_, Type::Str | Type::Bool) => {
                    self.error(format!("Operator '{op}' is not defined for {left} and {right}"),
                               line);
                    None
                },
                _ => promote(left, right).or_else(|| {
                                              self.error(format!("Unsupported operand types \
                                                                  for '{op}': {left} and \
                                                                  {right}"),
                                                         line);
                                              None
                                          }),
            },
        }
    }

    /// Numbers compare with numbers, strings with strings; booleans only
    /// support `==` and `!=`. The result is `bool` even when the operands do
    /// not fit, so the mistake is reported once.
    fn check_comparison(&mut self,
                        op: BinaryOperator,
                        left: &Type,
                        right: &Type,
                        line: usize)
                        -> Type {
        let comparable = match (left, right) {
            (Type::Str, Type::Str) => true,
            (Type::Bool, Type::Bool) => {
                matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
            },
            _ => left.is_numeric() && right.is_numeric(),
        };
        if !comparable {
            self.error(format!("Cannot compare {left} with {right} using '{op}'"), line);
        }
        Type::Bool
    }

    /// Types an operation between two matrices.
    ///
    /// `*` is the matrix product: the column count of `left` must equal the
    /// row count of `right` and the result is `rows(left) x cols(right)`.
    /// Every other operator needs equal total shapes and keeps the shape.
    /// Block elements are combined recursively with the same operator.
    fn check_matrix_pair(&mut self,
                         op: BinaryOperator,
                         left: &Type,
                         right: &Type,
                         line: usize)
                         -> Option<Type> {
        let (Type::Matrix { element: left_element,
                            rows: left_rows,
                            cols: left_cols, },
             Type::Matrix { element: right_element,
                            rows: right_rows,
                            cols: right_cols, }) = (left, right)
        else {
            return None;
        };

        if op == BinaryOperator::Mul {
            if !extents_match(*left_cols, *right_rows) {
                self.error(format!("Matrix dimensions incompatible for multiplication: \
                                    {left} * {right}"),
                           line);
                return None;
            }
            let element = self.check_element_pair(op, left_element, right_element, line)?;
            return Some(Type::matrix(element, *left_rows, *right_cols));
        }

        let (Some((rows_a, cols_a)), Some((rows_b, cols_b))) =
            (left.total_shape(), right.total_shape())
        else {
            return None;
        };
        if !(extents_match(rows_a, rows_b) && extents_match(cols_a, cols_b)) {
            if broadcastable(rows_a, rows_b) || broadcastable(cols_a, cols_b) {
                debug!(line, %left, %right, "matrices can broadcast together");
            }
            self.error(format!("Matrix dimensions must match for '{op}': {left} vs {right}"),
                       line);
            return None;
        }

        let element = self.check_element_pair(op, left_element, right_element, line)?;
        Some(Type::matrix(element, left_rows.or(*right_rows), left_cols.or(*right_cols)))
    }

    fn check_element_pair(&mut self,
                          op: BinaryOperator,
                          left: &Type,
                          right: &Type,
                          line: usize)
                          -> Option<Type> {
        match (left.is_matrix(), right.is_matrix()) {
            (true, true) => self.check_matrix_pair(op, left, right, line),
            (true, false) => self.check_matrix_scalar(op, left, right, line),
            (false, true) => self.check_matrix_scalar(op, right, left, line),
            (false, false) => promote(left, right).or_else(|| {
                                  self.error(format!("Matrix elements must be numeric for \
                                                      '{op}', got {left} and {right}"),
                                             line);
                                  None
                              }),
        }
    }

    /// A scalar applied to every element of a matrix. The result keeps the
    /// matrix shape with a promoted element type.
    fn check_matrix_scalar(&mut self,
                           op: BinaryOperator,
                           matrix: &Type,
                           scalar: &Type,
                           line: usize)
                           -> Option<Type> {
        let Some(base) = promote(matrix.base_element(), scalar) else {
            self.error(format!("Operator '{op}' is not defined for {matrix} and {scalar}"),
                       line);
            return None;
        };
        Some(with_base_element(matrix, base))
    }
}

/// Replaces the innermost element type of a (possibly nested) matrix type.
fn with_base_element(ty: &Type, base: Type) -> Type {
    match ty {
        Type::Matrix { element, rows, cols } => {
            Type::matrix(with_base_element(element, base), *rows, *cols)
        },
        _ => base,
    }
}

/// Two different known extents where the larger is a whole multiple of the
/// smaller and neither is 1.
fn broadcastable(a: Option<usize>, b: Option<usize>) -> bool {
    let Some((a, b)) = a.zip(b) else {
        return false;
    };
    let (small, large) = (a.min(b), a.max(b));
    a != b && small > 1 && large % small == 0
}
