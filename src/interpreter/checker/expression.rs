use crate::{
    ast::{Expr, Literal},
    interpreter::{
        checker::{core::TypeChecker, types::Type},
        evaluator::function::core::builtin_arity,
    },
};

impl TypeChecker {
    /// Infers the type of an expression.
    ///
    /// # Returns
    /// `None` when the type cannot be determined, either because of an error
    /// already reported below this node or because it depends on an
    /// unknown variable. Callers treat `None` as "anything" and report
    /// nothing further about it.
    pub fn check_expr(&mut self, expr: &Expr) -> Option<Type> {
        match expr {
            Expr::Literal { value, .. } => Some(match value {
                                                    Literal::Int(_) => Type::Int,
                                                    Literal::Float(_) => Type::Float,
                                                    Literal::Str(_) => Type::Str,
                                                }),
            Expr::Variable { name, line } => match self.scope.lookup(name) {
                Some(ty) => ty.clone(),
                None => {
                    self.error(format!("Undefined variable '{name}'"), *line);
                    None
                },
            },
            Expr::Unary { op, operand, line } => {
                let operand = self.check_expr(operand)?;
                self.check_unary(*op, operand, *line)
            },
            Expr::Binary { left, op, right, line } => {
                let left = self.check_expr(left);
                let right = self.check_expr(right);
                self.check_binary(*op, &left?, &right?, *line)
            },
            Expr::Call { name, arguments, line } => self.check_call(name, arguments, *line),
            Expr::Matrix { rows, line } => self.check_matrix_literal(rows, *line),
            Expr::Transpose { operand, line } => match self.check_expr(operand)? {
                Type::Matrix { element, rows, cols } => Some(Type::Matrix { element,
                                                                            rows: cols,
                                                                            cols: rows }),
                other => {
                    self.error(format!("Transpose requires a matrix, found {other}"), *line);
                    None
                },
            },
            Expr::Index { target, indices, line } => {
                let name = match target.as_ref() {
                    Expr::Variable { name, .. } => Some(name.as_str()),
                    _ => None,
                };
                let target = self.check_expr(target);
                self.check_index(target, indices, name, *line)
            },
        }
    }

    /// Types a matrix literal. Rows must have equal length and elements a
    /// common type; `int` and `float` elements unify to `float`.
    fn check_matrix_literal(&mut self, rows: &[Vec<Expr>], line: usize) -> Option<Type> {
        let types = rows.iter()
                        .map(|row| row.iter().map(|e| self.check_expr(e)).collect::<Vec<_>>())
                        .collect::<Vec<_>>();

        let Some(first) = types.first() else {
            return Some(Type::matrix(Type::Float, Some(0), Some(0)));
        };
        let cols = first.len();
        if types.iter().any(|row| row.len() != cols) {
            self.error("Jagged matrix literal (rows with different lengths)", line);
            return None;
        }

        let mut element: Option<Type> = None;
        for ty in types.iter().flatten().flatten() {
            element = match element {
                None => Some(ty.clone()),
                Some(current) if current.accepts(ty) => Some(current),
                Some(current) if current.is_numeric() && ty.is_numeric() => Some(Type::Float),
                Some(current) => {
                    self.error(format!("Inconsistent element types in matrix: {current} vs {ty}"),
                               line);
                    return None;
                },
            };
        }

        element.map(|element| Type::matrix(element, Some(types.len()), Some(cols)))
    }

    /// Types `target[i]` (a `1 x C` row) and `target[i, j]` (an element).
    ///
    /// Index expressions are always checked, even when the target is
    /// unknown. Literal indices are compared with statically known extents.
    pub(super) fn check_index(&mut self,
                              target: Option<Type>,
                              indices: &[Expr],
                              name: Option<&str>,
                              line: usize)
                              -> Option<Type> {
        for index in indices {
            if let Some(ty) = self.check_expr(index)
               && ty != Type::Int
            {
                self.error(format!("Index must be int, found {ty}"), index.line_number());
            }
        }

        let (element, rows, cols) = match target? {
            Type::Matrix { element, rows, cols } => (element, rows, cols),
            other => {
                self.error(format!("Cannot index into {other}"), line);
                return None;
            },
        };

        match indices {
            [row] => {
                self.check_bound(row, 0, rows, name);
                Some(Type::Matrix { element,
                                    rows: Some(1),
                                    cols })
            },
            [row, col] => {
                self.check_bound(row, 0, rows, name);
                self.check_bound(col, 1, cols, name);
                Some(*element)
            },
            _ => {
                self.error(format!("Expected 1 or 2 indices, found {}", indices.len()), line);
                None
            },
        }
    }

    fn check_bound(&mut self,
                   index: &Expr,
                   dimension: usize,
                   extent: Option<usize>,
                   name: Option<&str>) {
        let Expr::Literal { value: Literal::Int(value),
                            line, } = index
        else {
            return;
        };
        let subject = name.map_or_else(|| "matrix".to_string(), |name| format!("matrix {name}"));

        if *value < 0 {
            self.error(format!("Negative index {value}"), *line);
        } else if let Some(size) = extent
                  && usize::try_from(*value).is_ok_and(|v| v >= size)
        {
            self.error(format!("Index {value} out of bounds for dimension {dimension} of \
                                {subject} (size {size})"),
                       *line);
        }
    }

    /// Types a builtin constructor call. Every builtin returns a `float`
    /// matrix whose extents are known when the arguments are literals.
    fn check_call(&mut self, name: &str, arguments: &[Expr], line: usize) -> Option<Type> {
        for (position, argument) in arguments.iter().enumerate() {
            if let Some(ty) = self.check_expr(argument)
               && ty != Type::Int
            {
                self.error(format!("Argument {position} of '{name}' must be int, found {ty}"),
                           argument.line_number());
            }
        }

        let Some(arity) = builtin_arity(name) else {
            self.error(format!("Unknown function '{name}'"), line);
            return None;
        };
        if !arity.check(arguments.len()) {
            self.error(format!("'{name}' expects {arity} arguments, got {}", arguments.len()),
                       line);
            return None;
        }

        let extents = arguments.iter()
                               .map(|argument| self.literal_extent(name, argument))
                               .collect::<Vec<_>>();
        let (rows, cols) = match extents.as_slice() {
            [n] => (*n, *n),
            [rows, cols] => (*rows, *cols),
            _ => (None, None),
        };

        if name == "eye"
           && let (Some(rows), Some(cols)) = (rows, cols)
           && rows != cols
        {
            self.error(format!("eye expects a square shape, got {rows}x{cols}"), line);
        }
        Some(Type::matrix(Type::Float, rows, cols))
    }

    /// The value of an integer literal argument, if it is one. Negative
    /// literals are reported.
    fn literal_extent(&mut self, name: &str, argument: &Expr) -> Option<usize> {
        let Expr::Literal { value: Literal::Int(n),
                            line, } = argument
        else {
            return None;
        };
        let extent = usize::try_from(*n).ok();
        if extent.is_none() {
            self.error(format!("'{name}' dimensions must be non-negative, got {n}"), *line);
        }
        extent
    }
}
