use std::fmt::{self, Display, Formatter};

use crate::ast::{Expr, LValue, Literal, Program, Range, Statement};

/// Indentation used for nested statements in source output.
const INDENT: &str = "  ";
/// Prefix added per level by [`render_tree`].
const TREE_INDENT: &str = "|  ";

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl Display for Expr {
    /// Writes the expression as source text. Unary and binary operations are
    /// fully parenthesized so the output parses back to the same tree.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Unary { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Call { name, arguments, .. } => write!(f, "{name}({})", join(arguments, ", ")),
            Self::Matrix { rows, .. } => {
                let rows = rows.iter().map(|row| join(row, ", ")).collect::<Vec<_>>();
                write!(f, "[{}]", rows.join("; "))
            },
            Self::Transpose { operand, .. } => write!(f, "{operand}'"),
            Self::Index { target, indices, .. } => write!(f, "{target}[{}]", join(indices, ", ")),
        }
    }
}

impl Display for LValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Index { name, indices, .. } => write!(f, "{name}[{}]", join(indices, ", ")),
        }
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)?;
        if let Some(step) = &self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl Display for Program {
    /// Writes one top-level statement per line.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::parser::parse_source;
    ///
    /// let outcome = parse_source("for i = 1:3 { x = -i * 2; print x'; }");
    /// assert_eq!(outcome.program.to_string(),
    ///            "for i = 1:3 {\n  x = ((-i) * 2);\n  print x';\n}\n");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write_statement(f, statement, 0)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(separator)
}

/// Writes a statement whose first line is already indented to `depth`.
fn write_statement(f: &mut Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::Assign { target, op, value, .. } => write!(f, "{target} {op} {value};"),
        Statement::Print { values, .. } => write!(f, "print {};", join(values, ", ")),
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            write!(f, "if ({condition})")?;
            write_body(f, then_branch, depth)?;
            if let Some(else_branch) = else_branch {
                if matches!(**then_branch, Statement::Block { .. }) {
                    write!(f, " else")?;
                } else {
                    write!(f, "\n{}else", INDENT.repeat(depth))?;
                }
                write_body(f, else_branch, depth)?;
            }
            Ok(())
        },
        Statement::While { condition, body, .. } => {
            write!(f, "while ({condition})")?;
            write_body(f, body, depth)
        },
        Statement::For { var, range, body, .. } => {
            write!(f, "for {var} = {range}")?;
            write_body(f, body, depth)
        },
        Statement::Block { statements, .. } => {
            writeln!(f, "{{")?;
            for statement in statements {
                write!(f, "{}", INDENT.repeat(depth + 1))?;
                write_statement(f, statement, depth + 1)?;
                writeln!(f)?;
            }
            write!(f, "{}}}", INDENT.repeat(depth))
        },
        Statement::Break { .. } => write!(f, "break;"),
        Statement::Continue { .. } => write!(f, "continue;"),
        Statement::Return { value, .. } => write!(f, "return {value};"),
        Statement::Empty { .. } => write!(f, ";"),
    }
}

/// Blocks open on the header line, other bodies go on their own line one
/// level deeper.
fn write_body(f: &mut Formatter<'_>, body: &Statement, depth: usize) -> fmt::Result {
    if matches!(body, Statement::Block { .. }) {
        write!(f, " ")?;
        write_statement(f, body, depth)
    } else {
        write!(f, "\n{}", INDENT.repeat(depth + 1))?;
        write_statement(f, body, depth + 1)
    }
}

/// Renders a program as an indented tree, one node per line.
///
/// Each nesting level adds a `|  ` prefix. Node kinds are upper-case labels
/// (`PRINT`, `FOR`, `MATRIX`, ...); operators and literals show themselves.
/// Line numbers are not shown, so two programs with the same structure
/// render identically.
///
/// # Example
/// ```
/// use matlang::interpreter::{parser::parse_source, printer::render_tree};
///
/// let outcome = parse_source("x = [1, 2] + 3;");
/// assert_eq!(render_tree(&outcome.program),
///            "=\n|  x\n|  +\n|  |  MATRIX\n|  |  |  ROW\n|  |  |  |  1\n|  |  |  |  2\n|  |  3\n");
/// ```
#[must_use]
pub fn render_tree(program: &Program) -> String {
    let mut tree = Tree::default();
    for statement in &program.statements {
        tree.statement(statement, 0);
    }
    tree.out
}

#[derive(Default)]
struct Tree {
    out: String,
}

impl Tree {
    fn line(&mut self, depth: usize, label: impl Display) {
        self.out.push_str(&TREE_INDENT.repeat(depth));
        self.out.push_str(&label.to_string());
        self.out.push('\n');
    }

    fn statement(&mut self, statement: &Statement, depth: usize) {
        match statement {
            Statement::Assign { target, op, value, .. } => {
                self.line(depth, op);
                match target {
                    LValue::Variable { name, .. } => self.line(depth + 1, name),
                    LValue::Index { name, indices, .. } => {
                        self.line(depth + 1, "INDEX");
                        self.line(depth + 2, name);
                        self.exprs(indices, depth + 2);
                    },
                }
                self.expr(value, depth + 1);
            },
            Statement::Print { values, .. } => {
                self.line(depth, "PRINT");
                self.exprs(values, depth + 1);
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                self.line(depth, "IF");
                self.expr(condition, depth + 1);
                self.line(depth + 1, "THEN");
                self.statement(then_branch, depth + 2);
                if let Some(else_branch) = else_branch {
                    self.line(depth + 1, "ELSE");
                    self.statement(else_branch, depth + 2);
                }
            },
            Statement::While { condition, body, .. } => {
                self.line(depth, "WHILE");
                self.expr(condition, depth + 1);
                self.statement(body, depth + 1);
            },
            Statement::For { var, range, body, .. } => {
                self.line(depth, "FOR");
                self.line(depth + 1, var);
                self.line(depth + 1, "RANGE");
                self.expr(&range.start, depth + 2);
                self.expr(&range.end, depth + 2);
                if let Some(step) = &range.step {
                    self.expr(step, depth + 2);
                }
                self.statement(body, depth + 1);
            },
            Statement::Block { statements, .. } => {
                self.line(depth, "BLOCK");
                for statement in statements {
                    self.statement(statement, depth + 1);
                }
            },
            Statement::Break { .. } => self.line(depth, "BREAK"),
            Statement::Continue { .. } => self.line(depth, "CONTINUE"),
            Statement::Return { value, .. } => {
                self.line(depth, "RETURN");
                self.expr(value, depth + 1);
            },
            Statement::Empty { .. } => self.line(depth, "EMPTY"),
        }
    }

    fn exprs(&mut self, exprs: &[Expr], depth: usize) {
        for expr in exprs {
            self.expr(expr, depth);
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match expr {
            Expr::Literal { value: Literal::Str(s), .. } => self.line(depth, s),
            Expr::Literal { value, .. } => self.line(depth, value),
            Expr::Variable { name, .. } => self.line(depth, name),
            Expr::Unary { op, operand, .. } => {
                self.line(depth, format_args!("UNARY {op}"));
                self.expr(operand, depth + 1);
            },
            Expr::Binary { left, op, right, .. } => {
                self.line(depth, op);
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            },
            Expr::Call { name, arguments, .. } => {
                self.line(depth, name);
                self.exprs(arguments, depth + 1);
            },
            Expr::Matrix { rows, .. } => {
                self.line(depth, "MATRIX");
                for row in rows {
                    self.line(depth + 1, "ROW");
                    self.exprs(row, depth + 2);
                }
            },
            Expr::Transpose { operand, .. } => {
                self.line(depth, "TRANSPOSE");
                self.expr(operand, depth + 1);
            },
            Expr::Index { target, indices, .. } => {
                self.line(depth, "INDEX");
                self.expr(target, depth + 1);
                self.exprs(indices, depth + 1);
            },
        }
    }
}
