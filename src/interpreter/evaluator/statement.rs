use std::io::Write;

use crate::{
    ast::{AssignOperator, Expr, LValue, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            core::{EvalResult, Flow, Interpreter},
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement and reports how control leaves it.
    ///
    /// Errors raised while executing the statement carry the line of the
    /// innermost node that failed, or the statement's own line.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        let line = statement.line_number();
        match statement {
            Statement::Assign { target, op, value, .. } => {
                self.exec_assign(target, *op, value).map_err(|e| e.at(line))?;
                Ok(Flow::Normal)
            },
            Statement::Print { values, .. } => {
                self.exec_print(values).map_err(|e| e.at(line))?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval_condition(condition)? {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval_condition(condition)? {
                    match self.exec_statement(body)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {},
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::For { var, range, body, .. } => self.exec_for(var, range, body),
            Statement::Block { statements, .. } => {
                self.with_frame("block", |interpreter| interpreter.exec_block(statements))
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Return { value, .. } => Ok(Flow::Return(self.eval(value)?)),
            Statement::Empty { .. } => Ok(Flow::Normal),
        }
    }

    /// Executes statements in order until one of them leaves abnormally.
    pub(crate) fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an `if`/`while` condition, which must produce a `bool`.
    fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        let line = condition.line_number();
        match self.eval(condition)? {
            Value::Bool(b) => Ok(b),
            other => {
                let details = format!("Condition must be a bool, found {}", other.type_name());
                Err(RuntimeError::TypeError { details,
                                              line: Some(line) })
            },
        }
    }

    /// Evaluates every expression, then writes them separated by spaces and
    /// followed by a newline.
    fn exec_print(&mut self, values: &[Expr]) -> EvalResult<()> {
        let values = values.iter()
                           .map(|value| self.eval(value))
                           .collect::<EvalResult<Vec<_>>>()?;
        let text = values.iter()
                         .map(ToString::to_string)
                         .collect::<Vec<_>>()
                         .join(" ");

        writeln!(self.out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                        line:    None, })
    }

    /// Executes a plain or compound assignment.
    ///
    /// A plain assignment to a name binds it in the nearest frame that
    /// already has it, or in the innermost frame. Compound assignments read
    /// the current value first, so the target must exist.
    fn exec_assign(&mut self, target: &LValue, op: AssignOperator, value: &Expr) -> EvalResult<()> {
        let value = self.eval(value)?;

        match target {
            LValue::Variable { name, .. } => {
                let value = match op.binary() {
                    None => value,
                    Some(binary) => eval_binary(binary, self.lookup(name)?, &value)?,
                };
                self.assign(name, value);
                Ok(())
            },
            LValue::Index { name, indices, .. } => {
                let indices = self.eval_indices(indices)?;
                let value = match op.binary() {
                    None => value,
                    Some(binary) => {
                        let current = Self::eval_index(self.lookup(name)?, &indices)?;
                        eval_binary(binary, &current, &value)?
                    },
                };
                let slot = self.lookup_mut(name)?;
                Self::assign_index(slot, &indices, value)
            },
        }
    }
}
