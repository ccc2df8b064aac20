use std::{collections::HashMap, io::Write};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::{core::Value, matrix::Matrix},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How control leaves a statement.
///
/// Statements report the signal to their enclosing construct instead of
/// unwinding: loops consume `Break` and `Continue`, the program root consumes
/// everything.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break,
    /// Skip to the next iteration of the innermost loop.
    Continue,
    /// Stop the program, handing back the value.
    Return(Value),
}

/// One level of the variable stack.
#[derive(Debug)]
pub struct Frame {
    /// What pushed the frame (`global`, `block` or `for`), for tracing.
    pub name:   &'static str,
    /// Variables bound in this frame.
    pub values: HashMap<String, Value>,
}

impl Frame {
    fn new(name: &'static str) -> Self {
        Self { name,
               values: HashMap::new() }
    }
}

/// Stores the runtime evaluation state and executes programs.
///
/// ## Usage
///
/// An `Interpreter` owns the writer that `print` statements go to. It can run
/// several programs in a row; each run starts from a fresh global frame.
///
/// ```
/// use matlang::interpreter::{evaluator::core::Interpreter, parser::parse_source};
///
/// let outcome = parse_source("a = 1; a += 2; print a;");
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.run(&outcome.program).unwrap();
///
/// assert_eq!(String::from_utf8(interpreter.into_inner()).unwrap(), "3\n");
/// ```
pub struct Interpreter<W: Write> {
    /// Variable frames, innermost last. Never empty while running.
    pub frames: Vec<Frame>,
    pub(crate) out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter printing to `out`.
    pub fn new(out: W) -> Self {
        Self { frames: vec![Frame::new("global")],
               out }
    }

    /// Gives back the output writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Executes a program from a fresh global frame.
    ///
    /// # Returns
    /// The value of a top-level `return`, or `None` when the program ran to
    /// its end (or was stopped by a stray `break`/`continue`).
    ///
    /// # Errors
    /// The first runtime error aborts the run and is returned with the line
    /// of the statement that raised it.
    pub fn run(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        self.frames.clear();
        self.frames.push(Frame::new("global"));

        for statement in &program.statements {
            match self.exec_statement(statement)? {
                Flow::Normal => {},
                Flow::Return(value) => {
                    debug!(line = statement.line_number(), "program returned");
                    return Ok(Some(value));
                },
                flow @ (Flow::Break | Flow::Continue) => {
                    debug!(?flow,
                           line = statement.line_number(),
                           "loop control outside of a loop stops the program");
                    return Ok(None);
                },
            }
        }
        Ok(None)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant. Errors raised by
    /// value helpers get the line of the failing node attached.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        let line = expr.line_number();
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, .. } => self.lookup(name).cloned().map_err(|e| e.at(line)),
            Expr::Unary { op, operand, .. } => {
                let value = self.eval(operand)?;
                eval_unary(*op, &value).map_err(|e| e.at(line))
            },
            Expr::Binary { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right).map_err(|e| e.at(line))
            },
            Expr::Call { name, arguments, .. } => {
                let values = arguments.iter()
                                      .map(|argument| self.eval(argument))
                                      .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_function_call(name, &values).map_err(|e| e.at(line))
            },
            Expr::Matrix { rows, .. } => self.eval_matrix_literal(rows)
                                             .map_err(|e| e.at(line)),
            Expr::Transpose { operand, .. } => {
                let value = self.eval(operand)?;
                let Value::Matrix(matrix) = value else {
                    return Err(RuntimeError::TypeError { details: "Transpose requires a matrix".to_string(),
                                                         line:    Some(line), });
                };
                Ok(Value::from(matrix.transpose()))
            },
            Expr::Index { target, indices, .. } => {
                let target = self.eval(target)?;
                let indices = self.eval_indices(indices)?;
                Self::eval_index(&target, &indices).map_err(|e| e.at(line))
            },
        }
    }

    /// Evaluates a matrix literal row by row.
    fn eval_matrix_literal(&mut self, rows: &[Vec<Expr>]) -> EvalResult<Value> {
        let rows = rows.iter()
                       .map(|row| row.iter().map(|element| self.eval(element)).collect())
                       .collect::<EvalResult<Vec<Vec<_>>>>()?;
        Ok(Value::from(Matrix::from_rows(rows)?))
    }

    /// Evaluates a list of index expressions.
    pub(crate) fn eval_indices(&mut self, indices: &[Expr]) -> EvalResult<Vec<Value>> {
        indices.iter().map(|index| self.eval(index)).collect()
    }

    /// Looks up a variable, searching frames from the innermost outwards.
    ///
    /// # Errors
    /// `UnknownVariable` if no frame binds `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.values.get(name))
            .ok_or_else(|| unknown_variable(name))
    }

    /// Mutably borrows a variable, searching frames from the innermost
    /// outwards.
    pub(crate) fn lookup_mut(&mut self, name: &str) -> EvalResult<&mut Value> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.values.get_mut(name))
            .ok_or_else(|| unknown_variable(name))
    }

    /// Assigns to the nearest frame that already binds `name`, or defines it
    /// in the innermost frame.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.frames
                                .iter_mut()
                                .rev()
                                .find_map(|frame| frame.values.get_mut(name))
        {
            *slot = value;
        } else {
            self.define_local(name, value);
        }
    }

    /// Binds `name` in the innermost frame, shadowing outer bindings.
    pub(crate) fn define_local(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.values.insert(name.to_string(), value);
        }
    }

    /// Runs `body` inside a new frame. The frame is popped even when `body`
    /// fails.
    pub(crate) fn with_frame<T>(&mut self,
                                name: &'static str,
                                body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                -> EvalResult<T> {
        trace!(frame = name, depth = self.frames.len(), "push frame");
        self.frames.push(Frame::new(name));
        let result = body(self);
        self.frames.pop();
        trace!(frame = name, depth = self.frames.len(), "pop frame");
        result
    }
}

fn unknown_variable(name: &str) -> RuntimeError {
    RuntimeError::UnknownVariable { details: format!("Undefined variable '{name}'"),
                                    line:    None, }
}
