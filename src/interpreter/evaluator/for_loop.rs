use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Expr, Range, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a `for` statement.
    ///
    /// The range is evaluated once, before the first iteration. A single
    /// `for` frame is pushed for the whole loop and the loop variable is
    /// rebound in it at the start of every iteration, so assignments to the
    /// variable inside the body do not change the iteration sequence.
    ///
    /// The bounds are inclusive in both directions: a positive step runs
    /// while `i <= end`, a negative one while `i >= end`.
    ///
    /// # Errors
    /// - `TypeError` if a bound or the step is not an `int`.
    /// - `InvalidLoopBounds` if the step is zero.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::{evaluator::core::Interpreter, parser::parse_source};
    ///
    /// let outcome = parse_source("for i = 5:1:-2 print i;");
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.run(&outcome.program).unwrap();
    ///
    /// assert_eq!(String::from_utf8(interpreter.into_inner()).unwrap(), "5\n3\n1\n");
    /// ```
    pub fn exec_for(&mut self, var: &str, range: &Range, body: &Statement) -> EvalResult<Flow> {
        let start = self.eval_bound(&range.start)?;
        let end = self.eval_bound(&range.end)?;
        let step = match &range.step {
            Some(step) => self.eval_bound(step)?,
            None => 1,
        };
        if step == 0 {
            return Err(RuntimeError::InvalidLoopBounds { details: "Range step cannot be zero"
                                                                      .to_string(),
                                                         line:    Some(range.line), });
        }

        trace!(var, start, end, step, "entering for loop");

        self.with_frame("for", |interpreter| {
                let mut current = start;
                while (step > 0 && current <= end) || (step < 0 && current >= end) {
                    interpreter.define_local(var, Value::Integer(current));
                    match interpreter.exec_statement(body)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {},
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                    let Some(next) = current.checked_add(step) else {
                        break;
                    };
                    current = next;
                }
                Ok(Flow::Normal)
            })
    }

    /// Evaluates a range bound, which must be an `int`.
    fn eval_bound(&mut self, bound: &Expr) -> EvalResult<i64> {
        let line = bound.line_number();
        match self.eval(bound)? {
            Value::Integer(n) => Ok(n),
            other => {
                let details = format!("Range bounds must be int, found {}", other.type_name());
                Err(RuntimeError::TypeError { details,
                                              line: Some(line) })
            },
        }
    }
}
