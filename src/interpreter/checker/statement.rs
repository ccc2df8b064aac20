use crate::{
    ast::{AssignOperator, Expr, LValue, Literal, Range, Statement},
    interpreter::checker::{core::TypeChecker, types::Type},
};

impl TypeChecker {
    /// Checks one statement, recording any diagnostics.
    ///
    /// `{ ... }` blocks and loop bodies are checked in a child frame; a loop
    /// frame is what makes `break` and `continue` legal.
    pub fn check_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Assign { target, op, value, line } => {
                let value = self.check_expr(value);
                match target {
                    LValue::Variable { name, .. } => self.check_variable_assign(name, *op, value, *line),
                    LValue::Index { name, indices, .. } => {
                        self.check_index_assign(name, indices, *op, value, *line);
                    },
                }
            },
            Statement::Print { values, .. } => {
                for value in values {
                    self.check_expr(value);
                }
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                self.check_condition(condition, "if");
                self.check_statement(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_statement(else_branch);
                }
            },
            Statement::While { condition, body, .. } => {
                self.check_condition(condition, "while");
                self.with_frame(true, |checker| checker.check_statement(body));
            },
            Statement::For { var, range, body, .. } => {
                let Type::Range(bound) = self.check_range(range) else {
                    return;
                };
                self.with_frame(true, |checker| {
                        checker.scope.declare(var, Some(*bound));
                        checker.check_statement(body);
                    });
            },
            Statement::Block { statements, .. } => {
                self.with_frame(false, |checker| {
                        for statement in statements {
                            checker.check_statement(statement);
                        }
                    });
            },
            Statement::Break { line } => self.check_loop_control("Break", *line),
            Statement::Continue { line } => self.check_loop_control("Continue", *line),
            Statement::Return { value, .. } => {
                self.check_expr(value);
            },
            Statement::Empty { .. } => {},
        }
    }

    /// `x = e` fixes the type of `x` on first assignment; later plain
    /// assignments must match it. `x op= e` must produce the type of `x`.
    fn check_variable_assign(&mut self,
                             name: &str,
                             op: AssignOperator,
                             value: Option<Type>,
                             line: usize) {
        let current = self.scope.lookup(name).cloned();
        match (op.binary(), current) {
            (None, None) => self.scope.declare(name, value),
            (None, Some(None)) => self.scope.refine(name, value),
            (None, Some(Some(declared))) => {
                if let Some(value) = value
                   && !declared.accepts(&value)
                {
                    self.error(format!("Cannot assign {value} to {declared}"), line);
                }
            },
            (Some(_), None) => {
                self.error(format!("Undefined variable '{name}'"), line);
                self.scope.declare(name, None);
            },
            (Some(_), Some(None)) => {},
            (Some(binary), Some(Some(declared))) => {
                if let Some(value) = value {
                    let result = self.check_binary(binary, &declared, &value, line);
                    self.check_compound_result(op, &declared, result, line);
                }
            },
        }
    }

    /// `m[i] = e` and `m[i, j] = e`. An `int` may be stored into a `float`
    /// element.
    fn check_index_assign(&mut self,
                          name: &str,
                          indices: &[Expr],
                          op: AssignOperator,
                          value: Option<Type>,
                          line: usize) {
        let target = match self.scope.lookup(name).cloned() {
            Some(target) => target,
            None => {
                self.error(format!("Undefined variable '{name}'"), line);
                None
            },
        };
        let Some(slot) = self.check_index(target, indices, Some(name), line) else {
            return;
        };
        let Some(value) = value else {
            return;
        };

        match op.binary() {
            None => {
                let widening = slot == Type::Float && value == Type::Int;
                if !widening && !slot.accepts(&value) {
                    self.error(format!("Cannot assign {value} to {slot}"), line);
                }
            },
            Some(binary) => {
                let result = self.check_binary(binary, &slot, &value, line);
                self.check_compound_result(op, &slot, result, line);
            },
        }
    }

    fn check_compound_result(&mut self,
                             op: AssignOperator,
                             declared: &Type,
                             result: Option<Type>,
                             line: usize) {
        if let Some(result) = result
           && !declared.accepts(&result)
        {
            self.error(format!("Result of '{op}' ({result}) not assignable to {declared}"), line);
        }
    }

    fn check_condition(&mut self, condition: &Expr, context: &str) {
        if let Some(ty) = self.check_expr(condition)
           && ty != Type::Bool
        {
            self.error(format!("Expected bool in {context} condition, got {ty}"),
                       condition.line_number());
        }
    }

    /// Ranges only iterate integers, so every bound must be `int`. A literal
    /// zero step can never terminate.
    fn check_range(&mut self, range: &Range) -> Type {
        for (bound, what) in [(Some(&range.start), "start"),
                              (Some(&range.end), "end"),
                              (range.step.as_ref(), "step")]
        {
            let Some(bound) = bound else {
                continue;
            };
            if let Some(ty) = self.check_expr(bound)
               && ty != Type::Int
            {
                self.error(format!("Range {what} must be int, found {ty}"), range.line);
            }
        }

        if let Some(Expr::Literal { value: Literal::Int(0),
                                    .. }) = &range.step
        {
            self.error("Range step cannot be zero", range.line);
        }
        Type::Range(Box::new(Type::Int))
    }

    fn check_loop_control(&mut self, keyword: &str, line: usize) {
        if !self.scope.in_loop() {
            self.error(format!("{keyword} outside of the \"while\" or \"for\" loop"), line);
        }
    }
}
