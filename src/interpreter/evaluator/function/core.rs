use std::io::Write;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::builtin,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// constructed value.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// The argument counts a builtin accepts.
#[derive(Clone, Copy, Debug)]
pub struct Arity(&'static [usize]);

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BuiltinDef` (internal metadata) and `BUILTIN_TABLE`
/// (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "zeros" => { arity: Arity(&[1, 2]), func: builtin::zeros },
    "ones"  => { arity: Arity(&[1, 2]), func: builtin::ones },
    "eye"   => { arity: Arity(&[1, 2]), func: builtin::eye },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        self.0.contains(&n)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{}", counts.join(" or "))
    }
}

/// Looks up the arity of a builtin by name.
///
/// The type checker uses this to validate calls without running them.
#[must_use]
pub fn builtin_arity(name: &str) -> Option<Arity> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| def.arity)
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a builtin function call.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    ///
    /// # Errors
    /// - `UnknownFunctionError` if no builtin has this name.
    /// - `TypeError` if the number of arguments does not fit the builtin.
    /// - Any error raised by the builtin itself.
    pub fn eval_function_call(name: &str, args: &[Value]) -> EvalResult<Value> {
        let Some(def) = BUILTIN_TABLE.iter().find(|def| def.name == name) else {
            return Err(RuntimeError::UnknownFunctionError { details: format!("Unknown function '{name}'"),
                                                            line:    None, });
        };

        if !def.arity.check(args.len()) {
            let details = format!("'{name}' expects {} arguments, got {}", def.arity, args.len());
            return Err(RuntimeError::TypeError { details,
                                                 line: None });
        }

        trace!(name, arguments = args.len(), "calling builtin");
        (def.func)(args)
    }
}
