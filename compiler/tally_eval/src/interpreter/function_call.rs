//! Call evaluation.

use tally_ir::Expr;

use super::{propagate, Interpreter};
use crate::errors::{not_a_function, wrong_function_arity, wrong_native_arity};
use crate::value::FunctionValue;
use crate::{Environment, Value};

impl Interpreter<'_> {
    /// Callee first, then arguments left to right. The first signal among
    /// them is the result.
    pub(super) fn eval_call_expr(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        env: &Environment,
    ) -> Value {
        let callee = propagate!(self.eval_expr(callee, env));
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(propagate!(self.eval_expr(arg, env)));
        }
        self.apply(&callee, &values, env)
    }

    /// Apply an evaluated callee to evaluated arguments.
    ///
    /// `env` is the caller's frame; only utilities see it.
    pub(crate) fn apply(&mut self, callee: &Value, args: &[Value], env: &Environment) -> Value {
        match callee {
            Value::Function(func) => self.call_function(func, args),
            Value::Utility(utility) => match args {
                [first, second, ..] => utility.call(first, second, env, self.results),
                _ => Value::Error(wrong_native_arity(args.len(), 2)),
            },
            Value::Builtin(builtin) => {
                tracing::trace!(builtin = builtin.name, args = args.len(), "calling builtin");
                let result = builtin.call(args);
                match builtin.meter_kind {
                    Some(kind) if !result.is_error() => self.meter.record(kind),
                    _ => {}
                }
                result
            }
            other => Value::Error(not_a_function(other.type_name())),
        }
    }

    /// Bind parameters in a fresh frame enclosed by the closure's captured
    /// environment, then run the body. A `return` stops here.
    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> Value {
        if args.len() != func.params.len() {
            return Value::Error(wrong_function_arity(func.params.len(), args.len()));
        }
        tracing::trace!(params = func.params.len(), "calling function");
        let call_env = Environment::new_enclosed(&func.env);
        for (param, arg) in func.params.iter().zip(args) {
            call_env.set(param.as_rc().clone(), arg.clone());
        }
        self.eval_block(&func.body, &call_env).unwrap_return()
    }
}
