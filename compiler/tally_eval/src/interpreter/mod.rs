//! Tree-walking interpreter.
//!
//! The interpreter walks the syntax tree directly, producing [`Value`]s.
//! `Return` and `Error` values are signals: every step that evaluates a
//! child hands a signal straight back to its caller without looking at it
//! further. A function call consumes `Return`; the program root consumes
//! both.
//!
//! Metering happens at the operation sites, after an operation succeeds.

mod expr;
mod function_call;

use tally_ir::{Block, LetStmt, Program, Stmt};
use tally_meter::Meter;

use crate::{Environment, ResultTable, Value};

/// Evaluate `$value` and return it from the enclosing function if it is a
/// signal.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_signal() {
            return value;
        }
        value
    }};
}
pub(crate) use propagate;

/// Evaluation state borrowed from a session for one run.
pub struct Interpreter<'a> {
    meter: &'a dyn Meter,
    results: &'a mut ResultTable,
}

impl<'a> Interpreter<'a> {
    pub fn new(meter: &'a dyn Meter, results: &'a mut ResultTable) -> Self {
        Interpreter { meter, results }
    }

    /// Evaluate every statement in `env`.
    ///
    /// Stops at the first `return` or error. The result is the last
    /// statement's value with any `Return` wrapper removed; an empty program
    /// evaluates to `null`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Value {
        let mut result = Value::NULL;
        for stmt in &program.statements {
            result = self.eval_stmt(stmt, env);
            match result {
                Value::Return(inner) => return *inner,
                Value::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    /// Evaluate a block in `env`. Blocks share their enclosing frame.
    pub(crate) fn eval_block(&mut self, block: &Block, env: &Environment) -> Value {
        let mut result = Value::NULL;
        for stmt in &block.statements {
            result = propagate!(self.eval_stmt(stmt, env));
        }
        result
    }

    pub(crate) fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> Value {
        match stmt {
            Stmt::Let(let_stmt) => self.eval_let(let_stmt, env),
            Stmt::Return(expr) => {
                let value = propagate!(self.eval_expr(expr, env));
                Value::Return(Box::new(value))
            }
            Stmt::Expr(expr) => self.eval_expr(expr, env),
        }
    }

    fn eval_let(&mut self, let_stmt: &LetStmt, env: &Environment) -> Value {
        let value = propagate!(self.eval_expr(&let_stmt.value, env));
        env.set(let_stmt.name.as_rc().clone(), value);
        Value::NULL
    }
}
