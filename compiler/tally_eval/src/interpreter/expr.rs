//! Expression evaluation.

use std::rc::Rc;

use tally_ir::{Expr, ForExpr, FunctionLit, Ident, IfExpr, InfixOp};

use super::{propagate, Interpreter};
use crate::builtins::lookup_builtin;
use crate::errors::identifier_not_found;
use crate::operators::{evaluate_binary, metered_kind};
use crate::stack::with_headroom;
use crate::unary_operators::evaluate_unary;
use crate::utilities::lookup_utility;
use crate::value::FunctionValue;
use crate::{Environment, Value};

impl Interpreter<'_> {
    /// Evaluate an expression, growing the stack first if needed.
    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> Value {
        with_headroom(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> Value {
        match expr {
            Expr::Int(n) => Value::Int(*n),
            Expr::Str(text) => Value::Str(Rc::clone(text)),
            Expr::Bool(b) => Value::from_bool(*b),
            Expr::Ident(ident) => resolve_identifier(ident, env),
            Expr::Prefix { op, operand } => {
                let operand = propagate!(self.eval_expr(operand, env));
                Value::from_result(evaluate_unary(&operand, *op))
            }
            Expr::Infix { left, op, right } => self.eval_infix(left, *op, right, env),
            Expr::If(if_expr) => self.eval_if(if_expr, env),
            Expr::For(for_expr) => self.eval_for(for_expr, env),
            Expr::Function(lit) => make_closure(lit, env),
            Expr::Call { callee, args } => self.eval_call_expr(callee, args, env),
        }
    }

    /// Left operand, then right, then the operator. A successful metered
    /// operation records exactly one event.
    fn eval_infix(&mut self, left: &Expr, op: InfixOp, right: &Expr, env: &Environment) -> Value {
        let left = propagate!(self.eval_expr(left, env));
        let right = propagate!(self.eval_expr(right, env));
        let kind = metered_kind(&left, &right, op);
        match evaluate_binary(&left, &right, op) {
            Ok(value) => {
                if let Some(kind) = kind {
                    self.meter.record(kind);
                }
                value
            }
            Err(err) => Value::Error(err),
        }
    }

    fn eval_if(&mut self, if_expr: &IfExpr, env: &Environment) -> Value {
        let condition = propagate!(self.eval_expr(&if_expr.condition, env));
        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Value::NULL
        }
    }

    /// The header and body all run in the current frame, so the loop
    /// variable outlives the loop.
    fn eval_for(&mut self, for_expr: &ForExpr, env: &Environment) -> Value {
        propagate!(self.eval_stmt(&for_expr.init, env));
        loop {
            let condition = propagate!(self.eval_expr(&for_expr.condition, env));
            if !condition.is_truthy() {
                return Value::NULL;
            }
            propagate!(self.eval_block(&for_expr.body, env));
            propagate!(self.eval_stmt(&for_expr.update, env));
        }
    }
}

/// Environment first, then utilities, then builtins.
fn resolve_identifier(ident: &Ident, env: &Environment) -> Value {
    let name = ident.as_str();
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(utility) = lookup_utility(name) {
        return Value::Utility(utility);
    }
    if let Some(builtin) = lookup_builtin(name) {
        return Value::Builtin(builtin);
    }
    Value::Error(identifier_not_found(name))
}

fn make_closure(lit: &FunctionLit, env: &Environment) -> Value {
    Value::Function(Rc::new(FunctionValue {
        params: Rc::clone(&lit.params),
        body: Rc::clone(&lit.body),
        env: env.clone(),
    }))
}
