//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the closed set of operand types. Each
//! successful integer operation and string concatenation is metered; the
//! kind to meter is computed by [`metered_kind`] before the operation runs
//! and recorded by the caller only when it succeeds.

use tally_ir::InfixOp;
use tally_meter::OperationKind;

use crate::errors::{
    division_by_zero, type_mismatch, unknown_infix_operator, EvalResult,
};
use crate::Value;

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: InfixOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ if op.is_equality() => Ok(eval_identity(left, right, op)),
        _ if left.type_name() != right.type_name() => {
            Err(type_mismatch(left.type_name(), op, right.type_name()))
        }
        _ => Err(unknown_infix_operator(
            left.type_name(),
            op,
            right.type_name(),
        )),
    }
}

/// The operation kind a successful `left op right` accounts as, if any.
pub fn metered_kind(left: &Value, right: &Value, op: InfixOp) -> Option<OperationKind> {
    match (left, right, op) {
        (Value::Int(_), Value::Int(_), _) => Some(int_kind(op)),
        (Value::Str(_), Value::Str(_), InfixOp::Add) => Some(OperationKind::StringConcat),
        _ => None,
    }
}

fn int_kind(op: InfixOp) -> OperationKind {
    match op {
        InfixOp::Add => OperationKind::Add,
        InfixOp::Sub => OperationKind::Sub,
        InfixOp::Mul => OperationKind::Mul,
        InfixOp::Div => OperationKind::Div,
        InfixOp::Lt => OperationKind::LessThan,
        InfixOp::Gt => OperationKind::GreaterThan,
        InfixOp::Eq => OperationKind::Equal,
        InfixOp::NotEq => OperationKind::NotEqual,
    }
}

/// Binary operations on integers. Arithmetic wraps on overflow.
fn eval_int_binary(a: i64, b: i64, op: InfixOp) -> EvalResult {
    let value = match op {
        InfixOp::Add => Value::Int(a.wrapping_add(b)),
        InfixOp::Sub => Value::Int(a.wrapping_sub(b)),
        InfixOp::Mul => Value::Int(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Int(a.wrapping_div(b))
        }
        InfixOp::Lt => Value::from_bool(a < b),
        InfixOp::Gt => Value::from_bool(a > b),
        InfixOp::Eq => Value::from_bool(a == b),
        InfixOp::NotEq => Value::from_bool(a != b),
    };
    Ok(value)
}

/// Strings support concatenation only.
fn eval_string_binary(a: &str, b: &str, op: InfixOp) -> EvalResult {
    if op != InfixOp::Add {
        return Err(unknown_infix_operator("STRING", op, "STRING"));
    }
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    Ok(Value::string(joined))
}

fn eval_identity(left: &Value, right: &Value, op: InfixOp) -> Value {
    let same = left.identical(right);
    Value::from_bool(if op == InfixOp::Eq { same } else { !same })
}
