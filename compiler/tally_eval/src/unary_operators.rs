//! Unary operator implementations for the evaluator.
//!
//! Unary operators are never metered.

use tally_ir::PrefixOp;

use crate::errors::{unknown_prefix_operator, EvalResult};
use crate::Value;

/// Evaluate `op operand`.
pub fn evaluate_unary(operand: &Value, op: PrefixOp) -> EvalResult {
    match (operand, op) {
        (_, PrefixOp::Not) => Ok(Value::from_bool(!operand.is_truthy())),
        (Value::Int(n), PrefixOp::Neg) => Ok(Value::Int(n.wrapping_neg())),
        (_, PrefixOp::Neg) => Err(unknown_prefix_operator(op, operand.type_name())),
    }
}

#[cfg(test)]
mod tests;
