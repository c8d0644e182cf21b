#![expect(clippy::unwrap_used, reason = "tests unwrap operator results")]

use super::*;
use crate::errors::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn bang_follows_truthiness() {
    let cases = [
        (Value::TRUE, Value::FALSE),
        (Value::FALSE, Value::TRUE),
        (Value::NULL, Value::TRUE),
        (Value::Int(5), Value::FALSE),
        (Value::Int(0), Value::FALSE),
        (Value::from(""), Value::FALSE),
    ];
    for (operand, expected) in cases {
        assert_eq!(evaluate_unary(&operand, PrefixOp::Not).unwrap(), expected, "!{operand:?}");
    }
}

#[test]
fn negation() {
    assert_eq!(evaluate_unary(&Value::Int(5), PrefixOp::Neg).unwrap(), Value::Int(-5));
    assert_eq!(evaluate_unary(&Value::Int(-5), PrefixOp::Neg).unwrap(), Value::Int(5));
    assert_eq!(
        evaluate_unary(&Value::Int(i64::MIN), PrefixOp::Neg).unwrap(),
        Value::Int(i64::MIN)
    );
}

#[test]
fn negation_of_non_integer() {
    let err = evaluate_unary(&Value::TRUE, PrefixOp::Neg).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedOperator);
    assert_eq!(err.message, "unknown operator: -BOOLEAN");
}
