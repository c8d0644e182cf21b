//! Centralized error constructors for the evaluator.
//!
//! Every language-level failure is built here. The evaluator carries them as
//! [`Value::Error`](crate::Value::Error), so they surface as program results
//! rather than host faults.

use tally_ir::{InfixOp, PrefixOp};
use thiserror::Error;

use crate::Value;

/// Result of a primitive operation.
pub type EvalResult = Result<Value, EvalError>;

/// Category of a language-level error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operands of different types under a non-equality operator.
    TypeMismatch,
    /// Operator not defined for the operand type.
    UnsupportedOperator,
    /// Division by zero.
    ArithmeticError,
    /// Identifier bound nowhere.
    NameNotFound,
    /// Call of a non-callable value.
    NotCallable,
    /// Wrong number of arguments.
    ArityMismatch,
    /// Builtin argument of the wrong type.
    WrongArgumentType,
}

/// A language-level error: its category and the message shown to users.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
        }
    }
}

// Operator Errors

#[cold]
pub fn type_mismatch(left: &str, op: InfixOp, right: &str) -> EvalError {
    EvalError::new(
        ErrorKind::TypeMismatch,
        format!("type mismatch: {left} {op} {right}"),
    )
}

#[cold]
pub fn unknown_infix_operator(left: &str, op: InfixOp, right: &str) -> EvalError {
    EvalError::new(
        ErrorKind::UnsupportedOperator,
        format!("unknown operator: {left} {op} {right}"),
    )
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &str) -> EvalError {
    EvalError::new(
        ErrorKind::UnsupportedOperator,
        format!("unknown operator: {op}{operand}"),
    )
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(ErrorKind::ArithmeticError, "division by zero")
}

// Name and Call Errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::new(
        ErrorKind::NameNotFound,
        format!("identifier not found: {name}"),
    )
}

#[cold]
pub fn not_a_function(type_name: &str) -> EvalError {
    EvalError::new(
        ErrorKind::NotCallable,
        format!("not a function: {type_name}"),
    )
}

/// Arity error for user-defined functions.
#[cold]
pub fn wrong_function_arity(want: usize, got: usize) -> EvalError {
    EvalError::new(
        ErrorKind::ArityMismatch,
        format!("wrong number of arguments: want={want}, got={got}"),
    )
}

/// Arity error for builtins and utilities.
#[cold]
pub fn wrong_native_arity(got: usize, want: usize) -> EvalError {
    EvalError::new(
        ErrorKind::ArityMismatch,
        format!("wrong number of arguments. got={got}, want={want}"),
    )
}

#[cold]
pub fn unsupported_argument(builtin: &str, type_name: &str) -> EvalError {
    EvalError::new(
        ErrorKind::WrongArgumentType,
        format!("argument to `{builtin}` not supported, got {type_name}"),
    )
}

#[cold]
pub fn save_name_not_string(type_name: &str) -> EvalError {
    EvalError::new(
        ErrorKind::TypeMismatch,
        format!("arguments to `save` not supported, got {type_name}"),
    )
}
