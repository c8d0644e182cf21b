//! Runtime values.

use std::fmt;
use std::rc::Rc;

use tally_ir::{Block, Ident};

use crate::builtins::BuiltinFunction;
use crate::errors::{EvalError, EvalResult};
use crate::utilities::UtilityFunction;
use crate::Environment;

/// A runtime value.
///
/// `Return` and `Error` are control-flow signals. They short-circuit every
/// enclosing evaluation step until a function boundary (for `Return`) or the
/// program root consumes them, and they never wrap one another.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Null,
    Function(Rc<FunctionValue>),
    Builtin(&'static BuiltinFunction),
    Utility(&'static UtilityFunction),
    Return(Box<Value>),
    Error(EvalError),
}

/// A closure: parameters and body shared with the literal it came from,
/// plus the environment it was created in.
pub struct FunctionValue {
    pub params: Rc<[Ident]>,
    pub body: Rc<Block>,
    pub env: Environment,
}

impl Value {
    pub const NULL: Value = Value::Null;
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);

    #[inline]
    pub fn from_bool(b: bool) -> Value {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn string(text: impl Into<Rc<str>>) -> Value {
        Value::Str(text.into())
    }

    /// Fold a primitive-operation result into the value domain.
    #[inline]
    pub fn from_result(result: EvalResult) -> Value {
        result.unwrap_or_else(Value::Error)
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Str(_) => "STRING",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Utility(_) => "UTILITY",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    /// `null` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether this is a `Return` or `Error` signal.
    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Value::Return(_) | Value::Error(_))
    }

    /// Strip a `Return` wrapper.
    #[inline]
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => *inner,
            other => other,
        }
    }

    /// Identity comparison, the fallback for `==` and `!=` between values
    /// that have no structural comparison.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => {
                Rc::ptr_eq(&a.body, &b.body) && a.env.ptr_eq(&b.env)
            }
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Utility(a), Value::Utility(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => self.identical(other),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::string(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(text) => f.write_str(text),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Function(func) => write!(f, "{func}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Utility(_) => f.write_str("utility function"),
            Value::Return(inner) => write!(f, "{inner}"),
            Value::Error(err) => write!(f, "ERROR: {}", err.message),
        }
    }
}

// Closure environments can be cyclic; Debug never descends into them.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(text) => write!(f, "Str({:?})", &**text),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Function(func) => write!(f, "Function({func})"),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Value::Utility(utility) => write!(f, "Utility({})", utility.name),
            Value::Return(inner) => f.debug_tuple("Return").field(inner).finish(),
            Value::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.body)
    }
}

#[cfg(test)]
mod tests;
