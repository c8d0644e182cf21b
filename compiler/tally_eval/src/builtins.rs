//! Builtin native functions.
//!
//! A fixed, process-wide table. Each builtin checks its own arity and
//! argument types and reports mismatches as language-level errors. Builtins
//! with a `meter_kind` are accounted once per successful call.

use tally_meter::OperationKind;

use crate::errors::{unsupported_argument, wrong_native_arity, EvalError, EvalResult};
use crate::Value;

/// Native implementation of a builtin.
pub type BuiltinFn = fn(&[Value]) -> EvalResult;

/// A named native function.
pub struct BuiltinFunction {
    pub name: &'static str,
    /// Kind accounted for each successful call; `None` for unmetered builtins.
    pub meter_kind: Option<OperationKind>,
    func: BuiltinFn,
}

impl BuiltinFunction {
    /// Invoke with the full argument list. Failures come back as
    /// [`Value::Error`].
    pub fn call(&self, args: &[Value]) -> Value {
        Value::from_result((self.func)(args))
    }
}

/// Every builtin, by name.
pub static BUILTINS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "len",
        meter_kind: Some(OperationKind::Len),
        func: len,
    },
    BuiltinFunction {
        name: "pow",
        meter_kind: Some(OperationKind::Pow),
        func: pow,
    },
    BuiltinFunction {
        name: "sqrt",
        meter_kind: Some(OperationKind::Sqrt),
        func: sqrt,
    },
    BuiltinFunction {
        name: "sin",
        meter_kind: Some(OperationKind::Sin),
        func: sin,
    },
    BuiltinFunction {
        name: "tan",
        meter_kind: Some(OperationKind::Tan),
        func: tan,
    },
    BuiltinFunction {
        name: "rand",
        meter_kind: Some(OperationKind::Rand),
        func: rand,
    },
    BuiltinFunction {
        name: "fib",
        meter_kind: Some(OperationKind::Fib),
        func: fib,
    },
    BuiltinFunction {
        name: "isPrime",
        meter_kind: Some(OperationKind::IsPrime),
        func: is_prime,
    },
    BuiltinFunction {
        name: "print",
        meter_kind: None,
        func: print,
    },
];

pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

// Argument helpers

fn int_arg(builtin: &str, arg: &Value) -> Result<i64, EvalError> {
    match arg {
        Value::Int(n) => Ok(*n),
        other => Err(unsupported_argument(builtin, other.type_name())),
    }
}

/// The single integer argument of a unary numeric builtin.
fn single_int(builtin: &str, args: &[Value]) -> Result<i64, EvalError> {
    match args {
        [arg] => int_arg(builtin, arg),
        _ => Err(wrong_native_arity(args.len(), 1)),
    }
}

/// Float-to-int truncation: saturating at the `i64` bounds, NaN to 0.
#[inline]
fn truncate(x: f64) -> Value {
    Value::Int(x as i64)
}

// Implementations

fn len(args: &[Value]) -> EvalResult {
    match args {
        [Value::Str(text)] => Ok(Value::Int(i64::try_from(text.len()).unwrap_or(i64::MAX))),
        [other] => Err(unsupported_argument("len", other.type_name())),
        _ => Err(wrong_native_arity(args.len(), 1)),
    }
}

fn pow(args: &[Value]) -> EvalResult {
    let [base, exponent] = args else {
        return Err(wrong_native_arity(args.len(), 2));
    };
    let base = int_arg("pow", base)?;
    let exponent = int_arg("pow", exponent)?;
    Ok(truncate((base as f64).powf(exponent as f64)))
}

fn sqrt(args: &[Value]) -> EvalResult {
    let n = single_int("sqrt", args)?;
    Ok(truncate((n as f64).sqrt()))
}

fn sin(args: &[Value]) -> EvalResult {
    let n = single_int("sin", args)?;
    Ok(truncate((n as f64).sin()))
}

fn tan(args: &[Value]) -> EvalResult {
    let n = single_int("tan", args)?;
    Ok(truncate((n as f64).tan()))
}

/// Uniform in `0..=0xFFFF` from OS entropy. The argument is checked but
/// otherwise unused.
fn rand(args: &[Value]) -> EvalResult {
    single_int("rand", args)?;
    let n = match getrandom::u32() {
        Ok(bits) => i64::from(bits & 0xFFFF),
        Err(err) => {
            tracing::debug!(%err, "entropy source failed; rand returns 0");
            0
        }
    };
    Ok(Value::Int(n))
}

fn fib(args: &[Value]) -> EvalResult {
    let n = single_int("fib", args)?;
    Ok(Value::Int(fibonacci(n)))
}

/// Iterative Fibonacci with wrapping arithmetic. `fibonacci(0) == 0`; every
/// negative `n` falls into the `n <= 2` base case and yields 1.
pub(crate) fn fibonacci(n: i64) -> i64 {
    match n {
        0 => return 0,
        ..=2 => return 1,
        _ => {}
    }
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 1..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

fn is_prime(args: &[Value]) -> EvalResult {
    let n = single_int("isPrime", args)?;
    Ok(Value::from_bool(trial_division(n)))
}

/// Primality by trial division up to the integer square root.
pub(crate) fn trial_division(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n.unsigned_abs();
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

fn print(args: &[Value]) -> EvalResult {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::NULL)
}

#[cfg(test)]
mod tests;
