//! Tally evaluator - a metered tree-walking interpreter.
//!
//! A [`Session`] evaluates parsed programs against a persistent global
//! [`Environment`] and reports each integer operation, string concatenation
//! and metered builtin call to its meter. Language-level failures are
//! values ([`Value::Error`]) and become the program's result; only the
//! meter can fail at the host level.
//!
//! ```text
//! let mut session = Session::new(MeterConfig::default())?;
//! let value = session.run_source("fib(20) + 1")?;
//! let report = session.finish()?;
//! ```

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod result_table;
mod session;
mod stack;
mod unary_operators;
mod utilities;
mod value;

pub use builtins::{lookup_builtin, BuiltinFn, BuiltinFunction, BUILTINS};
pub use environment::Environment;
pub use errors::{ErrorKind, EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use result_table::{ResultRecord, ResultTable};
pub use session::{Session, SessionReport};
pub use utilities::{lookup_utility, UtilityFn, UtilityFunction, UTILITIES};
pub use value::{FunctionValue, Value};
