//! Utility functions: natives that see the session state.
//!
//! Unlike builtins, a utility receives the caller's environment and the
//! session's [`ResultTable`]. Utilities take exactly their first two
//! arguments; the interpreter rejects calls with fewer.

use crate::errors::{save_name_not_string, EvalResult};
use crate::{Environment, ResultTable, Value};

/// Native implementation of a utility.
pub type UtilityFn = fn(&Value, &Value, &Environment, &mut ResultTable) -> EvalResult;

/// A named session-aware native function.
pub struct UtilityFunction {
    pub name: &'static str,
    func: UtilityFn,
}

impl UtilityFunction {
    pub fn call(
        &self,
        first: &Value,
        second: &Value,
        env: &Environment,
        results: &mut ResultTable,
    ) -> Value {
        Value::from_result((self.func)(first, second, env, results))
    }
}

/// Every utility, by name.
pub static UTILITIES: &[UtilityFunction] = &[UtilityFunction {
    name: "save",
    func: save,
}];

pub fn lookup_utility(name: &str) -> Option<&'static UtilityFunction> {
    UTILITIES.iter().find(|utility| utility.name == name)
}

/// `save(name, value)`: record `value` under `name` in the result table.
fn save(name: &Value, value: &Value, _env: &Environment, results: &mut ResultTable) -> EvalResult {
    let Value::Str(name) = name else {
        return Err(save_name_not_string(name.type_name()));
    };
    tracing::trace!(name = &**name, "saving result");
    results.save(name.clone(), value.clone());
    Ok(Value::NULL)
}

#[cfg(test)]
mod tests;
