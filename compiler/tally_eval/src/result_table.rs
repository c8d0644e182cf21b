//! Named results saved by a running program.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::Value;

/// Values stored by the `save` utility, keyed by the name the program chose.
/// One table per session; saving an existing name overwrites it.
#[derive(Debug, Default)]
pub struct ResultTable {
    store: FxHashMap<Rc<str>, Value>,
}

/// One saved result in serializable form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultRecord {
    pub name: String,
    pub value: serde_json::Value,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, returning the value it replaced.
    pub fn save(&mut self, name: Rc<str>, value: Value) -> Option<Value> {
        self.store.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.iter().map(|(name, value)| (&**name, value))
    }

    /// Every entry as a record, sorted by name.
    pub fn snapshot(&self) -> Vec<ResultRecord> {
        let mut records: Vec<ResultRecord> = self
            .iter()
            .map(|(name, value)| ResultRecord {
                name: name.to_owned(),
                value: to_json(value),
            })
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}

/// Scalars map to their JSON counterparts; everything else to its rendering.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(n) => serde_json::Value::from(*n),
        Value::Str(text) => serde_json::Value::from(&**text),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Null => serde_json::Value::Null,
        other => serde_json::Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests;
