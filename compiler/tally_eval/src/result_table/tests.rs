#![expect(clippy::unwrap_used, reason = "tests unwrap serialization")]

use super::*;
use crate::Environment;
use pretty_assertions::assert_eq;
use serde_json::json;
use tally_ir::{Block, Ident};

use crate::value::FunctionValue;

#[test]
fn save_then_get() {
    let mut table = ResultTable::new();
    assert!(table.is_empty());
    assert!(table.save("a".into(), Value::Int(5)).is_none());
    assert_eq!(table.get("a"), Some(&Value::Int(5)));
    assert_eq!(table.get("b"), None);
}

#[test]
fn resaving_overwrites() {
    let mut table = ResultTable::new();
    table.save("a".into(), Value::Int(5));
    let previous = table.save("a".into(), Value::Int(6));
    assert_eq!(previous, Some(Value::Int(5)));
    assert_eq!(table.get("a"), Some(&Value::Int(6)));
    assert_eq!(table.len(), 1);
}

#[test]
fn snapshot_is_sorted_and_typed() {
    let mut table = ResultTable::new();
    table.save("total".into(), Value::Int(42));
    table.save("greeting".into(), "hi".into());
    table.save("flag".into(), Value::TRUE);
    table.save("nothing".into(), Value::NULL);

    let json = serde_json::to_value(table.snapshot()).unwrap();
    assert_eq!(
        json,
        json!([
            { "name": "flag", "value": true },
            { "name": "greeting", "value": "hi" },
            { "name": "nothing", "value": null },
            { "name": "total", "value": 42 },
        ])
    );
}

#[test]
fn functions_snapshot_as_their_rendering() {
    let func = FunctionValue {
        params: vec![Ident::from("x")].into(),
        body: Block::default().into(),
        env: Environment::new(),
    };
    let mut table = ResultTable::new();
    table.save("f".into(), Value::Function(func.into()));

    let records = table.snapshot();
    assert_eq!(records[0].value, json!("fn(x) { }"));
}
