use super::*;
use crate::errors::ErrorKind;
use pretty_assertions::assert_eq;

fn save_with(table: &mut ResultTable, name: Value, value: Value) -> Value {
    let Some(save) = lookup_utility("save") else {
        panic!("save is not registered");
    };
    save.call(&name, &value, &Environment::new(), table)
}

#[test]
fn save_stores_and_returns_null() {
    let mut table = ResultTable::new();
    let result = save_with(&mut table, "a".into(), Value::Int(5));
    assert_eq!(result, Value::NULL);
    assert_eq!(table.get("a"), Some(&Value::Int(5)));
}

#[test]
fn save_overwrites() {
    let mut table = ResultTable::new();
    save_with(&mut table, "a".into(), Value::Int(5));
    save_with(&mut table, "a".into(), Value::Int(6));
    assert_eq!(table.get("a"), Some(&Value::Int(6)));
}

#[test]
fn save_requires_a_string_name() {
    let mut table = ResultTable::new();
    let result = save_with(&mut table, Value::Int(1), Value::Int(5));
    match result {
        Value::Error(err) => {
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
            assert_eq!(err.message, "arguments to `save` not supported, got INTEGER");
        }
        other => panic!("expected an error, got {other:?}"),
    }
    assert!(table.is_empty());
}

#[test]
fn builtins_and_utilities_do_not_overlap() {
    for utility in UTILITIES {
        assert!(crate::builtins::lookup_builtin(utility.name).is_none());
    }
}
