use super::*;
use crate::errors::{division_by_zero, ErrorKind};
use crate::{lookup_builtin, lookup_utility};
use pretty_assertions::assert_eq;

fn closure(body: Rc<Block>, env: &Environment) -> Value {
    Value::Function(Rc::new(FunctionValue {
        params: vec![Ident::from("x")].into(),
        body,
        env: env.clone(),
    }))
}

#[test]
fn truthiness() {
    assert!(!Value::NULL.is_truthy());
    assert!(!Value::FALSE.is_truthy());
    assert!(Value::TRUE.is_truthy());
    assert!(Value::Int(0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn inspect_rendering() {
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(Value::NULL.to_string(), "null");
    assert_eq!(Value::Error(division_by_zero()).to_string(), "ERROR: division by zero");
    assert_eq!(
        Value::Return(Box::new(Value::TRUE)).to_string(),
        "true"
    );
    let Some(len) = lookup_builtin("len") else {
        panic!("len is not registered");
    };
    assert_eq!(Value::Builtin(len).to_string(), "builtin function");
}

#[test]
fn signals() {
    let ret = Value::Return(Box::new(Value::Int(1)));
    assert!(ret.is_signal());
    assert!(Value::Error(division_by_zero()).is_signal());
    assert!(!Value::NULL.is_signal());
    assert_eq!(ret.unwrap_return(), Value::Int(1));
    assert_eq!(Value::Int(2).unwrap_return(), Value::Int(2));
}

#[test]
fn from_result_folds_errors() {
    match Value::from_result(Err(division_by_zero())) {
        Value::Error(err) => assert_eq!(err.kind, ErrorKind::ArithmeticError),
        other => panic!("expected an error, got {other:?}"),
    }
    assert_eq!(Value::from_result(Ok(Value::Int(1))), Value::Int(1));
}

#[test]
fn functions_are_identical_only_to_themselves() {
    let env = Environment::new();
    let body = Rc::new(Block::default());
    let f = closure(Rc::clone(&body), &env);

    assert!(f.identical(&f.clone()));
    assert!(f.identical(&closure(Rc::clone(&body), &env)));
    assert!(!f.identical(&closure(Rc::new(Block::default()), &env)));
    assert!(!f.identical(&closure(body, &Environment::new())));
}

#[test]
fn natives_are_identical_by_name() {
    let (Some(len), Some(pow), Some(save)) =
        (lookup_builtin("len"), lookup_builtin("pow"), lookup_utility("save"))
    else {
        panic!("natives missing");
    };
    assert!(Value::Builtin(len).identical(&Value::Builtin(len)));
    assert!(!Value::Builtin(len).identical(&Value::Builtin(pow)));
    assert!(Value::Utility(save).identical(&Value::Utility(save)));
    assert!(!Value::Int(1).identical(&Value::Int(1)));
}

#[test]
fn debug_does_not_descend_into_closures() {
    let env = Environment::new();
    let f = closure(Rc::new(Block::default()), &env);
    env.set("f".into(), f.clone());
    assert_eq!(format!("{f:?}"), "Function(fn(x) { })");
}
