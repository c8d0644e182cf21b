use super::*;
use crate::errors::ErrorKind;
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[Value]) -> Value {
    match lookup_builtin(name) {
        Some(builtin) => builtin.call(args),
        None => panic!("no builtin named {name}"),
    }
}

fn error_of(value: &Value) -> &EvalError {
    match value {
        Value::Error(err) => err,
        other => panic!("expected an error, got {other:?}"),
    }
}

#[test]
fn every_builtin_is_found_by_name() {
    for builtin in BUILTINS {
        let found = lookup_builtin(builtin.name).map(|b| b.name);
        assert_eq!(found, Some(builtin.name));
    }
    assert!(lookup_builtin("save").is_none());
    assert!(lookup_builtin("puts").is_none());
}

#[test]
fn only_print_is_unmetered() {
    let unmetered: Vec<_> = BUILTINS
        .iter()
        .filter(|b| b.meter_kind.is_none())
        .map(|b| b.name)
        .collect();
    assert_eq!(unmetered, vec!["print"]);
}

mod len {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_bytes() {
        assert_eq!(call("len", &["".into()]), Value::Int(0));
        assert_eq!(call("len", &["four".into()]), Value::Int(4));
        assert_eq!(call("len", &["hello world".into()]), Value::Int(11));
    }

    #[test]
    fn rejects_integers() {
        let result = call("len", &[Value::Int(1)]);
        let err = error_of(&result);
        assert_eq!(err.kind, ErrorKind::WrongArgumentType);
        assert_eq!(err.message, "argument to `len` not supported, got INTEGER");
    }

    #[test]
    fn checks_arity() {
        let result = call("len", &["one".into(), "two".into()]);
        assert_eq!(
            error_of(&result).message,
            "wrong number of arguments. got=2, want=1"
        );
        let result = call("len", &[]);
        assert_eq!(error_of(&result).kind, ErrorKind::ArityMismatch);
    }
}

mod numeric {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pow_truncates() {
        assert_eq!(call("pow", &[Value::Int(2), Value::Int(10)]), Value::Int(1024));
        assert_eq!(call("pow", &[Value::Int(-2), Value::Int(3)]), Value::Int(-8));
        assert_eq!(call("pow", &[Value::Int(2), Value::Int(-1)]), Value::Int(0));
    }

    #[test]
    fn pow_saturates() {
        assert_eq!(call("pow", &[Value::Int(10), Value::Int(400)]), Value::Int(i64::MAX));
    }

    #[test]
    fn pow_reports_its_own_name() {
        let result = call("pow", &[Value::Int(2), Value::TRUE]);
        assert_eq!(
            error_of(&result).message,
            "argument to `pow` not supported, got BOOLEAN"
        );
        let result = call("pow", &[Value::Int(2)]);
        assert_eq!(
            error_of(&result).message,
            "wrong number of arguments. got=1, want=2"
        );
    }

    #[test]
    fn sqrt_truncates_and_maps_nan_to_zero() {
        assert_eq!(call("sqrt", &[Value::Int(17)]), Value::Int(4));
        assert_eq!(call("sqrt", &[Value::Int(-4)]), Value::Int(0));
    }

    #[test]
    fn trig_truncates() {
        assert_eq!(call("sin", &[Value::Int(0)]), Value::Int(0));
        assert_eq!(call("sin", &[Value::Int(2)]), Value::Int(0));
        assert_eq!(call("tan", &[Value::Int(0)]), Value::Int(0));
        assert_eq!(call("tan", &[Value::Int(1)]), Value::Int(1));
    }

    #[test]
    fn each_builtin_names_itself() {
        for name in ["sqrt", "sin", "tan", "rand", "fib", "isPrime"] {
            let result = call(name, &["x".into()]);
            assert_eq!(
                error_of(&result).message,
                format!("argument to `{name}` not supported, got STRING")
            );
        }
    }
}

mod rand {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stays_in_sixteen_bits() {
        for _ in 0..64 {
            match call("rand", &[Value::Int(0)]) {
                Value::Int(n) => assert!((0..=0xFFFF).contains(&n), "{n} out of range"),
                other => panic!("expected an integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn requires_one_integer() {
        let result = call("rand", &[]);
        assert_eq!(error_of(&result).kind, ErrorKind::ArityMismatch);
    }
}

mod fib {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequence() {
        let got: Vec<i64> = (0..10).map(fibonacci).collect();
        assert_eq!(got, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(call("fib", &[Value::Int(50)]), Value::Int(12_586_269_025));
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(call("fib", &[Value::Int(0)]), Value::Int(0));
    }

    #[test]
    fn negative_hits_the_base_case() {
        assert_eq!(fibonacci(-1), 1);
        assert_eq!(fibonacci(i64::MIN), 1);
        assert_eq!(call("fib", &[Value::Int(-3)]), Value::Int(1));
    }

    #[test]
    fn wraps_past_i64() {
        // fib(93) is the first value that exceeds i64::MAX.
        assert_eq!(fibonacci(92), 7_540_113_804_746_346_429);
        assert!(fibonacci(93) < 0);
    }
}

mod is_prime {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_numbers() {
        let primes: Vec<i64> = (-3..30).filter(|&n| trial_division(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn squares_of_primes_are_composite() {
        assert!(!trial_division(49));
        assert!(!trial_division(7919 * 7919));
        assert!(trial_division(7919));
    }

    #[test]
    fn returns_booleans() {
        assert_eq!(call("isPrime", &[Value::Int(97)]), Value::TRUE);
        assert_eq!(call("isPrime", &[Value::Int(1)]), Value::FALSE);
    }
}

#[test]
fn print_returns_null_for_any_arguments() {
    assert_eq!(call("print", &[]), Value::NULL);
    assert_eq!(call("print", &["hi".into(), Value::Int(3)]), Value::NULL);
}
