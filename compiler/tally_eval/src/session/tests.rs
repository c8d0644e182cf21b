#![expect(clippy::unwrap_used, reason = "tests unwrap session results")]

use super::*;
use crossbeam::channel;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tally_meter::{Aggregation, MeterStrategy, OperationKind, StreamMeter, WeightTable};

const WORKLOAD: &str = r#"
    let total = 0;
    for (let i = 0; i < 20; i = i + 1) {
        let total = total + i * 2;
        if (isPrime(i)) { save("last_prime", i) }
    }
    let greeting = "sum" + ":";
    save("total", total);
    total + len(greeting) + pow(2, 3)
"#;

fn run_with(strategy: MeterStrategy, aggregation: Aggregation) -> (Value, SessionReport) {
    let mut session = Session::new(MeterConfig::new(strategy, aggregation)).unwrap();
    let value = session.run_source(WORKLOAD).unwrap();
    (value, session.finish().unwrap())
}

#[test]
fn strategies_agree_on_the_same_program() {
    let aggregation = Aggregation::Weighted(WeightTable::default());
    let (sync_value, sync) = run_with(MeterStrategy::Sync, aggregation.clone());
    for capacity in [None, Some(0), Some(1), Some(64)] {
        let (value, stream) = run_with(MeterStrategy::Stream { capacity }, aggregation.clone());
        assert_eq!(value, sync_value);
        assert_eq!(stream.tally, sync.tally, "capacity {capacity:?}");
    }
    assert_eq!(sync_value, Value::Int(392));
    assert_eq!(sync.tally.count(OperationKind::IsPrime), 20);
    assert_eq!(sync.tally.count(OperationKind::StringConcat), 1);
}

#[test]
fn results_survive_into_the_report() {
    let (_, report) = run_with(MeterStrategy::Sync, Aggregation::Count);
    assert_eq!(report.results.get("total"), Some(&Value::Int(380)));
    assert_eq!(report.results.get("last_prime"), Some(&Value::Int(19)));
}

#[test]
fn unmetered_session_reports_nothing() {
    let (value, report) = run_with(MeterStrategy::Off, Aggregation::Count);
    assert_eq!(value, Value::Int(392));
    assert_eq!(report.tally.events(), 0);
}

#[test]
fn bindings_persist_across_runs() {
    let mut session = Session::new(MeterConfig::default()).unwrap();
    session.run_source("let x = 40;").unwrap();
    assert_eq!(session.run_source("x + 2").unwrap(), Value::Int(42));
    assert_eq!(session.env().get("x"), Some(Value::Int(40)));
    assert_eq!(session.finish().unwrap().tally.events(), 1);
}

#[test]
fn parse_errors_do_not_run() {
    let mut session = Session::new(MeterConfig::default()).unwrap();
    let errors = session.run_source("let = 1; 2 + 2").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(session.finish().unwrap().tally.events(), 0);
}

#[test]
fn dead_consumer_does_not_change_the_result() {
    let (gone_tx, gone_rx) = channel::bounded::<()>(0);
    let meter = StreamMeter::spawn_with(Some(1), move |events| {
        drop(events);
        let _ = gone_tx.send(());
        tally_meter::Tally::new()
    })
    .unwrap();
    gone_rx.recv().unwrap();

    let mut session = Session::with_meter(meter);
    let value = session.run_source(WORKLOAD).unwrap();
    assert_eq!(value, Value::Int(392));
    assert_eq!(session.results().get("total"), Some(&Value::Int(380)));
    assert!(matches!(
        session.finish(),
        Err(MeterError::ConsumerDisconnected { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counting_strategies_agree_for_any_length(n in 0usize..200) {
        let source = "1 + 1;".repeat(n);
        let mut counts = Vec::new();
        for strategy in [MeterStrategy::Sync, MeterStrategy::Stream { capacity: Some(1) }] {
            let mut session = Session::new(MeterConfig::new(strategy, Aggregation::Count)).unwrap();
            session.run_source(&source).unwrap();
            let tally = session.finish().unwrap().tally;
            counts.push((tally.events(), tally.work()));
        }
        prop_assert_eq!(counts[0], counts[1]);
        prop_assert_eq!(counts[0].0, n as u64);
    }
}
