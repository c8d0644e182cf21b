//! The `run` command: parse and evaluate a Tally source file under a meter.

use std::time::{Duration, Instant};

use tally_eval::{Session, Value};
use tally_meter::Tally;

use super::{fail, read_file, report_parse_errors};
use crate::{append_results, RunOptions};

/// Run a source file.
///
/// The result is printed to stdout unless it is `null`; accounting goes to
/// stderr. The clock covers evaluation and the meter drain, and the work
/// total over that span is reported as a rate. Saved results are appended
/// to the results file even when the program or the meter failed, and any
/// failure exits with status 1.
pub fn run_file(options: &RunOptions) {
    let source = read_file(&options.path);
    let program = match tally_parse::parse(&source) {
        Ok(program) => program,
        Err(errors) => {
            report_parse_errors(&options.path, &source, &errors);
            std::process::exit(1);
        }
    };

    let config = options.meter_config().unwrap_or_else(|err| fail(err));
    let mut session = Session::new(config).unwrap_or_else(|err| fail(err));

    let start = Instant::now();
    let value = session.run(&program);
    let mut failed = false;
    match &value {
        Value::Error(_) => {
            eprintln!("{value}");
            failed = true;
        }
        Value::Null => {}
        _ => println!("{value}"),
    }

    let records = session.results().snapshot();
    let finished = session.finish();
    let elapsed = start.elapsed();
    match finished {
        Ok(report) => print_tally(&report.tally, elapsed),
        Err(err) => {
            eprintln!("error: {err}");
            failed = true;
        }
    }

    if options.save && !records.is_empty() {
        if let Err(err) = append_results(&options.results, &records) {
            eprintln!("error: {err}");
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_tally(tally: &Tally, elapsed: Duration) {
    eprintln!("events: {}", tally.events());
    eprintln!("work:   {:.4}", tally.work());
    for (kind, count) in tally.nonzero() {
        eprintln!("  {:<14}{count}", kind.name());
    }
    eprintln!("elapsed: {elapsed:?}");
    match work_rate(tally.work(), elapsed) {
        Some(rate) => eprintln!("rate:   {rate:.4} work/µs"),
        None => eprintln!("rate:   - work/µs"),
    }
}

/// Work units per microsecond, or `None` if no time was measured.
fn work_rate(work: f64, elapsed: Duration) -> Option<f64> {
    let micros = elapsed.as_secs_f64() * 1e6;
    (micros > 0.0).then(|| work / micros)
}
