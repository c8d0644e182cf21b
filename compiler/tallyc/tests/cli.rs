//! End-to-end tests of the `tally` binary.

#![expect(clippy::unwrap_used, reason = "tests unwrap process and file results")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn tally(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .current_dir(dir)
        .env_remove("TALLY_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_program(dir: &Path, source: &str) {
    fs::write(dir.join("main.tl"), source).unwrap();
}

/// The accounting lines of `run`'s stderr, without the timing lines.
fn tally_lines(output: &Output) -> Vec<String> {
    stderr(output)
        .lines()
        .filter(|line| !line.starts_with("elapsed:") && !line.starts_with("rate:"))
        .map(str::to_owned)
        .collect()
}

#[test]
fn run_prints_result_and_tally() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), "let add = fn(a, b) { a + b }; add(2, 3) * 4");

    let output = tally(dir.path(), &["run", "main.tl", "--count"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "20\n");
    assert!(stderr(&output).contains("events: 2"), "{}", stderr(&output));
}

#[test]
fn strategies_report_the_same_tally() {
    let dir = tempfile::tempdir().unwrap();
    write_program(
        dir.path(),
        "for (let i = 0; i < 50; i = i + 1) { fib(i) } sqrt(144)",
    );

    let sync = tally(dir.path(), &["run", "main.tl", "--meter=sync"]);
    let stream = tally(dir.path(), &["run", "main.tl", "--buffer=1"]);
    assert!(sync.status.success());
    assert!(stream.status.success());
    assert_eq!(stdout(&sync), "12\n");
    assert_eq!(stdout(&stream), stdout(&sync));
    assert_eq!(tally_lines(&stream), tally_lines(&sync));
}

#[test]
fn run_reports_elapsed_time_and_work_rate() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), "for (let i = 0; i < 100; i = i + 1) { pow(i, 2) }");

    let output = tally(dir.path(), &["run", "main.tl"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let err = stderr(&output);
    let lines: Vec<&str> = err.lines().collect();
    assert!(lines.iter().any(|line| line.starts_with("elapsed: ")), "{err}");
    let rate = lines
        .iter()
        .find_map(|line| line.strip_prefix("rate:"))
        .unwrap_or_else(|| panic!("no rate line in {err}"));
    assert!(rate.trim_end().ends_with("work/µs"), "{err}");
}

#[test]
fn print_writes_each_argument_on_its_own_line() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), r#"print("x", 1)"#);

    let output = tally(dir.path(), &["run", "main.tl"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "x\n1\n");
}

#[test]
fn printed_values_use_their_display_form() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), r#"print(true, "a" + "b", fn(x) { x }); 7"#);

    let output = tally(dir.path(), &["run", "main.tl"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "true\nab\nfn(x) { x }\n7\n");
}

#[test]
fn saved_results_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), r#"save("answer", 6 * 7); save("name", "tally")"#);

    for _ in 0..2 {
        let output = tally(dir.path(), &["run", "main.tl"]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output), "");
    }

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("results.json")).unwrap())
            .unwrap();
    assert_eq!(
        saved,
        serde_json::json!([
            { "name": "answer", "value": 42 },
            { "name": "name", "value": "tally" },
            { "name": "answer", "value": 42 },
            { "name": "name", "value": "tally" },
        ])
    );
}

#[test]
fn no_save_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), r#"save("a", 1)"#);

    let output = tally(dir.path(), &["run", "main.tl", "--no-save"]);
    assert!(output.status.success());
    assert!(!dir.path().join("results.json").exists());
}

#[test]
fn evaluation_errors_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), "let x = 1; x / 0");

    let output = tally(dir.path(), &["run", "main.tl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ERROR: division by zero"));
}

#[test]
fn parse_errors_show_positions() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), "let x = 1;\nlet = 2;");

    let output = tally(dir.path(), &["run", "main.tl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("main.tl:2:5: error: expected an identifier, found `=`"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn parse_prints_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    write_program(dir.path(), "let a = 1 + 2 * 3; -a");

    let output = tally(dir.path(), &["parse", "main.tl"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "let a = (1 + (2 * 3));\n(-a)\n");
}

#[test]
fn kinds_lists_the_weight_table() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("w.json"), r#"{ "fib": 9.5 }"#).unwrap();

    let output = tally(dir.path(), &["kinds", "--weights=w.json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let listing = stdout(&output);
    assert_eq!(listing.lines().count(), 17);
    assert!(listing.contains("fib"));
    assert!(listing.contains("9.5"));
}

#[test]
fn bad_weights_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("w.json"), r#"{ "modulo": 1.0 }"#).unwrap();
    write_program(dir.path(), "1 + 1");

    let output = tally(dir.path(), &["run", "main.tl", "--weights=w.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally(dir.path(), &["run", "nope.tl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file 'nope.tl'"));
}
