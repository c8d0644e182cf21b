//! Tally driver CLI.

use tallyc::commands::{list_kinds, parse_file, run_file};
use tallyc::{init_tracing, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match RunOptions::parse(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("Usage: tally run <file> [options]");
                std::process::exit(1);
            }
        },
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: tally parse <file>");
                std::process::exit(1);
            }
            parse_file(std::path::Path::new(&args[2]));
        }
        "kinds" => list_kinds(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tally - metered expression evaluator");
    println!();
    println!("Usage: tally <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Evaluate a program and report its work");
    println!("  parse <file>         Print the parsed program");
    println!("  kinds                List operation kinds and their weights");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --meter=<strategy>   sync (default), stream, off");
    println!("  --buffer=<n>         Bounded event channel of n slots (implies stream)");
    println!("  --count              Count events instead of weighting them");
    println!("  --weights=<file>     Load weights from a JSON object");
    println!("  --results=<file>     Append saved results here (default: results.json)");
    println!("  --no-save            Do not write saved results");
    println!();
    println!("Logging:");
    println!("  TALLY_LOG=<filter>   e.g. TALLY_LOG=tally_eval=trace");
    println!();
    println!("Examples:");
    println!("  tally run main.tl");
    println!("  tally run main.tl --meter=stream --buffer=1024");
    println!("  tally run main.tl --weights=weights.json --no-save");
    println!("  tally kinds --weights=weights.json");
}
