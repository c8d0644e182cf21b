//! The `parse` command: print the parsed program in canonical form.

use std::path::Path;

use super::{read_file, report_parse_errors};

pub fn parse_file(path: &Path) {
    let source = read_file(path);
    match tally_parse::parse(&source) {
        Ok(program) => println!("{program}"),
        Err(errors) => {
            report_parse_errors(path, &source, &errors);
            std::process::exit(1);
        }
    }
}
