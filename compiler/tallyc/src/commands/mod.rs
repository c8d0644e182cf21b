//! Command implementations for the `tally` binary.
//!
//! Commands report their own failures on stderr and exit with status 1.

mod kinds;
mod parse;
mod run;

pub use kinds::list_kinds;
pub use parse::parse_file;
pub use run::run_file;

use std::fmt;
use std::path::Path;

use tally_parse::ParseErrors;

/// Read a source file or exit with a readable message.
pub(crate) fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let path = path.display();
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            fail(msg)
        }
    }
}

/// Print each parse error with its source position.
pub(crate) fn report_parse_errors(path: &Path, source: &str, errors: &ParseErrors) {
    for err in errors.iter() {
        let (line, col) = err.span().line_col(source);
        eprintln!("{}:{line}:{col}: error: {err}", path.display());
    }
}

pub(crate) fn fail(message: impl fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
