//! The `kinds` command: print every operation kind with its active weight.

use tally_meter::{Aggregation, WeightTable};

use super::fail;
use crate::options::aggregation;

/// Accepts the same `--count` and `--weights=<file>` flags as `run`.
pub fn list_kinds(args: &[String]) {
    let mut count = false;
    let mut weights = None;
    for arg in args {
        if arg == "--count" {
            count = true;
        } else if let Some(path) = arg.strip_prefix("--weights=") {
            weights = Some(std::path::PathBuf::from(path));
        } else {
            fail(format!("unexpected argument '{arg}'"));
        }
    }

    let table = match aggregation(count, weights.as_deref()) {
        Ok(Aggregation::Weighted(table)) => table,
        Ok(Aggregation::Count) => WeightTable::uniform(1.0),
        Err(err) => fail(err),
    };
    print!("{table}");
}
