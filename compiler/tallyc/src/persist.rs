//! Appending saved results to a JSON array file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tally_eval::ResultRecord;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot read results file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write results file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("results file {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("results file {} does not hold a JSON array", path.display())]
    NotAnArray { path: PathBuf },
}

/// Append `records` to the JSON array in `path` and return the array's new
/// length.
///
/// A missing or empty file counts as an empty array. The file is replaced
/// atomically, so a failed write leaves the previous contents in place.
pub fn append_results(path: &Path, records: &[ResultRecord]) -> Result<usize, PersistError> {
    let mut entries = read_entries(path)?;
    for record in records {
        let entry = serde_json::to_value(record).map_err(|source| PersistError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push(entry);
    }
    write_entries(path, &entries).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), appended = records.len(), total = entries.len(), "results saved");
    Ok(entries.len())
}

fn read_entries(path: &Path) -> Result<Vec<serde_json::Value>, PersistError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PersistError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| PersistError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries),
        _ => Err(PersistError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

fn write_entries(path: &Path, entries: &[serde_json::Value]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, entries)?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
