//! `tally run` options.

use std::path::{Path, PathBuf};

use tally_meter::{Aggregation, MeterConfig, MeterStrategy, WeightConfigError, WeightTable};
use thiserror::Error;

/// Where results go when `--results` is not given.
pub const DEFAULT_RESULTS_FILE: &str = "results.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("{0} and {1} cannot be combined")]
    Conflict(&'static str, &'static str),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parsed `tally run` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub path: PathBuf,
    pub strategy: MeterStrategy,
    /// Count events instead of weighting them.
    pub count: bool,
    pub weights: Option<PathBuf>,
    pub results: PathBuf,
    /// Whether saved results are written to `results`.
    pub save: bool,
}

impl RunOptions {
    /// Parse the arguments after `run`. Flags may appear on either side of
    /// the path.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut path = None;
        let mut meter = None;
        let mut buffer = None;
        let mut count = false;
        let mut weights = None;
        let mut results = None;
        let mut save = true;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--meter=") {
                meter = Some(match value {
                    "sync" => MeterStrategy::Sync,
                    "stream" => MeterStrategy::Stream { capacity: None },
                    "off" => MeterStrategy::Off,
                    _ => return Err(invalid("--meter", value)),
                });
            } else if let Some(value) = arg.strip_prefix("--buffer=") {
                buffer = Some(value.parse::<usize>().map_err(|_| invalid("--buffer", value))?);
            } else if let Some(value) = arg.strip_prefix("--weights=") {
                weights = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--results=") {
                results = Some(PathBuf::from(value));
            } else if arg == "--count" {
                count = true;
            } else if arg == "--no-save" {
                save = false;
            } else if arg.starts_with('-') {
                return Err(UsageError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(UsageError::UnexpectedArgument(arg.clone()));
            }
        }

        if count && weights.is_some() {
            return Err(UsageError::Conflict("--count", "--weights"));
        }

        // A buffer size only means something for the stream strategy, and
        // asking for one selects it.
        let strategy = match (meter, buffer) {
            (None | Some(MeterStrategy::Stream { .. }), Some(capacity)) => MeterStrategy::Stream {
                capacity: Some(capacity),
            },
            (Some(_), Some(_)) => return Err(UsageError::Conflict("--buffer", "--meter")),
            (meter, None) => meter.unwrap_or_default(),
        };

        Ok(RunOptions {
            path: path.ok_or(UsageError::MissingPath)?,
            strategy,
            count,
            weights,
            results: results.unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE)),
            save,
        })
    }

    /// Build the session's meter configuration, loading the weight file if
    /// one was given.
    pub fn meter_config(&self) -> Result<MeterConfig, WeightConfigError> {
        let aggregation = aggregation(self.count, self.weights.as_deref())?;
        Ok(MeterConfig::new(self.strategy, aggregation))
    }
}

/// The aggregation policy for `--count` / `--weights`.
pub(crate) fn aggregation(
    count: bool,
    weights: Option<&Path>,
) -> Result<Aggregation, WeightConfigError> {
    if count {
        return Ok(Aggregation::Count);
    }
    let table = match weights {
        Some(path) => WeightTable::load(path)?,
        None => WeightTable::default(),
    };
    Ok(Aggregation::Weighted(table))
}

fn invalid(option: &'static str, value: &str) -> UsageError {
    UsageError::InvalidValue {
        option,
        value: value.to_string(),
    }
}
