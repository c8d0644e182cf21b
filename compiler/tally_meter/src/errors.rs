//! Metering and weight-configuration errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a metering strategy. Never affects evaluation results.
#[derive(Debug, Error)]
pub enum MeterError {
    /// The consumer thread could not be started.
    #[error("failed to spawn meter consumer: {0}")]
    Spawn(#[source] io::Error),

    /// The consumer thread panicked before it could report its tally.
    #[error("meter consumer panicked")]
    ConsumerPanicked,

    /// The consumer stopped receiving while evaluation was still sending.
    #[error("meter consumer disconnected; {dropped} event(s) were not counted")]
    ConsumerDisconnected { dropped: u64 },
}

/// A weight table could not be loaded.
#[derive(Debug, Error)]
pub enum WeightConfigError {
    #[error("cannot read weight file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed weight file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown operation kind `{0}`")]
    UnknownKind(String),

    #[error("weight for `{kind}` must be finite and non-negative, got {weight}")]
    InvalidWeight { kind: String, weight: f64 },
}
