//! Error types for the benchmark harness.
//!
//! Only [`BenchError::Open`], [`BenchError::Config`] and
//! [`BenchError::KeyFieldOverflow`] stop a run. Write and iterator errors are
//! counted and logged by the driver so the phase still reports.

use std::path::PathBuf;

/// Errors surfaced by the harness and its engine adapters.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The storage engine could not be opened.
    #[error("failed to open storage engine at {}: {message}", path.display())]
    Open { path: PathBuf, message: String },

    /// A single put was rejected by the engine.
    #[error("write failed for key {key}: {message}")]
    Write { key: String, message: String },

    /// A sequence or epoch id does not fit the 8-digit key field.
    #[error("{field} {value} does not fit in an 8-digit key field")]
    KeyFieldOverflow { field: &'static str, value: u64 },

    /// The benchmark parameters are unusable.
    #[error("invalid benchmark config: {0}")]
    Config(String),

    /// A point lookup was rejected by the engine.
    #[error("read failed: {0}")]
    Read(String),

    /// The engine reported an error through an iterator's status.
    #[error("iterator error: {0}")]
    Iterator(String),
}

impl BenchError {
    /// Build a [`BenchError::Write`] with the key rendered lossily.
    pub fn write(key: &[u8], message: impl Into<String>) -> Self {
        BenchError::Write {
            key: String::from_utf8_lossy(key).into_owned(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
