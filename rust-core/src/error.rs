//! Error types for waveform decoding and spectral transforms

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a file on disk into a sample matrix.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed wave header: {0}")]
    Malformed(#[from] hound::Error),

    #[error("Unsupported sample width: {bits} bits (only 16-bit signed samples are supported)")]
    UnsupportedSampleWidth { bits: u16 },

    #[error("Frame rate is zero, no time axis can be derived")]
    ZeroFrameRate,

    #[error("Truncated payload: header declares {expected} bytes but only {available} are present")]
    Truncated { expected: usize, available: usize },

    #[error("Failed to read sample payload: {0}")]
    Io(#[from] std::io::Error),
}

/// A caller-supplied value that violates an operation's contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub String);

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
