// src/error.rs
//! Error type shared by the library, the CLI and the GUI.
//!
//! The sampling/extraction/serialization core is total and never returns
//! one of these. Malformed records and malformed HTML degrade to empty
//! fields instead of raising, so there is no "malformed record" variant.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The record document could not be obtained (transport, HTTP status, file read).
    #[error("input unavailable from {origin}: {reason}")]
    InputUnavailable { origin: String, reason: String },

    /// The document was fetched but is not a JSON object of records.
    #[error("record set is not a JSON object: {0}")]
    InvalidRecordSet(#[from] serde_json::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    pub(crate) fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Error::InputUnavailable { origin: origin.into(), reason: reason.to_string() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
