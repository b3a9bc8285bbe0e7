//! Error types for founders-sample.
//!
//! Anticipated per-page failures (bad status, missing content container) are
//! not errors; they are carried as [`crate::ExtractionFailure`] values. This
//! enum covers everything that aborts a run.

/// Error type for loading, fetching and writing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the metadata file or writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The metadata file is not valid JSON, or the output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A permalink is not an absolute http(s) URL.
    #[error("Invalid permalink {url:?}: {reason}")]
    InvalidUrl {
        /// The offending permalink.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A sampled record has no string `permalink` field.
    #[error("Record {index} has no string `permalink` field")]
    MissingPermalink {
        /// Position of the record within the sample.
        index: usize,
    },

    /// The metadata document does not contain a list of records.
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),
}

/// Result type alias for founders-sample operations.
pub type Result<T> = std::result::Result<T, Error>;
