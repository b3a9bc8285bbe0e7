//! Result types for extraction output.
//!
//! A page either yields text or a known failure. The failure's `Display`
//! form is the message written into a record's `content` field, so existing
//! consumers of the output keep seeing the same strings.

use std::fmt;

use serde::Serialize;

/// Why a page produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionFailure {
    /// The server answered with something other than 200.
    HttpStatus {
        /// The HTTP status code received.
        code: u16,
    },

    /// No `div.innerdiv.docbody` element in the page.
    MissingContainer,

    /// The request itself failed (only recorded when failures are isolated).
    Transport {
        /// Error message from the transport.
        detail: String,
    },
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus { code } => {
                write!(f, "Failed to retrieve the webpage. Status code: {code}")
            }
            Self::MissingContainer => f.write_str("Could not find the main content"),
            Self::Transport { detail } => {
                write!(f, "Failed to retrieve the webpage. Error: {detail}")
            }
        }
    }
}

/// Outcome of fetching and extracting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Cleaned paragraph text, one paragraph per line.
    Text(String),

    /// The page could not be turned into text.
    Failed(ExtractionFailure),
}

impl Extraction {
    /// Returns the extracted text, or `None` for a failure.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure, or `None` when text was extracted.
    #[must_use]
    pub fn failure(&self) -> Option<&ExtractionFailure> {
        match self {
            Self::Text(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// True when text was extracted (possibly empty).
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The string stored in a record's `content` field.
    #[must_use]
    pub fn content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Failed(failure) => failure.to_string(),
        }
    }
}

impl From<ExtractionFailure> for Extraction {
    fn from(failure: ExtractionFailure) -> Self {
        Self::Failed(failure)
    }
}
