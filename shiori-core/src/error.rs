//! Error types for loading and parsing itinerary documents.

use std::path::PathBuf;
use thiserror::Error;

/// The document was read but could not be turned into an [`Itinerary`](crate::Itinerary).
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed JSON, a wrong type, or a missing required field.
    #[error("invalid itinerary document: {0}")]
    Json(#[from] serde_json::Error),

    /// A date field did not match any accepted format.
    #[error("invalid date in '{field}': '{input}'")]
    InvalidDate {
        /// Name of the document field (`departure_date` or `return_date`).
        field: &'static str,
        /// The raw value found in the document.
        input: String,
    },
}

/// The document could not be fetched or parsed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
