use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::domain::SeriesError;

/// Why a fetch did not produce a series.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Timeout(Duration),
    Decode(String),
    InvalidPayload(SeriesError),
    Cancelled,
    /// The fetch task stopped without sending a result (e.g. the provider panicked).
    Aborted,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}.", msg),
            FetchError::Timeout(after) => {
                write!(f, "Fetch timed out after {:.1}s", after.as_secs_f64())
            }
            FetchError::Decode(msg) => write!(f, "Could not decode series: {}", msg),
            FetchError::InvalidPayload(err) => write!(f, "Invalid series: {}", err),
            FetchError::Cancelled => write!(f, "Fetch cancelled"),
            FetchError::Aborted => write!(f, "Fetch task ended without a result"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::InvalidPayload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SeriesError> for FetchError {
    fn from(err: SeriesError) -> Self {
        FetchError::InvalidPayload(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
